//! Traffic Light Simulation Library
//!
//! Simulates two traffic lights sharing an intersection, repeats the
//! simulation many times and averages the per-light statistics.

pub mod report;
pub mod simulation;
