//! Core types for the traffic light simulation
//!
//! These are plain data types shared by the lights, queues and runners.

use std::fmt;

/// Last iteration (inclusive) at which vehicles may arrive
pub const ARRIVAL_WINDOW: u64 = 500;

/// Number of runs attempted when none is specified
pub const DEFAULT_RUNS: u32 = 100;

/// Which approach a light controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Colour of a traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightStatus {
    Red,
    Green,
}

/// A vehicle waiting at a light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    /// Iteration at which the vehicle joined the queue
    pub generated_at: u64,
}

impl Vehicle {
    pub fn new(generated_at: u64) -> Self {
        Self { generated_at }
    }

    /// Iterations spent waiting if the vehicle departs at `iteration`
    pub fn wait_until(&self, iteration: u64) -> u64 {
        iteration.saturating_sub(self.generated_at)
    }
}
