//! Two-light traffic simulation
//!
//! This module contains the whole simulation core: the light state machine,
//! the vehicle queues, the single-run driver and the multi-run aggregator.
//! It has no I/O of its own beyond logging.

mod aggregator;
mod error;
mod intersection;
mod light;
mod params;
mod queue;
mod random;
mod stats;
mod types;

pub use aggregator::{aggregate_outcomes, RunAggregator};
pub use error::SimulationError;
pub use intersection::{run_one_simulation, SimIntersection, StepResult};
pub use light::{LightChange, SimLight};
pub use params::{RunOptions, SimParams};
pub use queue::VehicleQueue;
pub use random::{RandomSource, RunSeeds, SeededRandom, DRAW_RANGE};
pub use stats::{
    AggregateResult, AggregateStats, AveragingMode, LightStats, RunOutcome, SimulationResult,
};
pub use types::{LightStatus, Side, Vehicle, ARRIVAL_WINDOW, DEFAULT_RUNS};
