//! A two-light intersection driven through a single simulation run
//!
//! Each iteration first evaluates the controller for the green light. If the
//! lights swapped, nothing else happens that iteration. Otherwise vehicles may
//! arrive (while the arrival window is open) and the green light lets one
//! vehicle through. Once the window has closed, the run ends as soon as both
//! queues are empty.

use log::debug;

use super::error::SimulationError;
use super::light::{LightChange, SimLight};
use super::params::{RunOptions, SimParams};
use super::random::RandomSource;
use super::stats::{RunOutcome, SimulationResult};
use super::types::{LightStatus, Side, ARRIVAL_WINDOW};

/// Whether a run needs more iterations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Running,
    Finished,
}

/// Two lights sharing one intersection for the length of a run
#[derive(Debug, Clone)]
pub struct SimIntersection {
    pub left: SimLight,
    pub right: SimLight,
    params: SimParams,
    options: RunOptions,
    /// Current iteration, starting at 0
    pub iteration: u64,
}

impl SimIntersection {
    /// Fresh intersection with the right light green and the left light red
    pub fn new(params: SimParams, options: RunOptions) -> Self {
        Self {
            left: SimLight::new(Side::Left, params.period_left, LightStatus::Red),
            right: SimLight::new(Side::Right, params.period_right, LightStatus::Green),
            params,
            options,
            iteration: 0,
        }
    }

    pub fn light(&self, side: Side) -> &SimLight {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn light_mut(&mut self, side: Side) -> &mut SimLight {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn green_side(&self) -> Side {
        if self.left.is_green() {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn in_arrival_window(&self) -> bool {
        self.iteration <= ARRIVAL_WINDOW
    }

    pub fn queues_empty(&self) -> bool {
        self.left.queue.is_empty() && self.right.queue.is_empty()
    }

    /// Run one iteration
    pub fn step<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<StepResult, SimulationError> {
        if !self.in_arrival_window() {
            if self.queues_empty() {
                return Ok(StepResult::Finished);
            }
            if let Some(limit) = self.options.max_clearance {
                if self.iteration - ARRIVAL_WINDOW > limit {
                    let side = if self.left.queue.is_empty() {
                        Side::Right
                    } else {
                        Side::Left
                    };
                    return Err(SimulationError::ClearanceLimitExceeded { side, limit });
                }
            }
            self.left.note_clearance();
            self.right.note_clearance();
        }

        let green = self.green_side();
        let change = match green {
            Side::Left => self.left.update(&mut self.right),
            Side::Right => self.right.update(&mut self.left),
        };

        if change == LightChange::Held {
            if self.in_arrival_window() {
                for side in [Side::Left, Side::Right] {
                    if rng.arrives(self.params.arrival_rate(side)) {
                        let iteration = self.iteration;
                        self.light_mut(side).enqueue(iteration)?;
                    }
                }
            }
            let iteration = self.iteration;
            let averaging = self.options.averaging;
            self.light_mut(green).release_vehicle(iteration, averaging);
        }

        self.iteration += 1;
        Ok(StepResult::Running)
    }

    /// Step until both queues have drained after the arrival window
    pub fn run<R: RandomSource + ?Sized>(
        mut self,
        rng: &mut R,
    ) -> Result<SimulationResult, SimulationError> {
        while self.step(rng)? == StepResult::Running {}
        Ok(self.result())
    }

    pub fn result(&self) -> SimulationResult {
        SimulationResult {
            left: self.left.stats(),
            right: self.right.stats(),
        }
    }
}

/// Simulate one complete run
///
/// Runs that exceed an optional clearance bound come back as `RunOutcome::Failed`.
/// Allocation failures are returned as errors since no later run could do
/// better.
pub fn run_one_simulation<R: RandomSource + ?Sized>(
    params: SimParams,
    options: RunOptions,
    rng: &mut R,
) -> Result<RunOutcome, SimulationError> {
    match SimIntersection::new(params, options).run(rng) {
        Ok(result) => {
            debug!(
                "Run finished: left {} vehicles (avg wait {:.2}), right {} vehicles (avg wait {:.2})",
                result.left.vehicle_count,
                result.left.avg_wait,
                result.right.vehicle_count,
                result.right.avg_wait
            );
            Ok(RunOutcome::Completed(result))
        }
        Err(e) if e.is_run_local() => Ok(RunOutcome::Failed(e)),
        Err(e) => Err(e),
    }
}
