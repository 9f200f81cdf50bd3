//! Repeats the single-run simulation and averages the results

use log::{info, warn};

use super::error::SimulationError;
use super::intersection::run_one_simulation;
use super::params::{RunOptions, SimParams};
use super::random::RunSeeds;
use super::stats::{AggregateResult, AveragingMode, RunOutcome};

/// Runs a fixed number of attempts and folds the successful ones together
#[derive(Debug, Clone)]
pub struct RunAggregator {
    pub params: SimParams,
    pub options: RunOptions,
    /// Attempts to make, successful or not
    pub runs: u32,
}

impl RunAggregator {
    pub fn new(
        params: SimParams,
        options: RunOptions,
        runs: u32,
    ) -> Result<Self, SimulationError> {
        if runs == 0 {
            return Err(SimulationError::invalid("runs", "at least one run is required"));
        }
        Ok(Self {
            params,
            options,
            runs,
        })
    }

    /// Run every attempt, each with its own generator from `seeds`
    pub fn run(&self, seeds: &mut RunSeeds) -> Result<AggregateResult, SimulationError> {
        let mut outcomes = Vec::with_capacity(self.runs as usize);
        for _ in 0..self.runs {
            let mut rng = seeds.next_source();
            outcomes.push(run_one_simulation(self.params, self.options, &mut rng)?);
        }

        let aggregate = aggregate_outcomes(outcomes, self.options.averaging)?;
        info!(
            "Averaged {} of {} runs",
            aggregate.completed_runs, aggregate.attempted_runs
        );
        Ok(aggregate)
    }
}

/// Fold run outcomes in order, seeding from the first successful run
///
/// Failed runs are skipped but still count as attempts.
pub fn aggregate_outcomes<I>(
    outcomes: I,
    mode: AveragingMode,
) -> Result<AggregateResult, SimulationError>
where
    I: IntoIterator<Item = RunOutcome>,
{
    let mut aggregate: Option<AggregateResult> = None;
    let mut attempts = 0u32;

    for outcome in outcomes {
        attempts += 1;
        match outcome {
            RunOutcome::Completed(result) => {
                aggregate = Some(match aggregate.take() {
                    Some(mut folded) => {
                        folded.fold(&result, mode);
                        folded
                    }
                    None => AggregateResult::seed(&result),
                });
            }
            RunOutcome::Failed(e) => warn!("Discarding run {attempts}: {e}"),
        }
    }

    let mut aggregate = aggregate.ok_or(SimulationError::NoSuccessfulRuns { attempts })?;
    aggregate.attempted_runs = attempts;
    Ok(aggregate)
}
