//! Statistics produced by single runs and by the aggregate over many runs

use super::error::SimulationError;
use super::types::Side;

/// How successive values are folded into an average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AveragingMode {
    /// `(old + new) / 2`, weighting recent values more heavily
    #[default]
    Halving,
    /// True running mean over every value seen
    Mean,
}

impl AveragingMode {
    /// Fold `value` into `current`, where `count` includes `value`
    pub fn blend(self, current: f64, value: f64, count: u64) -> f64 {
        match self {
            AveragingMode::Halving => (current + value) / 2.0,
            AveragingMode::Mean => {
                if count == 0 {
                    current
                } else {
                    current + (value - current) / count as f64
                }
            }
        }
    }
}

/// Final statistics of one light after a run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightStats {
    pub avg_wait: f64,
    pub max_wait: u64,
    pub vehicle_count: u64,
    pub clearance_time: u64,
}

/// Snapshot of both lights at the end of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationResult {
    pub left: LightStats,
    pub right: LightStats,
}

impl SimulationResult {
    pub fn side(&self, side: Side) -> &LightStats {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Outcome of one attempted run
#[derive(Debug)]
pub enum RunOutcome {
    Completed(SimulationResult),
    Failed(SimulationError),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }
}

/// Averaged statistics of one light across runs
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateStats {
    pub avg_wait: f64,
    pub max_wait: f64,
    pub vehicle_count: f64,
    pub clearance_time: f64,
}

impl From<&LightStats> for AggregateStats {
    fn from(stats: &LightStats) -> Self {
        Self {
            avg_wait: stats.avg_wait,
            max_wait: stats.max_wait as f64,
            vehicle_count: stats.vehicle_count as f64,
            clearance_time: stats.clearance_time as f64,
        }
    }
}

impl AggregateStats {
    fn fold(&mut self, run: &LightStats, mode: AveragingMode, count: u64) {
        self.avg_wait = mode.blend(self.avg_wait, run.avg_wait, count);
        self.max_wait = mode.blend(self.max_wait, run.max_wait as f64, count);
        self.vehicle_count = mode.blend(self.vehicle_count, run.vehicle_count as f64, count);
        self.clearance_time = mode.blend(self.clearance_time, run.clearance_time as f64, count);
    }
}

/// Accumulated statistics over every successful run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateResult {
    pub left: AggregateStats,
    pub right: AggregateStats,
    /// Runs folded into the averages
    pub completed_runs: u32,
    /// Runs attempted, including discarded ones
    pub attempted_runs: u32,
}

impl AggregateResult {
    /// Start an aggregate from the first successful run's raw values
    pub fn seed(first: &SimulationResult) -> Self {
        Self {
            left: AggregateStats::from(&first.left),
            right: AggregateStats::from(&first.right),
            completed_runs: 1,
            attempted_runs: 1,
        }
    }

    /// Fold another successful run into the averages
    pub fn fold(&mut self, run: &SimulationResult, mode: AveragingMode) {
        self.completed_runs += 1;
        let count = u64::from(self.completed_runs);
        self.left.fold(&run.left, mode, count);
        self.right.fold(&run.right, mode, count);
    }

    pub fn side(&self, side: Side) -> &AggregateStats {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}
