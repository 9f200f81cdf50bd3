//! Text report of the averaged results

use std::fmt;

use crate::simulation::{AggregateResult, SimParams, Side};

/// The input parameters followed by the averaged statistics
pub struct Report<'a> {
    params: &'a SimParams,
    aggregate: &'a AggregateResult,
}

impl<'a> Report<'a> {
    pub fn new(params: &'a SimParams, aggregate: &'a AggregateResult) -> Self {
        Self { params, aggregate }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parameter Values:")?;
        for side in [Side::Left, Side::Right] {
            writeln!(f, "    from {side}:")?;
            writeln!(f, "        traffic arrival rate: {}", self.params.arrival_rate(side))?;
            writeln!(f, "        traffic light period {}", self.params.period(side))?;
        }

        writeln!(
            f,
            "Results (averaged over {} runs):",
            self.aggregate.completed_runs
        )?;
        for side in [Side::Left, Side::Right] {
            let stats = self.aggregate.side(side);
            writeln!(f, "    from {side}:")?;
            writeln!(f, "        number of vehicles: {:.6}", stats.vehicle_count)?;
            writeln!(f, "        average waiting time: {:.6}", stats.avg_wait)?;
            writeln!(f, "        maximum waiting time: {:.6}", stats.max_wait)?;
            writeln!(f, "        clearance time: {:.6}", stats.clearance_time)?;
        }

        let discarded = self.aggregate.attempted_runs - self.aggregate.completed_runs;
        if discarded > 0 {
            writeln!(
                f,
                "({} of {} runs discarded)",
                discarded, self.aggregate.attempted_runs
            )?;
        }

        Ok(())
    }
}
