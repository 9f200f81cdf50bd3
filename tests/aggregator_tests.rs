//! Multi-run aggregation tests

use traffic_lights::simulation::{
    aggregate_outcomes, AggregateResult, AveragingMode, LightStats, RunAggregator, RunOptions,
    RunOutcome, RunSeeds, Side, SimParams, SimulationError, SimulationResult,
};

fn result(left_count: u64, left_wait: f64, right_count: u64, right_clearance: u64) -> SimulationResult {
    SimulationResult {
        left: LightStats {
            avg_wait: left_wait,
            max_wait: left_count * 2,
            vehicle_count: left_count,
            clearance_time: 0,
        },
        right: LightStats {
            avg_wait: 1.5,
            max_wait: 3,
            vehicle_count: right_count,
            clearance_time: right_clearance,
        },
    }
}

fn failed() -> RunOutcome {
    RunOutcome::Failed(SimulationError::ClearanceLimitExceeded {
        side: Side::Left,
        limit: 10,
    })
}

#[test]
fn test_halving_recurrence_seeded_by_first_run() {
    let runs = [
        result(8, 4.0, 16, 2),
        result(4, 2.0, 8, 6),
        result(12, 6.0, 0, 4),
    ];

    let aggregate = aggregate_outcomes(
        runs.iter().copied().map(RunOutcome::Completed),
        AveragingMode::Halving,
    )
    .unwrap();

    // ((8 + 4) / 2 + 12) / 2 = 9
    assert_eq!(aggregate.left.vehicle_count, 9.0);
    // ((4 + 2) / 2 + 6) / 2 = 4.5
    assert_eq!(aggregate.left.avg_wait, 4.5);
    // ((16 + 8) / 2 + 24) / 2 = 18
    assert_eq!(aggregate.left.max_wait, 18.0);
    // ((16 + 8) / 2 + 0) / 2 = 6
    assert_eq!(aggregate.right.vehicle_count, 6.0);
    // ((2 + 6) / 2 + 4) / 2 = 4
    assert_eq!(aggregate.right.clearance_time, 4.0);
    assert_eq!(aggregate.right.avg_wait, 1.5);

    assert_eq!(aggregate.completed_runs, 3);
    assert_eq!(aggregate.attempted_runs, 3);
}

#[test]
fn test_halving_matches_explicit_fold() {
    let runs: Vec<SimulationResult> = (0..10u64)
        .map(|i| result(i * 3 + 1, i as f64 * 0.5, 20 - i, i % 4))
        .collect();

    let aggregate = aggregate_outcomes(
        runs.iter().copied().map(RunOutcome::Completed),
        AveragingMode::Halving,
    )
    .unwrap();

    let mut expected = runs[0].left.vehicle_count as f64;
    let mut expected_wait = runs[0].left.avg_wait;
    for run in &runs[1..] {
        expected = (expected + run.left.vehicle_count as f64) / 2.0;
        expected_wait = (expected_wait + run.left.avg_wait) / 2.0;
    }
    assert_eq!(aggregate.left.vehicle_count, expected);
    assert_eq!(aggregate.left.avg_wait, expected_wait);
}

#[test]
fn test_single_run_is_its_own_aggregate() {
    let run = result(5, 2.5, 7, 1);
    let aggregate =
        aggregate_outcomes([RunOutcome::Completed(run)], AveragingMode::Halving).unwrap();

    assert_eq!(aggregate, AggregateResult::seed(&run));
    assert_eq!(aggregate.left.vehicle_count, 5.0);
    assert_eq!(aggregate.right.clearance_time, 1.0);
}

#[test]
fn test_failed_runs_are_discarded() {
    let outcomes = vec![
        failed(),
        RunOutcome::Completed(result(8, 4.0, 0, 0)),
        failed(),
        RunOutcome::Completed(result(4, 2.0, 0, 0)),
    ];

    let aggregate = aggregate_outcomes(outcomes, AveragingMode::Halving).unwrap();

    assert_eq!(aggregate.left.vehicle_count, 6.0);
    assert_eq!(aggregate.completed_runs, 2);
    assert_eq!(aggregate.attempted_runs, 4);
}

#[test]
fn test_all_runs_failed() {
    let err = aggregate_outcomes(vec![failed(), failed()], AveragingMode::Halving).unwrap_err();
    assert!(matches!(err, SimulationError::NoSuccessfulRuns { attempts: 2 }));
}

#[test]
fn test_mean_averaging() {
    let outcomes = vec![
        RunOutcome::Completed(result(2, 1.0, 0, 0)),
        RunOutcome::Completed(result(4, 2.0, 0, 0)),
        RunOutcome::Completed(result(12, 6.0, 0, 0)),
    ];

    let aggregate = aggregate_outcomes(outcomes, AveragingMode::Mean).unwrap();

    assert_eq!(aggregate.left.vehicle_count, 6.0);
    assert_eq!(aggregate.left.avg_wait, 3.0);
}

#[test]
fn test_zero_runs_rejected() {
    let params = SimParams::new(10, 5, 10, 5).unwrap();
    let err = RunAggregator::new(params, RunOptions::default(), 0).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidInput { field: "runs", .. }));
}

#[test]
fn test_aggregator_runs_every_attempt() {
    let params = SimParams::new(30, 5, 60, 8).unwrap();
    let aggregator = RunAggregator::new(params, RunOptions::default(), 20).unwrap();

    let aggregate = aggregator.run(&mut RunSeeds::new(Some(17))).unwrap();

    assert_eq!(aggregate.attempted_runs, 20);
    assert_eq!(aggregate.completed_runs, 20);
    assert!(aggregate.left.vehicle_count > 0.0);
    assert!(aggregate.right.vehicle_count > aggregate.left.vehicle_count);
}

#[test]
fn test_aggregator_is_reproducible_with_seed() {
    let params = SimParams::new(55, 4, 45, 6).unwrap();
    let aggregator = RunAggregator::new(params, RunOptions::default(), 10).unwrap();

    let first = aggregator.run(&mut RunSeeds::new(Some(8))).unwrap();
    let second = aggregator.run(&mut RunSeeds::new(Some(8))).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_aggregator_with_no_traffic() {
    let params = SimParams::new(0, 10, 0, 10).unwrap();
    let aggregator = RunAggregator::new(params, RunOptions::default(), 5).unwrap();

    let aggregate = aggregator.run(&mut RunSeeds::new(None)).unwrap();

    for side in [Side::Left, Side::Right] {
        let stats = aggregate.side(side);
        assert_eq!(stats.vehicle_count, 0.0);
        assert_eq!(stats.avg_wait, 0.0);
        assert_eq!(stats.max_wait, 0.0);
        assert_eq!(stats.clearance_time, 0.0);
    }
}

#[test]
fn test_period_beyond_a_million_iterations_still_completes() {
    // Right stays green for 1.1M iterations; the left queue drains only after that
    let params = SimParams::new(50, 1, 0, 1_100_000).unwrap();
    let aggregator = RunAggregator::new(params, RunOptions::default(), 2).unwrap();

    let aggregate = aggregator.run(&mut RunSeeds::new(Some(1))).unwrap();

    assert_eq!(aggregate.completed_runs, 2);
    assert_eq!(aggregate.attempted_runs, 2);
    assert!(aggregate.left.vehicle_count > 0.0);
    assert!(aggregate.left.clearance_time > 1_000_000.0);
    assert_eq!(aggregate.right.clearance_time, 0.0);
}
