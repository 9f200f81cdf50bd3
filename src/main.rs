use anyhow::{Context, Result};
use clap::Parser;

use traffic_lights::report::Report;
use traffic_lights::simulation::{
    AveragingMode, RunAggregator, RunOptions, RunSeeds, SimParams, DEFAULT_RUNS,
};

#[derive(Parser)]
#[command(name = "traffic_lights")]
#[command(about = "Simulate two traffic lights and report averaged queue statistics")]
struct Cli {
    /// Arrival rate at the left light, as a percentage (0-100)
    #[arg(allow_negative_numbers = true)]
    arrival_rate_left: i64,

    /// Iterations the left light stays green
    #[arg(allow_negative_numbers = true)]
    light_period_left: i64,

    /// Arrival rate at the right light, as a percentage (0-100)
    #[arg(allow_negative_numbers = true)]
    arrival_rate_right: i64,

    /// Iterations the right light stays green
    #[arg(allow_negative_numbers = true)]
    light_period_right: i64,

    /// Number of simulation runs to attempt
    #[arg(long, default_value_t = DEFAULT_RUNS)]
    runs: u32,

    /// Seed for reproducible results
    #[arg(long)]
    seed: Option<u64>,

    /// How waits and run results are averaged
    #[arg(long, value_enum, default_value_t = AveragingMode::Halving)]
    averaging: AveragingMode,

    /// Clearance iterations after which a run is abandoned (unbounded if omitted)
    #[arg(long)]
    max_clearance: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,traffic_lights=info"),
    )
    .init();

    let cli = Cli::parse();

    let params = SimParams::new(
        cli.arrival_rate_left,
        cli.light_period_left,
        cli.arrival_rate_right,
        cli.light_period_right,
    )
    .context("Invalid simulation parameters")?;
    let options = RunOptions::new(cli.averaging, cli.max_clearance)
        .context("Invalid run options")?;
    let aggregator =
        RunAggregator::new(params, options, cli.runs).context("Invalid run options")?;

    let mut seeds = RunSeeds::new(cli.seed);
    let aggregate = aggregator
        .run(&mut seeds)
        .context("Simulation failed")?;

    print!("{}", Report::new(&params, &aggregate));
    Ok(())
}
