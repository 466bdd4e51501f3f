//! `ixsched`: read a vehicle stream, solve it, write the zone schedule.

use std::fs::File;
use std::io::{self, BufRead, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;

use ix_core::{RingPlanner, ZONE_COUNT, ZoneId};
use ix_graph::Strategy;
use ix_io::{HeaderMode, InputFormat, LoadOptions, ScheduleCsvWriter, load_vehicles, read_vehicles, write_schedule};
use ix_solve::{NoopObserver, Solution, SolverBuilder, SolverConfig};

/// Schedule vehicles through a four-zone intersection without deadlock.
#[derive(Parser, Debug)]
#[command(name = "ixsched")]
#[command(version, about, long_about = None)]
pub struct SchedArgs {
    /// Vehicle stream to read (default: standard input)
    pub input: Option<PathBuf>,

    /// File to write the schedule to (default: standard output)
    pub output: Option<PathBuf>,

    /// Tie-break strategy of the first attempt (fcfs, random)
    #[arg(short, long, default_value_t = Strategy::Fcfs)]
    pub strategy: Strategy,

    /// Seed for the random strategy
    #[arg(long, default_value_t = SolverConfig::DEFAULT_SEED)]
    pub seed: u64,

    /// Give up after this many deadlocked attempts
    #[arg(long, default_value_t = SolverConfig::DEFAULT_MAX_ATTEMPTS, conflicts_with = "unbounded")]
    pub max_attempts: u32,

    /// Retry until a schedule is found, without an attempt limit
    #[arg(long)]
    pub unbounded: bool,

    /// Whether the stream starts with a vehicle-count line (absent, count)
    #[arg(long, default_value_t = HeaderMode::Absent)]
    pub header: HeaderMode,

    /// Input encoding (text, csv)
    #[arg(long, default_value_t = InputFormat::Text)]
    pub format: InputFormat,

    /// Also write one CSV row per scheduled visit to this file
    #[arg(long, value_name = "PATH")]
    pub csv_export: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl SchedArgs {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions { header: self.header, format: self.format }
    }

    pub fn solver_builder(&self) -> SolverBuilder {
        let builder = SolverBuilder::new().strategy(self.strategy).seed(self.seed);
        if self.unbounded {
            builder.unbounded()
        } else {
            builder.max_attempts(self.max_attempts)
        }
    }
}

/// Load from `reader` and solve with the options in `args`.
pub fn solve_stream<R: BufRead>(args: &SchedArgs, reader: R) -> Result<Solution> {
    let vehicles = read_vehicles(reader, &args.load_options(), &RingPlanner)
        .context("failed to load vehicle stream")?;
    solve(args, &vehicles)
}

fn solve(args: &SchedArgs, vehicles: &[ix_core::Vehicle]) -> Result<Solution> {
    let mut solver = args.solver_builder().build()?;
    let solution = solver.solve(vehicles, &mut NoopObserver)?;
    Ok(solution)
}

/// `(zone, visits, completion estimate)` for every zone, in zone order.
pub fn zone_estimates(solution: &Solution) -> [(ZoneId, usize, f64); ZONE_COUNT] {
    ZoneId::ALL.map(|zone| {
        let s = &solution.schedule;
        (zone, s.zone(zone).len(), s.completion_estimate(zone))
    })
}

pub fn run(args: &SchedArgs) -> Result<()> {
    let solution = match &args.input {
        Some(path) => {
            let vehicles = load_vehicles(path, &args.load_options(), &RingPlanner)
                .with_context(|| format!("failed to load {}", path.display()))?;
            solve(args, &vehicles)?
        }
        None => solve_stream(args, io::stdin().lock())?,
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_schedule(BufWriter::new(file), &solution.schedule)?;
        }
        None => write_schedule(io::stdout().lock(), &solution.schedule)?,
    }

    if let Some(path) = &args.csv_export {
        let mut writer = ScheduleCsvWriter::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        writer.write_schedule(&solution.schedule)?;
        writer.finish()?;
    }

    info!(
        vehicles = solution.tcg.vehicle_count(),
        attempts = solution.attempts,
        strategy = %solution.strategy,
        "schedule written"
    );
    for (zone, visits, completion) in zone_estimates(&solution) {
        info!(%zone, visits, completion = format_args!("{completion:.2}"), "zone completion estimate");
    }
    Ok(())
}
