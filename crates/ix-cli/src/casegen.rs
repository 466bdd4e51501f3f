//! `ixgen`: write random vehicle streams.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use tracing::info;

use ix_core::SolverRng;
use ix_io::{GeneratorConfig, HeaderMode, case_path, generate, write_vehicles};

/// Generate random vehicle streams for ixsched.
#[derive(Parser, Debug)]
#[command(name = "ixgen")]
#[command(version, about, long_about = None)]
pub struct GenArgs {
    /// Number of test cases (more than one requires --out)
    #[arg(long, default_value_t = 1)]
    pub cases: usize,

    /// Vehicles per case (default: random in 1..=1000)
    #[arg(long)]
    pub vehicles: Option<usize>,

    /// Root seed; case N uses a stream derived from it and N
    #[arg(long, default_value_t = 123)]
    pub seed: u64,

    /// Probability that a vehicle pays a toll
    #[arg(long, default_value_t = 0.25)]
    pub pay_prob: f64,

    /// Largest toll
    #[arg(long, default_value_t = 10_000)]
    pub pay_max: u64,

    /// Start each case with its vehicle count
    #[arg(long)]
    pub header: bool,

    /// Directory for testcase{N}.txt files (default: one case to standard output)
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GenArgs {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            vehicles: self.vehicles,
            pay_prob: self.pay_prob,
            pay_max: self.pay_max,
            ..GeneratorConfig::default()
        }
    }

    fn header_mode(&self) -> HeaderMode {
        if self.header { HeaderMode::Count } else { HeaderMode::Absent }
    }
}

pub fn run(args: &GenArgs) -> Result<()> {
    if !(0.0..=1.0).contains(&args.pay_prob) {
        bail!("--pay-prob must be within 0..=1, got {}", args.pay_prob);
    }
    let config = args.generator_config();

    let Some(dir) = &args.out else {
        if args.cases > 1 {
            bail!("--cases {} needs --out DIR", args.cases);
        }
        let specs = generate(&config, &mut SolverRng::for_problem(args.seed, 0));
        write_vehicles(io::stdout().lock(), &specs, args.header_mode())?;
        return Ok(());
    };

    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for index in 0..args.cases {
        let specs = generate(&config, &mut SolverRng::for_problem(args.seed, index));
        let path = case_path(dir, index);
        let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        write_vehicles(BufWriter::new(file), &specs, args.header_mode())?;
        info!(case = index, vehicles = specs.len(), path = %path.display(), "case written");
    }
    Ok(())
}
