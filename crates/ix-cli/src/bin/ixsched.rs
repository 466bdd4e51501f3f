use anyhow::Result;
use clap::Parser;

use ix_cli::{SchedArgs, init_logging, sched};

fn main() -> Result<()> {
    let args = SchedArgs::parse();
    init_logging(args.verbose)?;
    sched::run(&args)
}
