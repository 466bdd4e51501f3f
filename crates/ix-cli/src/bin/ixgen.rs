use anyhow::Result;
use clap::Parser;

use ix_cli::{GenArgs, casegen, init_logging};

fn main() -> Result<()> {
    let args = GenArgs::parse();
    init_logging(args.verbose)?;
    casegen::run(&args)
}
