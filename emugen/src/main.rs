mod commands;
mod logging;
mod reports;

use clap::Parser;
use eyre::Result;

use crate::{commands::Cli, logging::init_logging};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    cli.run()
}
