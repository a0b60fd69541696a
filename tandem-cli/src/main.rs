#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use anyhow::Result;
use clap::Parser;
use tandem_common::config::Config;
use tandem_common::logging::init_logging;
use tandem_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_and_validate(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.observability.log_level.clone_from(level);
    }

    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );

    let output = tandem_cli::run(&cli.command, &config)?;
    println!("{output}");

    Ok(())
}
