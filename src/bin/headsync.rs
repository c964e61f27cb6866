//! Headsync CLI Binary
//!
//! Command-line interface over the SEO metadata core: render resolved
//! heads, validate route maps, seed configuration.

use clap::Parser;
use headsync::cli::{Cli, CliContext};
use headsync::logging;
use std::process;

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(cli.config.as_deref(), cli.metadata.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {e:#}");
            process::exit(1);
        }
    };

    let mut logging_config = context.site().logging.clone();
    if let Some(level) = &cli.log_level {
        logging_config.level = level.clone();
    }
    if let Err(e) = logging::init(&logging_config) {
        eprintln!("Error initializing logging: {e}");
        process::exit(1);
    }

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{output}");
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
