// daybreak/src/main.rs
use std::io;
use std::process;

use clap::Parser;
use colored::Colorize;
use daybreak::cli::{daily_actions, CliArgs};
use daybreak::logging;
use daybreak_common::config::Config;
use daybreak_common::launch_table::LaunchTable;
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();
    logging::init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            debug!("Could not load config: {:#}", e);
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            process::exit(1);
        }
    };
    let table = LaunchTable::builtin();

    let commands = match cli_args.command {
        Some(command) => vec![command],
        None => daily_actions(),
    };

    for command in &commands {
        if let Err(e) = command.run(&config, &table).await {
            debug!("Command failed: {:#}", e);
            let _ = command.report_failure(&e, &mut io::stdout(), &mut io::stderr());
            process::exit(1);
        }
    }

    debug!("Command completed successfully.");
}
