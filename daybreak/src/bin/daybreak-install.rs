// daybreak/src/bin/daybreak-install.rs
use std::process;

use colored::Colorize;
use daybreak::{install, logging};
use daybreak_common::config::Config;
use tracing::debug;

fn main() {
    logging::init();

    let result = Config::load().and_then(|config| install::run(&config));
    if let Err(e) = result {
        debug!("Installation failed: {:#}", e);
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
