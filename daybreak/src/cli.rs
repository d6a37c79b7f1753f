// daybreak/src/cli.rs
//! Defines the command-line argument structure using clap.
use std::io::{self, Write};

use clap::{Parser, Subcommand};
use colored::Colorize;
use daybreak_common::error::Result;
use daybreak_common::{Config, DaybreakError, LaunchTable};

pub mod launch_apps;

use crate::cli::launch_apps::LaunchApps;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "start-the-day", bin_name = "start-the-day")]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Action to run. Without one, every daily action runs.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Launch predefined applications and commands in the background
    LaunchApps(LaunchApps),
}

impl Command {
    pub async fn run(&self, config: &Config, table: &LaunchTable) -> Result<()> {
        match self {
            Self::LaunchApps(command) => command.run(config, table).await,
        }
    }

    /// Prefix for the message printed when the command fails.
    pub fn failure_label(&self) -> &'static str {
        match self {
            Self::LaunchApps(_) => "Error launching apps",
        }
    }

    /// Prints why the command failed. A cancellation goes to `out`, after the progress lines it
    /// interrupted; every other error goes to `err`.
    pub fn report_failure<O, E>(
        &self,
        error: &DaybreakError,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()>
    where
        O: Write,
        E: Write,
    {
        match error {
            DaybreakError::Interrupted => writeln!(out, "\n{}", error.to_string().yellow()),
            _ => writeln!(err, "{}: {:#}", self.failure_label().red().bold(), error),
        }
    }
}

/// The actions run when `start-the-day` is invoked without a subcommand.
pub fn daily_actions() -> Vec<Command> {
    vec![Command::LaunchApps(LaunchApps { list: false })]
}
