// daybreak/src/cli/launch_apps.rs
use std::future::Future;

use clap::Args;
use colored::Colorize;
use daybreak_common::error::Result;
use daybreak_common::{Config, LaunchTable};
use daybreak_core::host;
use daybreak_core::launch::{
    launch_until, LaunchEvent, LaunchOutcome, LaunchSummary, ShellSpawner, Spawner,
};
use tracing::debug;

#[derive(Args, Debug)]
pub struct LaunchApps {
    /// List all configured commands without launching them
    #[arg(long)]
    pub list: bool,
}

impl LaunchApps {
    pub async fn run(&self, config: &Config, table: &LaunchTable) -> Result<()> {
        let hostname = host::effective_hostname(config)?;
        let spawner = ShellSpawner::new(&config.shell);
        self.execute(&hostname, table, &spawner, interrupted())
            .await
            .map(|_| ())
    }

    /// Lists or launches the commands selected for `hostname`. Returns the batch summary when
    /// commands were launched.
    pub async fn execute<S, C>(
        &self,
        hostname: &str,
        table: &LaunchTable,
        spawner: &S,
        cancel: C,
    ) -> Result<Option<LaunchSummary>>
    where
        S: Spawner + ?Sized,
        C: Future<Output = ()>,
    {
        let commands = table.commands_for(hostname);
        debug!(
            "Selected {} command(s) for host '{}'",
            commands.len(),
            hostname
        );

        if self.list {
            println!("Configured launch commands for host '{hostname}':");
            for (i, command) in commands.iter().enumerate() {
                println!("  {}. {}", i + 1, command);
            }
            return Ok(None);
        }

        if commands.is_empty() {
            println!("{}", "No commands configured to launch".yellow());
            return Ok(None);
        }

        println!(
            "{}Launching {} command(s)...",
            "==> ".bold().blue(),
            commands.len()
        );
        let summary = launch_until(commands, spawner, print_event, cancel).await?;

        println!(
            "\nLaunch completed: {}/{} commands started successfully",
            summary.succeeded(),
            summary.total()
        );
        if !summary.all_started() {
            println!(
                "{}",
                "Some commands failed to launch. Check the output above for details.".yellow()
            );
        }
        Ok(Some(summary))
    }
}

fn print_event(event: LaunchEvent<'_>) {
    match event {
        LaunchEvent::Starting { command } => println!("Launching: {command}"),
        LaunchEvent::Finished(record) => match &record.outcome {
            LaunchOutcome::Started { pid } => {
                println!("  → Process started with PID: {}", pid.to_string().green())
            }
            LaunchOutcome::Failed { error } => {
                println!("  → {} {}", "Error launching command:".red(), error)
            }
        },
    }
}

/// Completes when the user presses Ctrl-C. Never completes if the handler cannot be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        debug!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
