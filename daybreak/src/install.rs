// daybreak/src/install.rs
use colored::Colorize;
use daybreak_common::error::Result;
use daybreak_common::Config;
use daybreak_core::install::{install_link, resolve_target, InstallReport, LinkOutcome};
use tracing::debug;

/// Links `~/.local/bin/start-the-day` to the launcher built next to the installer.
pub fn run(config: &Config) -> Result<InstallReport> {
    let target = resolve_target()?;
    let link = config.link_path();
    debug!(
        "Installing {} -> {}",
        link.display(),
        target.display()
    );
    let report = install_link(&target, &link)?;
    print_report(config, &report);
    Ok(report)
}

fn print_report(config: &Config, report: &InstallReport) {
    let bin_dir = config.local_bin_dir();
    if report.created_dir {
        println!("Created directory: {}", bin_dir.display());
    } else {
        println!("Directory already exists: {}", bin_dir.display());
    }

    match &report.outcome {
        LinkOutcome::AlreadyCorrect => {
            println!(
                "Symlink already exists and points to correct target: {}",
                report.link.display()
            );
            return;
        }
        LinkOutcome::Replaced { previous } => {
            println!(
                "Symlink pointed to a different target: {}",
                previous.display()
            );
            println!(
                "Replaced symlink: {} -> {}",
                report.link.display(),
                report.target.display()
            );
        }
        LinkOutcome::Created => {
            println!(
                "Created symlink: {} -> {}",
                report.link.display(),
                report.target.display()
            );
        }
    }

    println!(
        "{}{}",
        "==> ".bold().blue(),
        "Installation completed successfully!".bold()
    );
    println!(
        "You can now run 'start-the-day' from anywhere (if {} is in your PATH)",
        bin_dir.display()
    );
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use daybreak_common::DaybreakError;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_launcher_aborts_before_touching_home() {
        // Test binaries live in target/<profile>/deps, where no launcher is built.
        let home = TempDir::new().unwrap();
        let config = Config {
            home_dir: home.path().to_path_buf(),
            shell: PathBuf::from("/bin/sh"),
            hostname_override: None,
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(err, DaybreakError::NotFound(_)));
        assert!(!config.local_bin_dir().exists());
    }
}
