// daybreak-core/src/lib.rs
pub mod fs;
pub mod host;
pub mod install;
pub mod launch;

pub use install::{install_link, resolve_target, InstallReport, LinkOutcome};
pub use launch::{
    launch_all, launch_until, LaunchEvent, LaunchOutcome, LaunchRecord, LaunchSummary,
    ShellSpawner, Spawner,
};
