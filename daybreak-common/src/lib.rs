// daybreak-common/src/lib.rs
pub mod config;
pub mod error;
pub mod launch_table;

// Re-export key types
pub use config::Config;
pub use error::{DaybreakError, Result};
pub use launch_table::LaunchTable;
