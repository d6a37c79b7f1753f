// daybreak/src/lib.rs
pub mod cli;
pub mod install;
pub mod logging;
