//! CLI interface for strgrid
//!
//! Provides command-line access to every check plus persistent settings.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, ConfigAction};
pub use paths::{config_dir, PersistentConfig};
