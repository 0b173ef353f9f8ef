//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Shell command arguments.
#[derive(Debug, Args)]
pub struct ShellCommand {
    /// Import this roster file before entering the shell
    ///
    /// When given, the roster replaces any saved snapshot and a new snapshot
    /// is written immediately. Without it, the last snapshot is restored (or
    /// the fleet starts empty).
    #[arg(short, long, value_name = "FILE")]
    pub dataset: Option<PathBuf>,
}

/// Import command arguments.
#[derive(Debug, Args)]
pub struct ImportCommand {
    /// Roster file to import, one record per line
    pub file: PathBuf,
}

/// Report command arguments.
#[derive(Debug, Args)]
pub struct ReportCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// The record line: CATEGORY,NAME,YEAR,MAKE_MODEL,LENGTH,PRICE[,EXPENSES]
    pub line: String,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Name of the boat to remove (case-insensitive)
    pub name: String,
}

/// Spend command arguments.
#[derive(Debug, Args)]
pub struct SpendCommand {
    /// Name of the boat to spend against (case-insensitive)
    pub name: String,

    /// Amount to authorize
    pub amount: String,
}

/// Snapshot commands.
#[derive(Debug, Subcommand)]
pub enum SnapshotCommand {
    /// Show the resolved snapshot file path
    Path,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_command_debug() {
        let cmd = ShellCommand {
            dataset: Some(PathBuf::from("fleet.txt")),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("dataset"));
        assert!(debug_str.contains("fleet.txt"));
    }

    #[test]
    fn test_spend_command_debug() {
        let cmd = SpendCommand {
            name: "Big Brother".to_string(),
            amount: "500".to_string(),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Big Brother"));
        assert!(debug_str.contains("500"));
    }
}
