//! Command-line interface for fleetkeeper.
//!
//! This module provides the CLI structure for the `fleetctl` binary. The
//! handlers themselves live in the binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, ImportCommand, RemoveCommand, ReportCommand, ShellCommand,
    SnapshotCommand, SpendCommand,
};

/// fleetctl - Keep a fleet of boat records across runs
///
/// Maintains an ordered collection of boat records, imports rosters from
/// delimited text, persists the fleet to a binary snapshot between runs, and
/// enforces each boat's spending ceiling.
#[derive(Debug, Parser)]
#[command(name = "fleetctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive command shell
    Shell(ShellCommand),

    /// Import a roster file and save a fresh snapshot
    Import(ImportCommand),

    /// Print the fleet report with totals
    Report(ReportCommand),

    /// Add one record from a delimited line
    Add(AddCommand),

    /// Remove a boat by name
    Remove(RemoveCommand),

    /// Authorize an expense against a boat's budget
    Spend(SpendCommand),

    /// Inspect the snapshot
    #[command(subcommand)]
    Snapshot(SnapshotCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
