//! `fleetctl` - CLI for fleetkeeper
//!
//! This binary provides the command loop over the fleet store: a roster is
//! imported (or the last snapshot restored) at startup, operations run
//! against the in-memory fleet, and the snapshot is saved on the way out.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use fleetkeeper::cli::{
    AddCommand, Cli, Command, ConfigCommand, ImportCommand, RemoveCommand, ReportCommand,
    ShellCommand, SnapshotCommand, SpendCommand,
};
use fleetkeeper::{init_logging, roster, snapshot, Boat, Config, Error, Fleet};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Shell(cmd) => handle_shell(&config, &cmd),
        Command::Import(cmd) => handle_import(&config, &cmd),
        Command::Report(cmd) => handle_report(&config, &cmd),
        Command::Add(cmd) => handle_add(&config, &cmd),
        Command::Remove(cmd) => handle_remove(&config, &cmd),
        Command::Spend(cmd) => handle_spend(&config, &cmd),
        Command::Snapshot(cmd) => handle_snapshot(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Populate the fleet by exactly one of the two startup paths.
///
/// A dataset argument always imports the roster and immediately re-saves the
/// snapshot; otherwise the last snapshot is restored, or the fleet starts
/// empty if there is none.
fn startup_fleet(config: &Config, dataset: Option<&Path>) -> Result<Fleet> {
    match dataset {
        Some(path) => {
            let (fleet, summary) = roster::import_path(path)?;
            println!(
                "Imported {} boats from {} ({} skipped, {} rejected)",
                summary.imported,
                path.display(),
                summary.skipped,
                summary.rejected
            );
            snapshot::save(&fleet, config.snapshot_path())?;
            Ok(fleet)
        }
        None => Ok(snapshot::load_or_empty(config.snapshot_path())),
    }
}

fn handle_shell(config: &Config, cmd: &ShellCommand) -> Result<()> {
    let mut fleet = startup_fleet(config, cmd.dataset.as_deref())?;
    println!("{} boats in the fleet. Type 'help' for commands.", fleet.len());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("fleet> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (input, ""),
        };

        match verb {
            "print" => print_report(&fleet),
            "add" => run_op(&mut fleet, |fleet| shell_add(fleet, rest)),
            "remove" => run_op(&mut fleet, |fleet| shell_remove(fleet, rest)),
            "spend" => run_op(&mut fleet, |fleet| shell_spend(fleet, rest)),
            "help" => print_help(),
            "exit" | "quit" => break,
            other => println!("unknown command '{other}'; type 'help' for commands"),
        }
    }

    // Save exactly once on the way out; a write failure is reported but must
    // not keep the process alive.
    if let Err(err) = snapshot::save(&fleet, config.snapshot_path()) {
        eprintln!("warning: {err}");
    }
    Ok(())
}

/// Apply one shell operation, printing its outcome.
///
/// Recoverable conditions are reported and leave the loop running; anything
/// else is a real fault and still only prints, since the shell owns the
/// process lifetime.
fn run_op(fleet: &mut Fleet, op: impl FnOnce(&mut Fleet) -> fleetkeeper::Result<String>) {
    match op(fleet) {
        Ok(message) => println!("{message}"),
        Err(err) => println!("error: {err}"),
    }
}

fn shell_add(fleet: &mut Fleet, line: &str) -> fleetkeeper::Result<String> {
    let boat = Boat::parse_line(line)?;
    let name = boat.name.clone();
    fleet.add(boat);
    Ok(format!("Added '{}' ({} boats in the fleet)", name, fleet.len()))
}

fn shell_remove(fleet: &mut Fleet, name: &str) -> fleetkeeper::Result<String> {
    let boat = fleet.remove(name)?;
    Ok(format!("Removed '{}'", boat.name))
}

fn shell_spend(fleet: &mut Fleet, rest: &str) -> fleetkeeper::Result<String> {
    let Some((name, amount_text)) = rest.rsplit_once(char::is_whitespace) else {
        return Err(Error::bad_amount(rest));
    };
    apply_spend(fleet, name.trim(), amount_text)
}

/// Authorize a spend given the amount as text, per the command-loop contract.
fn apply_spend(fleet: &mut Fleet, name: &str, amount_text: &str) -> fleetkeeper::Result<String> {
    let amount = parse_amount(amount_text)?;
    let new_total = fleet.authorize_spend(name, amount)?;
    Ok(format!(
        "Authorized {amount:.2} against '{name}'; {new_total:.2} spent to date"
    ))
}

/// Parse a spend amount, rejecting anything but a plain non-negative number.
fn parse_amount(text: &str) -> fleetkeeper::Result<f64> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| Error::bad_amount(trimmed))
}

fn handle_import(config: &Config, cmd: &ImportCommand) -> Result<()> {
    startup_fleet(config, Some(&cmd.file))?;
    Ok(())
}

fn handle_report(config: &Config, cmd: &ReportCommand) -> Result<()> {
    let fleet = snapshot::load_or_empty(config.snapshot_path());
    if cmd.json {
        let report = serde_json::json!({
            "boats": fleet.boats(),
            "totals": fleet.totals(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&fleet);
    }
    Ok(())
}

fn handle_add(config: &Config, cmd: &AddCommand) -> Result<()> {
    run_one_shot(config, |fleet| shell_add(fleet, &cmd.line))
}

fn handle_remove(config: &Config, cmd: &RemoveCommand) -> Result<()> {
    run_one_shot(config, |fleet| shell_remove(fleet, &cmd.name))
}

fn handle_spend(config: &Config, cmd: &SpendCommand) -> Result<()> {
    run_one_shot(config, |fleet| apply_spend(fleet, &cmd.name, &cmd.amount))
}

/// Restore, apply one operation, and save if it changed anything.
///
/// Recoverable conditions print their message and exit cleanly without
/// touching the snapshot.
fn run_one_shot(
    config: &Config,
    op: impl FnOnce(&mut Fleet) -> fleetkeeper::Result<String>,
) -> Result<()> {
    let mut fleet = snapshot::load_or_empty(config.snapshot_path());
    match op(&mut fleet) {
        Ok(message) => {
            snapshot::save(&fleet, config.snapshot_path())?;
            println!("{message}");
            Ok(())
        }
        Err(err) if err.is_recoverable() => {
            println!("{err}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn handle_snapshot(config: &Config, cmd: &SnapshotCommand) -> Result<()> {
    match cmd {
        SnapshotCommand::Path => {
            println!("{}", config.snapshot_path().display());
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[storage]");
                println!("  Snapshot path:  {}", config.snapshot_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

/// Print the fleet report: one line per boat in insertion order, then the
/// freshly computed totals.
fn print_report(fleet: &Fleet) {
    for boat in fleet.boats() {
        println!(
            "{:<8} {:<24} {:>5} {:<24} {:>4} ft  paid {:>12.2}  spent {:>12.2}",
            boat.category.to_string(),
            boat.name,
            boat.year_built,
            boat.make_model,
            boat.length_ft,
            boat.purchase_price,
            boat.expenses_to_date,
        );
    }
    let totals = fleet.totals();
    println!(
        "Total paid: {:.2}  Total spent: {:.2}",
        totals.total_paid, totals.total_spent
    );
}

fn print_help() {
    println!("Commands:");
    println!("  print                  Show the fleet report with totals");
    println!("  add <record line>      Add a boat: CATEGORY,NAME,YEAR,MAKE_MODEL,LENGTH,PRICE[,EXPENSES]");
    println!("  remove <name>          Remove a boat by name");
    println!("  spend <name> <amount>  Authorize an expense against a boat's budget");
    println!("  exit                   Save the snapshot and leave");
}
