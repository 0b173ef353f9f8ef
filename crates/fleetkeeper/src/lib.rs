//! `fleetkeeper` - Fleet persistence and expense authorization
//!
//! This library maintains an ordered collection of boat records across
//! process runs: bulk import from a delimited roster, lookup and mutation
//! against the in-memory fleet, spend authorization against each boat's
//! purchase-price ceiling, and save/restore of the full fleet state to a
//! binary snapshot.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod boat;
pub mod cli;
pub mod config;
pub mod error;
pub mod fleet;
pub mod logging;
pub mod roster;
pub mod snapshot;

pub use boat::{Boat, BoatCategory, ParseError};
pub use config::Config;
pub use error::{Error, Result};
pub use fleet::{Fleet, FleetTotals};
pub use logging::init_logging;
pub use roster::ImportSummary;
