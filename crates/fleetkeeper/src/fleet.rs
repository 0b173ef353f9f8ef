//! The fleet store.
//!
//! An in-memory ordered collection of boat records with lookup, mutation, and
//! spend authorization. Insertion order is preserved and is the order reports
//! render in. Every operation either applies entirely or rejects entirely.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::boat::Boat;
use crate::error::{Error, Result};

/// The ordered collection of boat records.
///
/// Lookup is a case-insensitive linear scan resolving to the first match in
/// insertion order. Duplicate names are permitted by the import format, so
/// first-match semantics are part of the contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    boats: Vec<Boat>,
}

impl Fleet {
    /// Create an empty fleet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of boats in the fleet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boats.len()
    }

    /// Check if the fleet has no boats.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    /// The boats in insertion order.
    ///
    /// Reports iterate this slice; it can be restarted freely.
    #[must_use]
    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    /// Append a boat to the end of the fleet.
    ///
    /// Always succeeds; no duplicate check is performed.
    pub fn add(&mut self, boat: Boat) {
        debug!("Adding boat '{}' to the fleet", boat.name);
        self.boats.push(boat);
    }

    /// Find a boat by name, case-insensitively.
    ///
    /// Returns the first match in insertion order. This is the sole lookup
    /// primitive; remove and spend both resolve through it.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Boat> {
        self.boats.iter().find(|boat| boat.matches_name(name))
    }

    /// Index of the first boat matching the given name.
    fn find_index(&self, name: &str) -> Option<usize> {
        self.boats.iter().position(|boat| boat.matches_name(name))
    }

    /// Remove the first boat matching the given name.
    ///
    /// The order of the remaining boats is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] echoing the attempted name if no boat
    /// matches; the fleet is unchanged.
    pub fn remove(&mut self, name: &str) -> Result<Boat> {
        match self.find_index(name) {
            Some(index) => {
                let boat = self.boats.remove(index);
                debug!("Removed boat '{}' from the fleet", boat.name);
                Ok(boat)
            }
            None => Err(Error::not_found(name)),
        }
    }

    /// Authorize an expense against the named boat's budget.
    ///
    /// If the amount fits within the remaining budget (purchase price minus
    /// expenses to date), it is committed and the new cumulative expenses are
    /// returned. Otherwise the mutation is rejected entirely.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no boat matches the name,
    /// [`Error::BadAmount`] if the amount is negative or not finite, or
    /// [`Error::SpendDenied`] carrying the remaining budget if the amount
    /// exceeds it. In every error case the fleet is unchanged.
    pub fn authorize_spend(&mut self, name: &str, amount: f64) -> Result<f64> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::bad_amount(format!("{amount}")));
        }

        let index = self
            .find_index(name)
            .ok_or_else(|| Error::not_found(name))?;
        let boat = &mut self.boats[index];

        let remaining = boat.remaining_budget();
        if amount > remaining {
            debug!(
                "Denied spend of {:.2} on '{}': {:.2} remaining",
                amount, boat.name, remaining
            );
            return Err(Error::SpendDenied { remaining });
        }

        boat.expenses_to_date += amount;
        debug!(
            "Authorized spend of {:.2} on '{}': {:.2} to date",
            amount, boat.name, boat.expenses_to_date
        );
        Ok(boat.expenses_to_date)
    }

    /// Compute the fleet's aggregate totals.
    ///
    /// Totals are derived freshly on every call, never stored.
    #[must_use]
    pub fn totals(&self) -> FleetTotals {
        FleetTotals {
            total_paid: self.boats.iter().map(|boat| boat.purchase_price).sum(),
            total_spent: self.boats.iter().map(|boat| boat.expenses_to_date).sum(),
        }
    }
}

/// Aggregate totals over the whole fleet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetTotals {
    /// Sum of every boat's purchase price.
    pub total_paid: f64,
    /// Sum of every boat's expenses to date.
    pub total_spent: f64,
}
