//! Core record types for fleetkeeper.
//!
//! This module defines the boat record, its category enumeration, and the
//! parsing of one delimited roster line into a record.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The category of a boat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoatCategory {
    /// A sailing boat.
    Sailing,
    /// A power boat.
    Power,
}

impl std::fmt::Display for BoatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sailing => write!(f, "SAILING"),
            Self::Power => write!(f, "POWER"),
        }
    }
}

impl std::str::FromStr for BoatCategory {
    type Err = ParseError;

    /// Match a category token case-insensitively against the closed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("sailing") {
            Ok(Self::Sailing)
        } else if s.eq_ignore_ascii_case("power") {
            Ok(Self::Power)
        } else {
            Err(ParseError::UnknownCategory {
                token: s.to_string(),
            })
        }
    }
}

/// Errors that can occur while parsing a roster line.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The first token is not a recognized category.
    #[error("unknown category '{token}'")]
    UnknownCategory {
        /// The unrecognized token.
        token: String,
    },

    /// The line does not have six or seven fields.
    #[error("expected 6 or 7 fields, found {count}")]
    FieldCount {
        /// Number of fields found.
        count: usize,
    },

    /// The name field is empty.
    #[error("boat name is empty")]
    EmptyName,

    /// The year field is not an integer.
    #[error("invalid year '{value}'")]
    InvalidYear {
        /// The offending field text.
        value: String,
    },

    /// The length field is not an integer.
    #[error("invalid length '{value}'")]
    InvalidLength {
        /// The offending field text.
        value: String,
    },

    /// The price field is not a non-negative number.
    #[error("invalid purchase price '{value}'")]
    InvalidPrice {
        /// The offending field text.
        value: String,
    },

    /// The expenses field is not a non-negative number.
    #[error("invalid expenses '{value}'")]
    InvalidExpenses {
        /// The offending field text.
        value: String,
    },

    /// The expenses field exceeds the purchase price.
    #[error("expenses {expenses:.2} exceed purchase price {price:.2}")]
    ExpensesExceedPrice {
        /// The declared starting expenses.
        expenses: f64,
        /// The purchase price.
        price: f64,
    },
}

impl ParseError {
    /// Check if this error marks a line that is not a record at all.
    ///
    /// Bulk import skips such lines (headers, stray text) silently instead of
    /// treating them as malformed records.
    #[must_use]
    pub fn is_foreign_line(&self) -> bool {
        matches!(self, Self::UnknownCategory { .. })
    }
}

/// One boat record in the fleet.
///
/// The purchase price is fixed at construction; cumulative expenses start at
/// zero and change only through the store's spend authorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    /// The boat's category.
    pub category: BoatCategory,
    /// The boat's name, the fleet's case-insensitive lookup key.
    pub name: String,
    /// Year the boat was built.
    pub year_built: i32,
    /// Free-text make and model.
    pub make_model: String,
    /// Length in feet.
    pub length_ft: i32,
    /// Price paid at purchase. Never mutated after creation.
    pub purchase_price: f64,
    /// Cumulative authorized expenses. Never exceeds `purchase_price`.
    pub expenses_to_date: f64,
}

impl Boat {
    /// Create a new boat record with zero expenses to date.
    #[must_use]
    pub fn new(
        category: BoatCategory,
        name: String,
        year_built: i32,
        make_model: String,
        length_ft: i32,
        purchase_price: f64,
    ) -> Self {
        Self {
            category,
            name,
            year_built,
            make_model,
            length_ft,
            purchase_price,
            expenses_to_date: 0.0,
        }
    }

    /// Parse one roster line into a boat record.
    ///
    /// The line holds six or seven comma-separated fields: category, name,
    /// year, make/model, length, price, and optionally starting expenses
    /// (defaulting to 0.0). Every field is trimmed before interpretation and
    /// the category matches case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] identifying the field that failed. A line
    /// whose first token is not a category at all yields an error for which
    /// [`ParseError::is_foreign_line`] is true.
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        // Decide record-ness from the first token before anything else, so
        // header rows surface as foreign lines rather than field-count errors.
        let category: BoatCategory = fields[0].parse()?;

        if fields.len() != 6 && fields.len() != 7 {
            return Err(ParseError::FieldCount {
                count: fields.len(),
            });
        }

        let name = fields[1];
        if name.is_empty() {
            return Err(ParseError::EmptyName);
        }

        let year_built: i32 = fields[2].parse().map_err(|_| ParseError::InvalidYear {
            value: fields[2].to_string(),
        })?;

        let make_model = fields[3].to_string();

        let length_ft: i32 = fields[4].parse().map_err(|_| ParseError::InvalidLength {
            value: fields[4].to_string(),
        })?;

        let purchase_price = parse_money(fields[5]).ok_or_else(|| ParseError::InvalidPrice {
            value: fields[5].to_string(),
        })?;

        let expenses_to_date = match fields.get(6) {
            Some(raw) => {
                let expenses = parse_money(raw).ok_or_else(|| ParseError::InvalidExpenses {
                    value: (*raw).to_string(),
                })?;
                if expenses > purchase_price {
                    return Err(ParseError::ExpensesExceedPrice {
                        expenses,
                        price: purchase_price,
                    });
                }
                expenses
            }
            None => 0.0,
        };

        Ok(Self {
            category,
            name: name.to_string(),
            year_built,
            make_model,
            length_ft,
            purchase_price,
            expenses_to_date,
        })
    }

    /// Budget remaining for spend authorization.
    #[must_use]
    pub fn remaining_budget(&self) -> f64 {
        self.purchase_price - self.expenses_to_date
    }

    /// Check if this boat's name matches the given name, ignoring case.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Parse a monetary field: a finite, non-negative decimal.
fn parse_money(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
