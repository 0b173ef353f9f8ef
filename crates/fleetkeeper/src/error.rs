//! Error types for fleetkeeper.
//!
//! This module defines all error types used throughout the fleetkeeper crate.
//! Recoverable, user-facing conditions (a lookup miss, a denied spend, a bad
//! amount) are ordinary variants here so the command loop can report them and
//! keep running.

use std::path::PathBuf;

use thiserror::Error;

use crate::boat::ParseError;

/// The main error type for fleetkeeper operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Record Errors ===
    /// A delimited record line could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No boat with the given name exists in the fleet.
    #[error("no boat named '{name}' in the fleet")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },

    // === Spend Errors ===
    /// A spend was denied because it would exceed the purchase price.
    #[error("spend denied: only {remaining:.2} remains in the budget")]
    SpendDenied {
        /// Budget remaining before the rejected spend.
        remaining: f64,
    },

    /// A spend amount was not a valid non-negative number.
    #[error("invalid spend amount '{input}'")]
    BadAmount {
        /// The offending amount text.
        input: String,
    },

    // === Snapshot Errors ===
    /// The snapshot file could not be read.
    #[error("failed to read snapshot at {path}: {source}")]
    SnapshotRead {
        /// Path to the snapshot file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file exists but its contents could not be decoded.
    #[error("snapshot at {path} is corrupt: {message}")]
    SnapshotDecode {
        /// Path to the snapshot file.
        path: PathBuf,
        /// Description of what went wrong.
        message: String,
    },

    /// The snapshot could not be written.
    #[error("failed to write snapshot at {path}: {source}")]
    SnapshotWrite {
        /// Path to the snapshot file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The fleet could not be serialized for the snapshot.
    #[error("failed to encode snapshot: {message}")]
    SnapshotEncode {
        /// Description of what went wrong.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized Result type for fleetkeeper operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for the given boat name.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a bad-amount error echoing the rejected input.
    #[must_use]
    pub fn bad_amount(input: impl Into<String>) -> Self {
        Self::BadAmount {
            input: input.into(),
        }
    }

    /// Check if this error is a lookup miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a recoverable, user-facing condition.
    ///
    /// Recoverable errors leave the fleet unchanged; the command loop reports
    /// them and continues.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Parse(_)
                | Self::NotFound { .. }
                | Self::SpendDenied { .. }
                | Self::BadAmount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("Ghost Ship");
        assert_eq!(err.to_string(), "no boat named 'Ghost Ship' in the fleet");
    }

    #[test]
    fn test_spend_denied_display() {
        let err = Error::SpendDenied {
            remaining: 12489.56,
        };
        assert_eq!(
            err.to_string(),
            "spend denied: only 12489.56 remains in the budget"
        );
    }

    #[test]
    fn test_bad_amount_display() {
        let err = Error::bad_amount("lots");
        assert_eq!(err.to_string(), "invalid spend amount 'lots'");
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("Serenity").is_not_found());
        assert!(!Error::bad_amount("x").is_not_found());
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(Error::not_found("Serenity").is_recoverable());
        assert!(Error::SpendDenied { remaining: 1.0 }.is_recoverable());
        assert!(Error::bad_amount("-5").is_recoverable());
    }

    #[test]
    fn test_storage_errors_not_recoverable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::SnapshotWrite {
            path: PathBuf::from("/tmp/fleet.snap"),
            source: io_err,
        };
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_snapshot_write_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::SnapshotWrite {
            path: PathBuf::from("/var/lib/fleet.snap"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/var/lib/fleet.snap"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_snapshot_decode_display() {
        let err = Error::SnapshotDecode {
            path: PathBuf::from("/tmp/fleet.snap"),
            message: "checksum mismatch".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("corrupt"));
        assert!(msg.contains("checksum mismatch"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_parse_error() {
        let parse_err = ParseError::UnknownCategory {
            token: "DINGHY".to_string(),
        };
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::ConfigValidation {
            message: "snapshot path has no file name".to_string(),
        };
        assert!(err.to_string().contains("snapshot path has no file name"));
    }

    #[test]
    fn test_directory_create_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }
}
