//! Bulk import of a delimited roster file.
//!
//! A roster holds one boat record per line. Import is tolerant: blank lines
//! and lines that are not records at all (header rows, stray text) are
//! skipped, and a malformed record is rejected with a warning while the rest
//! of the file continues to load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::boat::Boat;
use crate::error::Result;
use crate::fleet::Fleet;

/// Outcome counters for one bulk import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records parsed and added to the fleet.
    pub imported: usize,
    /// Blank and non-record lines passed over silently.
    pub skipped: usize,
    /// Record lines that failed a field and were dropped.
    pub rejected: usize,
}

/// Import a roster from any buffered reader, producing a fresh fleet.
///
/// # Errors
///
/// Returns an error only if reading from the source fails; individual bad
/// lines never abort the import.
pub fn import_reader(reader: impl BufRead) -> Result<(Fleet, ImportSummary)> {
    let mut fleet = Fleet::new();
    let mut summary = ImportSummary::default();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            summary.skipped += 1;
            continue;
        }

        match Boat::parse_line(trimmed) {
            Ok(boat) => {
                fleet.add(boat);
                summary.imported += 1;
            }
            Err(err) if err.is_foreign_line() => {
                debug!("Skipping non-record line {}: {}", number + 1, err);
                summary.skipped += 1;
            }
            Err(err) => {
                warn!("Rejecting malformed record on line {}: {}", number + 1, err);
                summary.rejected += 1;
            }
        }
    }

    Ok((fleet, summary))
}

/// Import a roster file from disk, producing a fresh fleet.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn import_path(path: impl AsRef<Path>) -> Result<(Fleet, ImportSummary)> {
    let path = path.as_ref();
    debug!("Importing roster from {}", path.display());

    let file = File::open(path)?;
    let (fleet, summary) = import_reader(BufReader::new(file))?;

    info!(
        "Imported {} boats from {} ({} skipped, {} rejected)",
        summary.imported,
        path.display(),
        summary.skipped,
        summary.rejected
    );
    Ok((fleet, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn import_str(roster: &str) -> (Fleet, ImportSummary) {
        import_reader(Cursor::new(roster)).unwrap()
    }

    #[test]
    fn test_import_basic_roster() {
        let (fleet, summary) = import_str(
            "POWER,Big Brother,2019,Mako,20,12989.56\n\
             SAILING,Serenity,2015,Catalina 315,31,150000.00\n",
        );
        assert_eq!(fleet.len(), 2);
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.rejected, 0);
        assert_eq!(fleet.boats()[0].name, "Big Brother");
        assert_eq!(fleet.boats()[1].name, "Serenity");
    }

    #[test]
    fn test_import_skips_header_row() {
        let (fleet, summary) = import_str(
            "Category,Name,Year,MakeModel,Length,Price\n\
             POWER,Big Brother,2019,Mako,20,12989.56\n",
        );
        assert_eq!(fleet.len(), 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.rejected, 0);
    }

    #[test]
    fn test_import_skips_blank_lines() {
        let (fleet, summary) = import_str(
            "\n\
             POWER,Big Brother,2019,Mako,20,12989.56\n\
             \t  \n",
        );
        assert_eq!(fleet.len(), 1);
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn test_import_rejects_malformed_record_and_continues() {
        let (fleet, summary) = import_str(
            "POWER,Big Brother,recent,Mako,20,12989.56\n\
             SAILING,Serenity,2015,Catalina 315,31,150000.00\n",
        );
        assert_eq!(fleet.len(), 1);
        assert_eq!(fleet.boats()[0].name, "Serenity");
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.rejected, 1);
    }

    #[test]
    fn test_import_expenses_default_to_zero() {
        let (fleet, _) = import_str("POWER,Big Brother,2019,Mako,20,12989.56\n");
        assert_eq!(fleet.boats()[0].expenses_to_date, 0.0);
    }

    #[test]
    fn test_import_seven_field_form_carries_expenses() {
        let (fleet, _) = import_str("POWER,Knot Working,2001,Bayliner 175,17,8000,250.75\n");
        assert_eq!(fleet.boats()[0].expenses_to_date, 250.75);
    }

    #[test]
    fn test_import_empty_source() {
        let (fleet, summary) = import_str("");
        assert!(fleet.is_empty());
        assert_eq!(summary, ImportSummary::default());
    }

    #[test]
    fn test_import_preserves_file_order() {
        let (fleet, _) = import_str(
            "SAILING,Wind Dancer,1998,Hunter 340,34,42000\n\
             POWER,Reel Time,2020,Grady-White,25,98000\n\
             SAILING,Serenity,2015,Catalina 315,31,150000\n",
        );
        let names: Vec<&str> = fleet.boats().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Wind Dancer", "Reel Time", "Serenity"]);
    }

    #[test]
    fn test_import_path() {
        let temp_dir = std::env::temp_dir();
        let roster_path = temp_dir.join(format!("fleetkeeper_roster_{}.txt", std::process::id()));
        std::fs::write(
            &roster_path,
            "POWER,Big Brother,2019,Mako,20,12989.56\n",
        )
        .unwrap();

        let (fleet, summary) = import_path(&roster_path).unwrap();
        assert_eq!(fleet.len(), 1);
        assert_eq!(summary.imported, 1);

        let _ = std::fs::remove_file(&roster_path);
    }

    #[test]
    fn test_import_path_missing_file() {
        let result = import_path("/nonexistent/roster.txt");
        assert!(result.is_err());
    }
}
