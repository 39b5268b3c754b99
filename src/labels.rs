use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::data::loader::{csv_files, open_reader};
use crate::error::{HarvestError, Result};

/// Rows whose label starts with this mark the header of a sheet.
pub const HEADER_PREFIX: &str = "Week";

pub fn is_header(label: &str) -> bool {
    label.starts_with(HEADER_PREFIX)
}

/// A sheet that had a crop row before any header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: PathBuf,
    /// 1-based record number within the file.
    pub row_number: usize,
    pub row_text: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: no header found before this row:", self.file.display())?;
        write!(f, "  {}", self.row_text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelScan {
    pub labels: BTreeSet<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Collect every crop label in the sheets under `dir`.
///
/// A malformed sheet is abandoned at the offending row and reported in
/// `diagnostics`; the remaining sheets are still scanned.
pub fn scan_labels(dir: &Path) -> Result<LabelScan> {
    let mut scan = LabelScan::default();

    for path in csv_files(dir)? {
        if let Some(diag) = scan_file(&path, &mut scan.labels)? {
            warn!("{}: abandoned at record {}", path.display(), diag.row_number);
            scan.diagnostics.push(diag);
        }
    }

    debug!("{} distinct labels", scan.labels.len());
    Ok(scan)
}

/// Labels seen before the offending row stay in `labels`.
fn scan_file(path: &Path, labels: &mut BTreeSet<String>) -> Result<Option<Diagnostic>> {
    let mut reader = open_reader(path)?;
    let mut header_seen = false;

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| HarvestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let label = record.get(0).unwrap_or("");
        if label.is_empty() {
            continue;
        }
        if is_header(label) {
            header_seen = true;
            continue;
        }
        if !header_seen {
            return Ok(Some(Diagnostic {
                file: path.to_path_buf(),
                row_number: idx + 1,
                row_text: to_csv_line(path, &record)?,
            }));
        }
        labels.insert(label.to_string());
    }

    Ok(None)
}

/// Write `record` back out as one CSV line, quoting fields where needed.
fn to_csv_line(path: &Path, record: &csv::StringRecord) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);
        writer.write_record(record).map_err(|source| HarvestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(|source| HarvestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
