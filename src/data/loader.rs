use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;

use super::model::{Row, Series, SeriesPair};
use crate::error::{HarvestError, Result};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How a row's label is compared with the requested crop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Label must equal the crop name.
    #[default]
    Exact,
    /// Label must start with the crop name, so sub-varieties
    /// ("Squash, butternut", "Squash, acorn") are summed under "Squash".
    /// Note that "Corn" also picks up "Corn-Sweet".
    Prefix,
}

impl MatchPolicy {
    pub fn matches(self, label: &str, target: &str) -> bool {
        match self {
            MatchPolicy::Exact => label == target,
            MatchPolicy::Prefix => label.starts_with(target),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub match_policy: MatchPolicy,
}

// ---------------------------------------------------------------------------
// Directory and file reading
// ---------------------------------------------------------------------------

/// All `*.csv` files directly inside `dir`, sorted by path. Hidden files
/// (such as macOS `._2024.csv` resource forks) are skipped.
pub fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(HarvestError::MissingDirectory(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir).map_err(|source| HarvestError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| HarvestError::Io {
                path: dir.to_path_buf(),
                source,
            })?
            .path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "csv");
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if is_csv && !hidden && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    debug!("found {} csv files in {}", files.len(), dir.display());
    Ok(files)
}

/// Open a headerless, ragged CSV reader on `path`.
pub(crate) fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| HarvestError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Read every record of a harvest sheet as typed rows.
///
/// The file handle is dropped before this returns.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let mut reader = open_reader(path)?;
    let mut rows = Vec::new();

    for (record_no, result) in reader.records().enumerate() {
        let record = result.map_err(|source| HarvestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        match Row::from_fields(record.iter()) {
            Some(row) => rows.push(row),
            None => debug!("{}: skipping empty record #{}", path.display(), record_no + 1),
        }
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Label extraction
// ---------------------------------------------------------------------------

/// Column-wise sum of every row in `rows` whose label matches `target`.
///
/// `None` when nothing matches. Matching rows of different widths are an
/// error rather than being padded or truncated.
pub fn sum_matching(
    file: &Path,
    rows: &[Row],
    target: &str,
    policy: MatchPolicy,
) -> Result<Option<Vec<f64>>> {
    let mut total: Option<Vec<f64>> = None;

    for row in rows.iter().filter(|r| policy.matches(&r.label, target)) {
        match total.as_mut() {
            None => total = Some(row.values.clone()),
            Some(acc) => {
                if acc.len() != row.values.len() {
                    return Err(HarvestError::RowLengthMismatch {
                        file: file.to_path_buf(),
                        label: row.label.clone(),
                        expected: acc.len(),
                        found: row.values.len(),
                    });
                }
                for (a, v) in acc.iter_mut().zip(&row.values) {
                    *a += v;
                }
            }
        }
    }

    Ok(total)
}

/// Collect the series for two crops across every sheet in `dir`.
///
/// A sheet only contributes when both crops appear in it with the same
/// number of weeks, so the two series always stay index-aligned.
pub fn load_pair(
    dir: &Path,
    first: &str,
    second: &str,
    options: LoadOptions,
) -> Result<SeriesPair> {
    if first.is_empty() || second.is_empty() {
        return Err(HarvestError::EmptyLabel);
    }

    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for path in csv_files(dir)? {
        let rows = read_rows(&path)?;
        let a = sum_matching(&path, &rows, first, options.match_policy)?;
        let b = sum_matching(&path, &rows, second, options.match_policy)?;

        match (a, b) {
            (Some(a), Some(b)) if a.len() == b.len() => {
                debug!("{}: {} weeks", path.display(), a.len());
                xs.extend(a);
                ys.extend(b);
            }
            (Some(a), Some(b)) => warn!(
                "{}: skipped, '{first}' has {} values but '{second}' has {}",
                path.display(),
                a.len(),
                b.len()
            ),
            _ => debug!("{}: no rows for both crops", path.display()),
        }
    }

    Ok(SeriesPair::new(Series::new(first, xs), Series::new(second, ys)))
}
