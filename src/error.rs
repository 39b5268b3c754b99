use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading harvest sheets or computing statistics.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("harvest directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("crop label must not be empty")]
    EmptyLabel,

    /// Two rows summed into the same series disagree on width.
    #[error("{}: rows for '{label}' have {found} values, expected {expected}", .file.display())]
    RowLengthMismatch {
        file: PathBuf,
        label: String,
        expected: usize,
        found: usize,
    },

    #[error(
        "Number of data points for crop 1 ({left}) must be the same as the number for crop 2 ({right})."
    )]
    LengthMismatch { left: usize, right: usize },

    #[error("no data points for {label}")]
    NoData { label: String },

    #[error("{label} has no variation; correlation is undefined")]
    ZeroVariance { label: String },
}

pub type Result<T> = std::result::Result<T, HarvestError>;
