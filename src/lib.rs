//! Weekly harvest sheet analysis.
//!
//! Two reports are built on the same CSV ingestion step:
//! * [`report::CorrelationReport`] compares two crops week by week.
//! * [`labels::scan_labels`] lists every crop named in the sheets.

pub mod data;
pub mod error;
pub mod labels;
pub mod report;
pub mod stats;
pub mod suggest;

pub use data::loader::{LoadOptions, MatchPolicy};
pub use error::{HarvestError, Result};

/// Directory searched for sheets when none is given.
pub const DEFAULT_HARVEST_DIR: &str = "harvest";
