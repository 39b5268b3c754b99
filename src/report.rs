use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::data::filter::drop_paired_zeros;
use crate::data::loader::{load_pair, LoadOptions, MatchPolicy};
use crate::error::Result;
use crate::stats::{PairStats, Summary};

/// Width of the label column in text output.
const LABEL_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropSummary {
    pub label: String,
    #[serde(flatten)]
    pub summary: Summary,
}

/// The result of comparing two crops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationReport {
    pub match_policy: MatchPolicy,
    pub first: CropSummary,
    pub second: CropSummary,
    pub correlation: f64,
}

impl CorrelationReport {
    /// Load, filter, and summarize `first` against `second` from the sheets in `dir`.
    pub fn build(dir: &Path, first: &str, second: &str, options: LoadOptions) -> Result<Self> {
        let pair = load_pair(dir, first, second, options)?;
        let filtered = drop_paired_zeros(&pair)?;
        let stats = PairStats::compute(&filtered)?;

        Ok(CorrelationReport {
            match_policy: options.match_policy,
            first: CropSummary {
                label: filtered.first.label,
                summary: stats.first,
            },
            second: CropSummary {
                label: filtered.second.label,
                summary: stats.second,
            },
            correlation: stats.correlation,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for CropSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        write!(
            f,
            "{:<width$}  range = {:6.2}-{:6.2}  mean = {:6.2}  stddev = {:6.2}",
            self.label,
            s.min,
            s.max,
            s.mean,
            s.stddev,
            width = LABEL_WIDTH
        )
    }
}

impl fmt::Display for CorrelationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.first)?;
        writeln!(f, "{}", self.second)?;
        write!(f, "correlation = {:5.3}", self.correlation)
    }
}
