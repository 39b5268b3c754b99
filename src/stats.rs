//! Descriptive statistics and Pearson correlation over a filtered pair.
//!
//! Variance here is the plain sum of squared deviations, not divided by the
//! sample count. Correlation uses the same unnormalized sums in numerator and
//! denominator, so the coefficient is the usual Pearson r.

use serde::Serialize;

use crate::data::model::{Series, SeriesPair};
use crate::error::{HarvestError, Result};

/// Summary of one crop's weekly values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Sum of squared deviations from the mean.
    pub variance: f64,
    pub stddev: f64,
}

impl Summary {
    /// `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let mean = mean(values);
        let variance = sum_sq_dev(values, mean);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Summary {
            count,
            mean,
            min,
            max,
            variance,
            stddev: variance.sqrt(),
        })
    }

    pub fn of(series: &Series) -> Result<Self> {
        Summary::from_values(&series.values).ok_or_else(|| HarvestError::NoData {
            label: series.label.clone(),
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

fn sum_sq_dev(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum()
}

/// Pearson correlation coefficient of two equal-length series.
pub fn correlation(x: &Series, y: &Series) -> Result<f64> {
    if x.len() != y.len() {
        return Err(HarvestError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    for s in [x, y] {
        if s.is_empty() {
            return Err(HarvestError::NoData {
                label: s.label.clone(),
            });
        }
        // Checked on the raw values: the mean of a constant like 0.1 carries
        // rounding error, so the squared deviations need not sum to zero.
        if is_constant(&s.values) {
            return Err(HarvestError::ZeroVariance {
                label: s.label.clone(),
            });
        }
    }

    let mx = mean(&x.values);
    let my = mean(&y.values);

    let mut cov = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (a, b) in x.values.iter().zip(&y.values) {
        let dx = a - mx;
        let dy = b - my;
        cov += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    Ok(cov / (sxx.sqrt() * syy.sqrt()))
}

/// Everything the correlation report prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairStats {
    pub first: Summary,
    pub second: Summary,
    pub correlation: f64,
}

impl PairStats {
    /// Compute stats for an already-filtered pair.
    pub fn compute(pair: &SeriesPair) -> Result<Self> {
        let correlation = correlation(&pair.first, &pair.second)?;
        Ok(PairStats {
            first: Summary::of(&pair.first)?,
            second: Summary::of(&pair.second)?,
            correlation,
        })
    }
}
