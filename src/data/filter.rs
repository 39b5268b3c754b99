use super::model::{Series, SeriesPair};
use crate::error::{HarvestError, Result};

/// Drop every week where both crops read exactly `0.0`.
///
/// A paired zero means the sheet had no entry for either crop that week, not
/// a measured zero harvest, so the comparison is exact on purpose. Order is
/// preserved and applying the filter twice changes nothing.
pub fn drop_paired_zeros(pair: &SeriesPair) -> Result<SeriesPair> {
    let (xs, ys) = (&pair.first.values, &pair.second.values);
    if xs.len() != ys.len() {
        return Err(HarvestError::LengthMismatch {
            left: xs.len(),
            right: ys.len(),
        });
    }

    let (kept_x, kept_y): (Vec<f64>, Vec<f64>) = xs
        .iter()
        .zip(ys)
        .filter(|&(&x, &y)| !(x == 0.0 && y == 0.0))
        .map(|(&x, &y)| (x, y))
        .unzip();

    Ok(SeriesPair::new(
        Series::new(pair.first.label.clone(), kept_x),
        Series::new(pair.second.label.clone(), kept_y),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(x: &[f64], y: &[f64]) -> SeriesPair {
        SeriesPair::new(Series::new("Corn", x.to_vec()), Series::new("Soy", y.to_vec()))
    }

    #[test]
    fn paired_zeros_are_removed() {
        let filtered = drop_paired_zeros(&pair(&[0.0, 10.0, 20.0, 0.0], &[0.0, 5.0, 15.0, 0.0])).unwrap();
        assert_eq!(filtered.first.values, vec![10.0, 20.0]);
        assert_eq!(filtered.second.values, vec![5.0, 15.0]);
        assert_eq!(filtered.first.label, "Corn");
    }

    #[test]
    fn single_zero_is_kept() {
        let filtered = drop_paired_zeros(&pair(&[0.0, 3.0], &[4.0, 0.0])).unwrap();
        assert_eq!(filtered, pair(&[0.0, 3.0], &[4.0, 0.0]));
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = drop_paired_zeros(&pair(&[0.0, 1.0, 0.0, 2.0], &[0.0, 0.0, 0.0, 5.0])).unwrap();
        let twice = drop_paired_zeros(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn everything_filtered_leaves_empty_series() {
        let filtered = drop_paired_zeros(&pair(&[0.0, 0.0], &[0.0, 0.0])).unwrap();
        assert!(filtered.first.is_empty());
        assert!(filtered.second.is_empty());
    }

    #[test]
    fn unequal_lengths_fail() {
        let err = drop_paired_zeros(&pair(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0])).unwrap_err();
        assert!(matches!(err, HarvestError::LengthMismatch { left: 3, right: 4 }));
    }
}
