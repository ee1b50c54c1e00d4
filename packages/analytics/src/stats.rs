//! Descriptive statistics over carrier metrics.

use carrier_intel_analytics_models::{CorrelationMatrix, HistogramBin, Metric};
use carrier_intel_carrier_models::CarrierRecord;

use crate::AnalyticsError;

/// Default number of fleet-size histogram buckets.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// Largest bucket count [`fleet_size_histogram`] accepts.
pub const MAX_HISTOGRAM_BINS: usize = 500;

#[allow(clippy::cast_precision_loss)]
fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() < 2 || xs.len() != ys.len() {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Computes the Pearson correlation between every pair of [`Metric`]s.
///
/// Entries are `None` with fewer than two records or when either metric
/// has zero variance.
#[must_use]
pub fn correlation_matrix(selection: &[&CarrierRecord]) -> CorrelationMatrix {
    let metrics = Metric::all().to_vec();
    let columns: Vec<Vec<f64>> = metrics
        .iter()
        .map(|m| selection.iter().map(|r| m.value(r)).collect())
        .collect();

    let values = columns
        .iter()
        .map(|a| columns.iter().map(|b| pearson(a, b)).collect())
        .collect();

    CorrelationMatrix { metrics, values }
}

/// Buckets fleet sizes into `bins` equal-width bins spanning the observed
/// range. The last bin is closed on the right.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidArgument`] if `bins` is zero or above
/// [`MAX_HISTOGRAM_BINS`].
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn fleet_size_histogram(
    selection: &[&CarrierRecord],
    bins: usize,
) -> Result<Vec<HistogramBin>, AnalyticsError> {
    if bins == 0 || bins > MAX_HISTOGRAM_BINS {
        return Err(AnalyticsError::InvalidArgument {
            message: format!(
                "histogram bins must be between 1 and {MAX_HISTOGRAM_BINS}, got {bins}"
            ),
        });
    }

    let Some(min) = selection.iter().map(|r| r.fleet_size).min() else {
        return Ok(Vec::new());
    };
    let max = selection.iter().map(|r| r.fleet_size).max().unwrap_or(min);

    let lower = f64::from(min);
    let upper = f64::from(max);

    if min == max {
        return Ok(vec![HistogramBin {
            lower,
            upper,
            count: selection.len() as u64,
        }]);
    }

    let width = (upper - lower) / bins as f64;
    let mut counts = vec![0u64; bins];
    for record in selection {
        let index = ((f64::from(record.fleet_size) - lower) / width).floor() as usize;
        counts[index.min(bins - 1)] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: (i as f64).mul_add(width, lower),
            upper: ((i + 1) as f64).mul_add(width, lower),
            count,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use carrier_intel_carrier_models::Region;

    use super::*;
    use crate::fixtures::carrier;

    const EPS: f64 = 1e-9;

    #[test]
    fn perfectly_correlated_metrics() {
        // fixture savings are fleet_size * 10_000
        let records = [
            carrier(0, Region::Ga, 10, 1.0),
            carrier(1, Region::Ga, 20, 2.0),
            carrier(2, Region::Ga, 40, 3.0),
        ];
        let selection: Vec<&CarrierRecord> = records.iter().collect();
        let matrix = correlation_matrix(&selection);

        assert_eq!(matrix.metrics.len(), 7);
        let r = matrix
            .get(Metric::FleetSize, Metric::AnnualSavingsPotential)
            .unwrap();
        assert!((r - 1.0).abs() < EPS);
        assert!((matrix.get(Metric::RiskScore, Metric::RiskScore).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn constant_metric_has_no_correlation() {
        let records = [
            carrier(0, Region::Ga, 10, 1.0),
            carrier(1, Region::Ga, 20, 2.0),
        ];
        let selection: Vec<&CarrierRecord> = records.iter().collect();
        let matrix = correlation_matrix(&selection);
        // fixture wage percentile is constant
        assert!(
            matrix
                .get(Metric::WagePercentile, Metric::RiskScore)
                .is_none()
        );
    }

    #[test]
    fn single_record_has_no_correlations() {
        let records = [carrier(0, Region::Ga, 10, 1.0)];
        let selection: Vec<&CarrierRecord> = records.iter().collect();
        let matrix = correlation_matrix(&selection);
        assert!(matrix.values.iter().flatten().all(Option::is_none));
    }

    #[test]
    fn histogram_counts_every_record() {
        let records: Vec<CarrierRecord> = [10, 20, 30, 40, 50, 500]
            .into_iter()
            .enumerate()
            .map(|(i, fleet)| carrier(u32::try_from(i).unwrap(), Region::Ga, fleet, 1.0))
            .collect();
        let selection: Vec<&CarrierRecord> = records.iter().collect();
        let bins = fleet_size_histogram(&selection, 7).unwrap();

        assert_eq!(bins.len(), 7);
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 6);
        assert!((bins[0].lower - 10.0).abs() < EPS);
        assert!((bins[6].upper - 500.0).abs() < EPS);
        assert_eq!(bins[0].count, 5);
        assert_eq!(bins[6].count, 1);
    }

    #[test]
    fn histogram_of_identical_sizes_is_one_bin() {
        let records = [
            carrier(0, Region::Ga, 42, 1.0),
            carrier(1, Region::Fl, 42, 1.0),
        ];
        let selection: Vec<&CarrierRecord> = records.iter().collect();
        let bins = fleet_size_histogram(&selection, 30).unwrap();
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 2);
    }

    #[test]
    fn histogram_edge_cases() {
        assert!(fleet_size_histogram(&[], 30).unwrap().is_empty());
        assert!(matches!(
            fleet_size_histogram(&[], 0),
            Err(AnalyticsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn oversized_bin_count_is_rejected() {
        let records = [
            carrier(0, Region::Ga, 10, 1.0),
            carrier(1, Region::Ga, 20, 1.0),
        ];
        let selection: Vec<&CarrierRecord> = records.iter().collect();

        assert!(matches!(
            fleet_size_histogram(&selection, usize::MAX / 4),
            Err(AnalyticsError::InvalidArgument { .. })
        ));
        assert!(fleet_size_histogram(&selection, MAX_HISTOGRAM_BINS + 1).is_err());
        assert_eq!(
            fleet_size_histogram(&selection, MAX_HISTOGRAM_BINS)
                .unwrap()
                .len(),
            MAX_HISTOGRAM_BINS
        );
    }
}
