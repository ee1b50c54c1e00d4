//! Monthly safety-violation series for individual carriers.
//!
//! Both series are synthetic. They are derived from a caller-supplied
//! random source so the server can replay them from the population seed
//! (see [`crate::carrier_rng`]).

use std::f64::consts::TAU;

use carrier_intel_carrier_models::{CarrierRecord, MonthlyViolations, SafetyTrendPoint};
use chrono::{Datelike as _, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution as _, Normal, Poisson};

use crate::GenerateError;

/// Default length of a [`safety_trend`] series.
pub const DEFAULT_TREND_MONTHS: usize = 12;

/// Default length of a [`violation_history`] series.
pub const DEFAULT_HISTORY_MONTHS: usize = 24;

/// Longest series either function will build.
pub const MAX_MONTHS: usize = 120;

/// Checks that `months` is a series length the functions here accept.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidMonths`] if `months` is zero or above
/// [`MAX_MONTHS`].
pub const fn validate_months(months: usize) -> Result<(), GenerateError> {
    if months == 0 || months > MAX_MONTHS {
        return Err(GenerateError::InvalidMonths { months });
    }
    Ok(())
}

/// Returns `months` consecutive `YYYY-MM` labels, the last being the
/// month containing `end`.
#[must_use]
pub fn month_labels(months: usize, end: NaiveDate) -> Vec<String> {
    let end_index = i64::from(end.year()) * 12 + i64::from(end.month0());
    let span = i64::try_from(months).unwrap_or(i64::MAX);
    let start = end_index.saturating_sub(span.saturating_sub(1));

    (start..=end_index)
        .take(months)
        .map(|index| {
            let year = index.div_euclid(12);
            let month = index.rem_euclid(12) + 1;
            format!("{year:04}-{month:02}")
        })
        .collect()
}

fn seasonal(amplitude: f64, month: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let phase = TAU * month as f64 / 12.0;
    amplitude * phase.sin()
}

/// Builds the current-year and prior-year monthly violation trend for a
/// carrier.
///
/// The monthly baseline is `safety_violations / 12`, shifted by a random
/// walk of `normal(0, 0.1)` steps and a seasonal `0.2 * sin` term. Draw
/// order: every walk step, then every current-year noise term, then every
/// prior-year noise term.
///
/// # Errors
///
/// * [`GenerateError::InvalidMonths`] if `months` is zero or above
///   [`MAX_MONTHS`]
/// * [`GenerateError::Distribution`] if a distribution cannot be built
pub fn safety_trend<R: Rng + ?Sized>(
    record: &CarrierRecord,
    months: usize,
    end: NaiveDate,
    rng: &mut R,
) -> Result<Vec<SafetyTrendPoint>, GenerateError> {
    validate_months(months)?;

    let step = Normal::new(0.0, 0.1).map_err(GenerateError::distribution)?;
    let current_noise = Normal::new(0.0, 0.5).map_err(GenerateError::distribution)?;
    let prior_noise = Normal::new(0.0, 0.3).map_err(GenerateError::distribution)?;

    let base_level = f64::from(record.safety_violations) / 12.0;

    let drift: Vec<f64> = step
        .sample_iter(&mut *rng)
        .take(months)
        .scan(0.0, |total, s| {
            *total += s;
            Some(*total)
        })
        .collect();

    let current: Vec<f64> = drift
        .iter()
        .enumerate()
        .map(|(j, d)| (base_level + d + seasonal(0.2, j) + current_noise.sample(rng)).max(0.0))
        .collect();

    let points = month_labels(months, end)
        .into_iter()
        .zip(current)
        .map(|(period, current)| SafetyTrendPoint {
            period,
            current,
            prior: (current + prior_noise.sample(rng)).max(0.0),
        })
        .collect();

    Ok(points)
}

/// Builds a whole-number monthly violation history: `poisson(3)` draws
/// scaled by a `1 + 0.3 * sin` seasonal factor and truncated.
///
/// # Errors
///
/// * [`GenerateError::InvalidMonths`] if `months` is zero or above
///   [`MAX_MONTHS`]
/// * [`GenerateError::Distribution`] if a distribution cannot be built
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn violation_history<R: Rng + ?Sized>(
    months: usize,
    end: NaiveDate,
    rng: &mut R,
) -> Result<Vec<MonthlyViolations>, GenerateError> {
    validate_months(months)?;

    let base = Poisson::new(3.0).map_err(GenerateError::distribution)?;
    let draws: Vec<f64> = (0..months).map(|_| base.sample(rng)).collect();

    let history = month_labels(months, end)
        .into_iter()
        .zip(draws)
        .enumerate()
        .map(|(i, (period, draw))| MonthlyViolations {
            period,
            safety_violations: (draw * (1.0 + seasonal(0.3, i))).max(0.0) as u32,
        })
        .collect();

    Ok(history)
}
