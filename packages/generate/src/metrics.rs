//! Derived carrier metrics.
//!
//! Pure functions that turn the sampled primitives of a carrier (fleet
//! size, latent violation rate, noise terms) into the correlated fields
//! stored on [`carrier_intel_carrier_models::CarrierRecord`].

use carrier_intel_carrier_models::{MAX_FLEET_SIZE, MAX_RISK_SCORE, MIN_FLEET_SIZE};

/// Industry average cost of replacing one driver (USD).
pub const REPLACEMENT_COST_PER_TRUCK: f64 = 25_000.0;

/// Share of churn cost the retention product is assumed to recover.
pub const CHURN_REDUCTION: f64 = 0.4;

/// Rounds a lognormal draw to a whole fleet and clamps it to
/// `MIN_FLEET_SIZE..=MAX_FLEET_SIZE`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fleet_size(raw: f64) -> u32 {
    raw.round()
        .clamp(f64::from(MIN_FLEET_SIZE), f64::from(MAX_FLEET_SIZE)) as u32
}

/// `clamp(70 - 8 * violation_rate + noise, 5, 95)`
#[must_use]
pub fn wage_percentile(violation_rate: f64, noise: f64) -> f64 {
    (violation_rate.mul_add(-8.0, 70.0) + noise).clamp(5.0, 95.0)
}

/// `max(0.1, violation_rate + noise)`
#[must_use]
pub fn out_of_service_rate(violation_rate: f64, noise: f64) -> f64 {
    (violation_rate + noise).max(0.1)
}

/// `max(0.1, crash_base + 0.3 * violation_rate)`
#[must_use]
pub fn crash_rate(violation_rate: f64, crash_base: f64) -> f64 {
    violation_rate.mul_add(0.3, crash_base).max(0.1)
}

/// `max(0, floor(fleet_size * 0.1 * violation_rate + noise))`
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn safety_violations(fleet_size: u32, violation_rate: f64, noise: f64) -> u32 {
    (f64::from(fleet_size) * 0.1)
        .mul_add(violation_rate, noise)
        .floor()
        .max(0.0) as u32
}

/// Unweighted mean of four sub-scores, each clamped to `0..=10`:
///
/// * out-of-service rate / 2
/// * crash rate
/// * violations per truck * 10
/// * (100 - wage percentile) / 10
#[must_use]
pub fn risk_score(
    out_of_service_rate: f64,
    crash_rate: f64,
    safety_violations: u32,
    fleet_size: u32,
    wage_percentile: f64,
) -> f64 {
    let components = [
        out_of_service_rate / 2.0,
        crash_rate,
        f64::from(safety_violations) / f64::from(fleet_size) * 10.0,
        (100.0 - wage_percentile) / 10.0,
    ];

    components
        .iter()
        .map(|c| c.clamp(0.0, MAX_RISK_SCORE))
        .sum::<f64>()
        / 4.0
}

/// `fleet_size * 25000 * (1 + (risk_score - 5) * 0.1) * 0.4`
#[must_use]
pub fn savings_potential(fleet_size: u32, risk_score: f64) -> f64 {
    let churn_multiplier = (risk_score - 5.0).mul_add(0.1, 1.0);
    f64::from(fleet_size) * REPLACEMENT_COST_PER_TRUCK * churn_multiplier * CHURN_REDUCTION
}
