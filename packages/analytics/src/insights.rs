//! Headline KPIs, market intelligence, and prospect rankings for a
//! filtered selection.

use carrier_intel_analytics_models::{
    CompetitiveDensity, KpiSummary, MarketIntelligence, SavingsRankEntry,
};
use carrier_intel_carrier_models::CarrierRecord;
use rand::Rng;
use rand::seq::IndexedRandom as _;

use crate::AnalyticsError;

/// Number of prospects shown in the savings ranking.
pub const DEFAULT_RANKING_LIMIT: usize = 20;

/// Number of regions shown in the key-insights panel.
pub const DEFAULT_INSIGHT_LIMIT: usize = 5;

#[allow(clippy::cast_precision_loss)]
fn mean(sum: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

/// Computes the headline figures for `selection` relative to a population
/// of `population_size` carriers.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn kpis(population_size: usize, selection: &[&CarrierRecord]) -> KpiSummary {
    let count = selection.len();
    let total_savings_potential = selection.iter().map(|r| r.annual_savings_potential).sum();
    let risk_sum: f64 = selection.iter().map(|r| r.risk_score).sum();

    let market_penetration = if population_size == 0 {
        0.0
    } else {
        count as f64 / population_size as f64 * 100.0
    };

    KpiSummary {
        carrier_count: count as u64,
        total_savings_potential,
        avg_risk_score: mean(risk_sum, count),
        market_penetration,
    }
}

/// Draws a competitive-density label with the configured weights.
///
/// # Errors
///
/// Returns [`AnalyticsError::Sampling`] if the weights are invalid.
pub fn sample_competitive_density<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<CompetitiveDensity, AnalyticsError> {
    CompetitiveDensity::weighted()
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(density, _)| *density)
        .map_err(|e| AnalyticsError::Sampling {
            message: e.to_string(),
        })
}

/// Computes market intelligence for `selection`.
///
/// # Errors
///
/// Returns [`AnalyticsError::Sampling`] if the competitive density cannot
/// be drawn.
pub fn market_intelligence<R: Rng + ?Sized>(
    selection: &[&CarrierRecord],
    rng: &mut R,
) -> Result<MarketIntelligence, AnalyticsError> {
    let critical_risk_count = selection.iter().filter(|r| r.is_critical()).count() as u64;
    let fleet_sum: f64 = selection.iter().map(|r| f64::from(r.fleet_size)).sum();

    Ok(MarketIntelligence {
        critical_risk_count,
        avg_fleet_size: mean(fleet_sum, selection.len()),
        competitive_density: sample_competitive_density(rng)?,
    })
}

/// Ranks `selection` by annual savings potential, highest first, and
/// keeps the top `limit`. Ties keep their input order.
#[must_use]
pub fn savings_ranking(selection: &[&CarrierRecord], limit: usize) -> Vec<SavingsRankEntry> {
    let mut ranked = selection.to_vec();
    ranked.sort_by(|a, b| {
        b.annual_savings_potential
            .total_cmp(&a.annual_savings_potential)
    });

    ranked
        .into_iter()
        .take(limit)
        .zip(1..)
        .map(|(record, rank)| SavingsRankEntry::new(rank, record))
        .collect()
}

/// Returns the `limit` carriers with the highest risk score, riskiest
/// first. Ties keep their input order.
#[must_use]
pub fn riskiest<'a>(selection: &[&'a CarrierRecord], limit: usize) -> Vec<&'a CarrierRecord> {
    let mut ranked = selection.to_vec();
    ranked.sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
    ranked.truncate(limit);
    ranked
}
