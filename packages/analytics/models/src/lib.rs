#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter, region summary, and insight result types for carrier
//! analytics.
//!
//! Every type here is a read-only view derived from a carrier population.
//! None of them hold a reference back to the records they summarize.

use std::collections::BTreeSet;

use carrier_intel_carrier_models::{CarrierRecord, FleetRange, Region, RiskTier};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Grouped aggregate of carrier metrics for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    /// Region the summary covers.
    pub region: Region,
    /// Number of carriers in the region.
    pub carrier_count: u64,
    /// Mean risk score.
    pub avg_risk_score: f64,
    /// Sum of annual savings potential.
    pub total_savings_potential: f64,
    /// Mean fleet size.
    pub avg_fleet_size: f64,
    /// Mean wage percentile.
    pub avg_wage_percentile: f64,
    /// Mean out-of-service rate.
    pub avg_out_of_service_rate: f64,
}

/// Conjunctive selection over a carrier population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierFilter {
    /// Regions to keep. An empty set keeps nothing.
    pub regions: BTreeSet<Region>,
    /// Inclusive fleet-size range.
    pub fleet_range: FleetRange,
    /// Minimum risk score (inclusive).
    pub risk_min: f64,
}

impl CarrierFilter {
    /// Regions selected when the caller does not choose any.
    pub const DEFAULT_REGIONS: &'static [Region] =
        &[Region::Ga, Region::Fl, Region::Tx, Region::Nc, Region::Tn];

    /// Fleet range selected when the caller does not choose one.
    pub const DEFAULT_FLEET_RANGE: FleetRange = FleetRange::new(25, 150);

    /// Risk floor selected when the caller does not choose one.
    pub const DEFAULT_RISK_MIN: f64 = 6.0;

    /// A filter that keeps every carrier.
    #[must_use]
    pub fn all() -> Self {
        Self {
            regions: Region::all().iter().copied().collect(),
            fleet_range: FleetRange::default(),
            risk_min: f64::NEG_INFINITY,
        }
    }
}

impl Default for CarrierFilter {
    fn default() -> Self {
        Self {
            regions: Self::DEFAULT_REGIONS.iter().copied().collect(),
            fleet_range: Self::DEFAULT_FLEET_RANGE,
            risk_min: Self::DEFAULT_RISK_MIN,
        }
    }
}

/// Headline figures for a filtered selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    /// Number of carriers in the selection.
    pub carrier_count: u64,
    /// Sum of annual savings potential across the selection.
    pub total_savings_potential: f64,
    /// Mean risk score, `None` for an empty selection.
    pub avg_risk_score: Option<f64>,
    /// Selection size as a percentage of the whole population.
    pub market_penetration: f64,
}

/// Qualitative density of competing retention vendors in a market.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CompetitiveDensity {
    /// Few competitors.
    Low,
    /// Some competitors.
    Medium,
    /// Crowded market.
    High,
}

impl CompetitiveDensity {
    /// Returns all variants with their sampling weights.
    #[must_use]
    pub const fn weighted() -> &'static [(Self, f64)] {
        &[(Self::Low, 0.4), (Self::Medium, 0.4), (Self::High, 0.2)]
    }
}

/// Sales-facing market figures for a filtered selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIntelligence {
    /// Carriers at or above the critical risk threshold.
    pub critical_risk_count: u64,
    /// Mean fleet size, `None` for an empty selection.
    pub avg_fleet_size: Option<f64>,
    /// Competitive density label.
    pub competitive_density: CompetitiveDensity,
}

/// One row of the savings-potential prospect ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRankEntry {
    /// 1-based rank.
    pub rank: u32,
    /// Carrier identifier.
    pub carrier_id: String,
    /// Carrier display name.
    pub carrier_name: String,
    /// Home region.
    pub region: Region,
    /// Number of trucks.
    pub fleet_size: u32,
    /// Composite risk score.
    pub risk_score: f64,
    /// Risk band used for coloring.
    pub risk_tier: RiskTier,
    /// Annual savings potential (USD).
    pub annual_savings_potential: f64,
}

impl SavingsRankEntry {
    /// Builds a ranking row for `record` at position `rank`.
    #[must_use]
    pub fn new(rank: u32, record: &CarrierRecord) -> Self {
        Self {
            rank,
            carrier_id: record.carrier_id.clone(),
            carrier_name: record.carrier_name.clone(),
            region: record.region,
            fleet_size: record.fleet_size,
            risk_score: record.risk_score,
            risk_tier: record.risk_tier(),
            annual_savings_potential: record.annual_savings_potential,
        }
    }
}

/// Numeric carrier fields that descriptive statistics can run over.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    /// [`CarrierRecord::risk_score`]
    RiskScore,
    /// [`CarrierRecord::out_of_service_rate`]
    OutOfServiceRate,
    /// [`CarrierRecord::crash_rate`]
    CrashRate,
    /// [`CarrierRecord::safety_violations`]
    SafetyViolations,
    /// [`CarrierRecord::wage_percentile`]
    WagePercentile,
    /// [`CarrierRecord::fleet_size`]
    FleetSize,
    /// [`CarrierRecord::annual_savings_potential`]
    AnnualSavingsPotential,
}

impl Metric {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::RiskScore,
            Self::OutOfServiceRate,
            Self::CrashRate,
            Self::SafetyViolations,
            Self::WagePercentile,
            Self::FleetSize,
            Self::AnnualSavingsPotential,
        ]
    }

    /// Reads this metric from a record.
    #[must_use]
    pub fn value(self, record: &CarrierRecord) -> f64 {
        match self {
            Self::RiskScore => record.risk_score,
            Self::OutOfServiceRate => record.out_of_service_rate,
            Self::CrashRate => record.crash_rate,
            Self::SafetyViolations => f64::from(record.safety_violations),
            Self::WagePercentile => record.wage_percentile,
            Self::FleetSize => f64::from(record.fleet_size),
            Self::AnnualSavingsPotential => record.annual_savings_potential,
        }
    }
}

/// Pairwise Pearson correlations between [`Metric`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationMatrix {
    /// Row and column order.
    pub metrics: Vec<Metric>,
    /// `values[i][j]` correlates `metrics[i]` with `metrics[j]`; `None`
    /// where the correlation is undefined.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Looks up the correlation between two metrics.
    #[must_use]
    pub fn get(&self, a: Metric, b: Metric) -> Option<f64> {
        let i = self.metrics.iter().position(|m| *m == a)?;
        let j = self.metrics.iter().position(|m| *m == b)?;
        self.values.get(i)?.get(j).copied().flatten()
    }
}

/// One equal-width bucket of a histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge, exclusive except for the last bin.
    pub upper: f64,
    /// Number of values in the bucket.
    pub count: u64,
}
