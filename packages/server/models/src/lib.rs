#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the carrier intelligence server.
//!
//! These types are serialized to JSON for the REST API. Query parameter
//! structs keep every field optional; missing filter fields fall back to
//! the dashboard defaults in [`CarrierFilter::default`].

use carrier_intel_analytics_models::{
    CarrierFilter, KpiSummary, MarketIntelligence, RegionSummary, SavingsRankEntry,
};
use carrier_intel_carrier_models::{
    CarrierRecord, FleetRange, MonthlyViolations, Region, RiskTier, SafetyTrendPoint,
};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Filter fields shared by every filtered endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    /// Comma-separated region codes. Present but empty selects nothing.
    pub regions: Option<String>,
    /// Inclusive minimum fleet size.
    pub fleet_min: Option<u32>,
    /// Inclusive maximum fleet size.
    pub fleet_max: Option<u32>,
    /// Minimum risk score.
    pub risk_min: Option<f64>,
}

impl FilterParams {
    /// Resolves the parameters into a [`CarrierFilter`], filling absent
    /// fields from the dashboard defaults. Unknown region codes are
    /// ignored.
    #[must_use]
    pub fn to_filter(&self) -> CarrierFilter {
        let defaults = CarrierFilter::default();

        let regions = self.regions.as_deref().map_or(defaults.regions, |s| {
            s.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .filter_map(|c| c.parse::<Region>().ok())
                .collect()
        });

        CarrierFilter {
            regions,
            fleet_range: FleetRange::new(
                self.fleet_min.unwrap_or(defaults.fleet_range.min),
                self.fleet_max.unwrap_or(defaults.fleet_range.max),
            ),
            risk_min: self.risk_min.unwrap_or(defaults.risk_min),
        }
    }
}

/// Query parameters for the carriers endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierQueryParams {
    /// Comma-separated region codes.
    pub regions: Option<String>,
    /// Inclusive minimum fleet size.
    pub fleet_min: Option<u32>,
    /// Inclusive maximum fleet size.
    pub fleet_max: Option<u32>,
    /// Minimum risk score.
    pub risk_min: Option<f64>,
    /// Maximum number of carriers per page.
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: Option<u32>,
}

/// Query parameters for the trends endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendQueryParams {
    /// Comma-separated region codes.
    pub regions: Option<String>,
    /// Inclusive minimum fleet size.
    pub fleet_min: Option<u32>,
    /// Inclusive maximum fleet size.
    pub fleet_max: Option<u32>,
    /// Minimum risk score.
    pub risk_min: Option<f64>,
    /// Length of each trend series in months.
    pub months: Option<usize>,
}

/// Query parameters for the fleet distribution endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramQueryParams {
    /// Comma-separated region codes.
    pub regions: Option<String>,
    /// Inclusive minimum fleet size.
    pub fleet_min: Option<u32>,
    /// Inclusive maximum fleet size.
    pub fleet_max: Option<u32>,
    /// Minimum risk score.
    pub risk_min: Option<f64>,
    /// Number of histogram buckets.
    pub bins: Option<usize>,
}

impl From<&CarrierQueryParams> for FilterParams {
    fn from(p: &CarrierQueryParams) -> Self {
        Self {
            regions: p.regions.clone(),
            fleet_min: p.fleet_min,
            fleet_max: p.fleet_max,
            risk_min: p.risk_min,
        }
    }
}

impl From<&TrendQueryParams> for FilterParams {
    fn from(p: &TrendQueryParams) -> Self {
        Self {
            regions: p.regions.clone(),
            fleet_min: p.fleet_min,
            fleet_max: p.fleet_max,
            risk_min: p.risk_min,
        }
    }
}

impl From<&HistogramQueryParams> for FilterParams {
    fn from(p: &HistogramQueryParams) -> Self {
        Self {
            regions: p.regions.clone(),
            fleet_min: p.fleet_min,
            fleet_max: p.fleet_max,
            risk_min: p.risk_min,
        }
    }
}

/// Query parameters for the insights endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsQueryParams {
    /// Number of regions to return.
    pub limit: Option<usize>,
}

/// Query parameters for the violation history endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQueryParams {
    /// Number of months of history.
    pub months: Option<usize>,
}

/// A region in the catalogue.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegion {
    /// Two-letter region code.
    pub code: Region,
    /// Full region name.
    pub name: String,
    /// Localities carriers in this region can be based in.
    pub localities: Vec<String>,
    /// Number of carriers in the population based in this region.
    pub carrier_count: u64,
}

/// A page of filtered carriers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierPage {
    /// Carriers on this page, in population order.
    pub carriers: Vec<CarrierRecord>,
    /// Total number of carriers matching the filter.
    pub total_count: u64,
    /// Whether more carriers are available beyond this page.
    pub has_more: bool,
}

/// Detail view of a single carrier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCarrierProfile {
    /// The carrier record.
    #[serde(flatten)]
    pub carrier: CarrierRecord,
    /// Risk band of the carrier.
    pub risk_tier: RiskTier,
    /// Whether the carrier is at or above the critical risk threshold.
    pub critical: bool,
}

impl From<&CarrierRecord> for ApiCarrierProfile {
    fn from(record: &CarrierRecord) -> Self {
        Self {
            carrier: record.clone(),
            risk_tier: record.risk_tier(),
            critical: record.is_critical(),
        }
    }
}

/// Everything the overview tab needs for one filter selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Headline figures.
    pub kpis: KpiSummary,
    /// Market intelligence panel.
    pub market: MarketIntelligence,
    /// Top prospects by savings potential.
    pub ranking: Vec<SavingsRankEntry>,
    /// Region summaries of the filtered selection.
    pub regions: Vec<RegionSummary>,
}

/// Safety trend of one carrier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierTrend {
    /// Carrier identifier.
    pub carrier_id: String,
    /// Carrier display name.
    pub carrier_name: String,
    /// Composite risk score.
    pub risk_score: f64,
    /// Monthly points, oldest first.
    pub points: Vec<SafetyTrendPoint>,
}

/// Monthly violation history of one carrier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationHistoryResponse {
    /// Carrier identifier.
    pub carrier_id: String,
    /// Monthly counts, oldest first.
    pub history: Vec<MonthlyViolations>,
}

/// Sales actions offered on the targeting tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SalesAction {
    /// Push the top prospects to the CRM.
    ExportProspects,
    /// Produce territory battle cards.
    BattleCards,
    /// Subscribe to risk score alerts.
    RiskAlerts,
}

impl SalesAction {
    /// Acknowledgement shown once the action is accepted.
    #[must_use]
    pub const fn acknowledgement(self) -> &'static str {
        match self {
            Self::ExportProspects => "Prospect list exported to CRM!",
            Self::BattleCards => "Territory intelligence generated!",
            Self::RiskAlerts => "Alert system activated!",
        }
    }
}

/// Response to a sales action request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesActionResponse {
    /// The accepted action.
    pub action: SalesAction,
    /// Human-readable acknowledgement.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    fn params(regions: Option<&str>) -> FilterParams {
        FilterParams {
            regions: regions.map(ToString::to_string),
            ..FilterParams::default()
        }
    }

    #[test]
    fn absent_params_use_dashboard_defaults() {
        assert_eq!(FilterParams::default().to_filter(), CarrierFilter::default());
    }

    #[test]
    fn region_list_is_parsed_leniently() {
        let filter = params(Some("ga, tx,XX,,WV")).to_filter();
        let regions: Vec<Region> = filter.regions.into_iter().collect();
        assert_eq!(regions, vec![Region::Ga, Region::Tx, Region::Wv]);
    }

    #[test]
    fn empty_region_list_selects_nothing() {
        assert!(params(Some("")).to_filter().regions.is_empty());
    }

    #[test]
    fn numeric_overrides_apply() {
        let filter = FilterParams {
            regions: None,
            fleet_min: Some(50),
            fleet_max: Some(300),
            risk_min: Some(1.5),
        }
        .to_filter();
        assert_eq!(filter.fleet_range, FleetRange::new(50, 300));
        assert!((filter.risk_min - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn sales_action_paths() {
        assert_eq!(
            SalesAction::from_str("export-prospects").unwrap(),
            SalesAction::ExportProspects
        );
        assert_eq!(SalesAction::RiskAlerts.to_string(), "risk-alerts");
        assert!(SalesAction::from_str("launch-rockets").is_err());
        assert_eq!(
            serde_json::to_string(&SalesAction::BattleCards).unwrap(),
            "\"battle-cards\""
        );
    }

    #[test]
    fn profile_flattens_record() {
        let record = CarrierRecord {
            carrier_id: "USDOT100007".to_string(),
            carrier_name: "Elite Hauling Co.".to_string(),
            region: Region::Ky,
            locality: "Lexington".to_string(),
            fleet_size: 80,
            wage_percentile: 22.0,
            out_of_service_rate: 6.0,
            crash_rate: 3.0,
            safety_violations: 40,
            risk_score: 8.2,
            annual_savings_potential: 1_128_000.0,
        };
        let json = serde_json::to_value(ApiCarrierProfile::from(&record)).unwrap();
        assert_eq!(json["carrierId"], "USDOT100007");
        assert_eq!(json["riskTier"], "HIGH");
        assert_eq!(json["critical"], true);
    }
}
