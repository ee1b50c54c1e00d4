#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Carrier record, region catalogue, and risk tier definitions.
//!
//! This crate defines the shared data model for the carrier intelligence
//! dashboard. Every other package consumes [`CarrierRecord`] values
//! produced by the generator; none of them mutate a record after it has
//! been created.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Smallest fleet size a generated carrier can have.
pub const MIN_FLEET_SIZE: u32 = 10;

/// Largest fleet size a generated carrier can have.
pub const MAX_FLEET_SIZE: u32 = 500;

/// Upper bound of each risk sub-score and therefore of the risk score.
pub const MAX_RISK_SCORE: f64 = 10.0;

/// Risk score at or above which a carrier counts as critical.
pub const CRITICAL_RISK_THRESHOLD: f64 = 7.5;

/// A geographic region (US state) in the carrier catalogue.
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
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Region {
    /// Georgia
    Ga,
    /// Florida
    Fl,
    /// Texas
    Tx,
    /// North Carolina
    Nc,
    /// Tennessee
    Tn,
    /// South Carolina
    Sc,
    /// Alabama
    Al,
    /// Mississippi
    Ms,
    /// Louisiana
    La,
    /// Arkansas
    Ar,
    /// Oklahoma
    Ok,
    /// Kentucky
    Ky,
    /// Virginia
    Va,
    /// West Virginia
    Wv,
}

impl Region {
    /// Returns all regions in catalogue order.
    ///
    /// The order is part of the generator contract: a region is drawn as
    /// a uniform index into this slice.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Ga,
            Self::Fl,
            Self::Tx,
            Self::Nc,
            Self::Tn,
            Self::Sc,
            Self::Al,
            Self::Ms,
            Self::La,
            Self::Ar,
            Self::Ok,
            Self::Ky,
            Self::Va,
            Self::Wv,
        ]
    }

    /// Returns the full state name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ga => "Georgia",
            Self::Fl => "Florida",
            Self::Tx => "Texas",
            Self::Nc => "North Carolina",
            Self::Tn => "Tennessee",
            Self::Sc => "South Carolina",
            Self::Al => "Alabama",
            Self::Ms => "Mississippi",
            Self::La => "Louisiana",
            Self::Ar => "Arkansas",
            Self::Ok => "Oklahoma",
            Self::Ky => "Kentucky",
            Self::Va => "Virginia",
            Self::Wv => "West Virginia",
        }
    }

    /// Returns the localities (cities) a carrier in this region can be
    /// based in, in sampling order.
    #[must_use]
    pub const fn localities(self) -> &'static [&'static str] {
        match self {
            Self::Ga => &["Atlanta", "Savannah", "Augusta", "Columbus"],
            Self::Fl => &["Miami", "Jacksonville", "Tampa", "Orlando"],
            Self::Tx => &["Houston", "Dallas", "Austin", "San Antonio"],
            Self::Nc => &["Charlotte", "Raleigh", "Greensboro", "Asheville"],
            Self::Tn => &["Nashville", "Memphis", "Knoxville", "Chattanooga"],
            Self::Sc => &["Charleston", "Columbia", "Greenville", "Spartanburg"],
            Self::Al => &["Birmingham", "Mobile", "Montgomery", "Huntsville"],
            Self::Ms => &["Jackson", "Gulfport", "Meridian", "Hattiesburg"],
            Self::La => &["New Orleans", "Baton Rouge", "Shreveport", "Lafayette"],
            Self::Ar => &["Little Rock", "Fort Smith", "Fayetteville", "Pine Bluff"],
            Self::Ok => &["Oklahoma City", "Tulsa", "Norman", "Broken Arrow"],
            Self::Ky => &["Louisville", "Lexington", "Bowling Green", "Owensboro"],
            Self::Va => &["Richmond", "Norfolk", "Virginia Beach", "Newport News"],
            Self::Wv => &["Charleston", "Huntington", "Parkersburg", "Morgantown"],
        }
    }
}

/// One synthetic trucking company.
///
/// All numeric fields are computed once at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierRecord {
    /// Deterministic identifier, e.g. `"USDOT100042"`.
    pub carrier_id: String,
    /// Display name, e.g. `"Premier Freight Co."`.
    pub carrier_name: String,
    /// Home region.
    pub region: Region,
    /// City within [`Self::region`].
    pub locality: String,
    /// Number of trucks, within [`MIN_FLEET_SIZE`]..=[`MAX_FLEET_SIZE`].
    pub fleet_size: u32,
    /// Driver wage percentile, 5-95.
    pub wage_percentile: f64,
    /// Out-of-service rate (%), at least 0.1.
    pub out_of_service_rate: f64,
    /// Crashes per million miles, at least 0.1.
    pub crash_rate: f64,
    /// Safety violations per year.
    pub safety_violations: u32,
    /// Composite churn/safety risk, 0-10.
    pub risk_score: f64,
    /// Estimated annual savings from reduced driver churn (USD).
    pub annual_savings_potential: f64,
}

impl CarrierRecord {
    /// Returns the [`RiskTier`] of this carrier.
    #[must_use]
    pub fn risk_tier(&self) -> RiskTier {
        RiskTier::from_score(self.risk_score)
    }

    /// Whether this carrier's risk score is at or above
    /// [`CRITICAL_RISK_THRESHOLD`].
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.risk_score >= CRITICAL_RISK_THRESHOLD
    }
}

/// An inclusive fleet-size interval.
///
/// A range with `min > max` is legal and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetRange {
    /// Inclusive lower bound.
    pub min: u32,
    /// Inclusive upper bound.
    pub max: u32,
}

impl FleetRange {
    /// Creates a new inclusive range.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `fleet_size` lies within the range.
    #[must_use]
    pub const fn contains(&self, fleet_size: u32) -> bool {
        self.min <= fleet_size && fleet_size <= self.max
    }

    /// Whether the range can contain no fleet size at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Default for FleetRange {
    fn default() -> Self {
        Self::new(MIN_FLEET_SIZE, MAX_FLEET_SIZE)
    }
}

/// Risk bands used to color prospect rankings.
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
pub enum RiskTier {
    /// Risk below 6.5.
    Moderate,
    /// Risk in [6.5, 8).
    Medium,
    /// Risk of 8 or more.
    High,
}

impl RiskTier {
    /// Classifies a risk score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::High
        } else if score >= 6.5 {
            Self::Medium
        } else {
            Self::Moderate
        }
    }
}

/// One month of a carrier's safety-violation trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyTrendPoint {
    /// Month label (`YYYY-MM`).
    pub period: String,
    /// Violations in the current year for this month.
    pub current: f64,
    /// Violations in the same month of the prior year.
    pub prior: f64,
}

/// Whole-number violation count for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyViolations {
    /// Month label (`YYYY-MM`).
    pub period: String,
    /// Number of safety violations recorded in the month.
    pub safety_violations: u32,
}
