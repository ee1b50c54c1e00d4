#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region aggregation, filtering, and insight computations over carrier
//! populations.
//!
//! Every function here is a pure transform over borrowed records: the
//! population is generated once and every dashboard interaction reruns
//! these functions against it from scratch.

pub mod filter;
pub mod insights;
pub mod stats;
pub mod summary;

pub use filter::{filter, matches};
pub use summary::summarize;

use thiserror::Error;

/// Errors that can occur during analytics operations.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// A caller-supplied argument was out of range.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what went wrong.
        message: String,
    },

    /// A weighted draw could not be made.
    #[error("Sampling error: {message}")]
    Sampling {
        /// Description of what went wrong.
        message: String,
    },
}

#[cfg(test)]
pub(crate) mod fixtures {
    use carrier_intel_carrier_models::{CarrierRecord, Region};

    /// Builds a record with the fields tests care about; the rest are
    /// plausible constants.
    pub fn carrier(id: u32, region: Region, fleet_size: u32, risk_score: f64) -> CarrierRecord {
        CarrierRecord {
            carrier_id: format!("USDOT{}", 100_000 + id),
            carrier_name: format!("Carrier {id}"),
            region,
            locality: region.localities()[0].to_string(),
            fleet_size,
            wage_percentile: 50.0,
            out_of_service_rate: 2.0,
            crash_rate: 1.0,
            safety_violations: 3,
            risk_score,
            annual_savings_potential: f64::from(fleet_size) * 10_000.0,
        }
    }
}
