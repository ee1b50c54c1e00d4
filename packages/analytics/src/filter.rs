//! Conjunctive record selection.

use carrier_intel_analytics_models::CarrierFilter;
use carrier_intel_carrier_models::CarrierRecord;

/// Whether `record` satisfies every clause of `filter`.
#[must_use]
pub fn matches(record: &CarrierRecord, filter: &CarrierFilter) -> bool {
    filter.regions.contains(&record.region)
        && filter.fleet_range.contains(record.fleet_size)
        && record.risk_score >= filter.risk_min
}

/// Selects the records matching `filter`, preserving input order.
///
/// An empty region set or an inverted fleet range yields an empty result.
#[must_use]
pub fn filter<'a>(records: &'a [CarrierRecord], filter: &CarrierFilter) -> Vec<&'a CarrierRecord> {
    if filter.regions.is_empty() || filter.fleet_range.is_empty() {
        log::debug!("Filter selects nothing: {filter:?}");
        return Vec::new();
    }

    let selected: Vec<&CarrierRecord> = records.iter().filter(|r| matches(r, filter)).collect();
    log::trace!("Filter kept {}/{} carriers", selected.len(), records.len());
    selected
}
