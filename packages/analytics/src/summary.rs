//! Per-region grouped reduction.

use std::collections::BTreeMap;

use carrier_intel_analytics_models::RegionSummary;
use carrier_intel_carrier_models::{CarrierRecord, Region};

#[derive(Default)]
struct Accumulator {
    count: u64,
    risk_score: f64,
    savings: f64,
    fleet_size: f64,
    wage_percentile: f64,
    out_of_service_rate: f64,
}

impl Accumulator {
    fn add(&mut self, record: &CarrierRecord) {
        self.count += 1;
        self.risk_score += record.risk_score;
        self.savings += record.annual_savings_potential;
        self.fleet_size += f64::from(record.fleet_size);
        self.wage_percentile += record.wage_percentile;
        self.out_of_service_rate += record.out_of_service_rate;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(self, region: Region) -> RegionSummary {
        let n = self.count as f64;
        RegionSummary {
            region,
            carrier_count: self.count,
            avg_risk_score: self.risk_score / n,
            total_savings_potential: self.savings,
            avg_fleet_size: self.fleet_size / n,
            avg_wage_percentile: self.wage_percentile / n,
            avg_out_of_service_rate: self.out_of_service_rate / n,
        }
    }
}

/// Summarizes `records` into one [`RegionSummary`] per region present.
///
/// Summaries come back in [`Region`] catalogue order. Regions with no
/// records are omitted, so an empty input yields an empty result.
pub fn summarize<'a, I>(records: I) -> Vec<RegionSummary>
where
    I: IntoIterator<Item = &'a CarrierRecord>,
{
    let mut groups: BTreeMap<Region, Accumulator> = BTreeMap::new();

    for record in records {
        groups.entry(record.region).or_default().add(record);
    }

    groups
        .into_iter()
        .map(|(region, acc)| acc.finish(region))
        .collect()
}

/// Returns the `limit` summaries with the highest mean risk score,
/// riskiest first.
#[must_use]
pub fn top_risk_regions(summaries: &[RegionSummary], limit: usize) -> Vec<RegionSummary> {
    let mut ranked = summaries.to_vec();
    ranked.sort_by(|a, b| b.avg_risk_score.total_cmp(&a.avg_risk_score));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::carrier;

    const EPS: f64 = 1e-9;

    #[test]
    fn three_records_two_regions() {
        let mut a = carrier(0, Region::Tx, 100, 4.0);
        a.wage_percentile = 30.0;
        a.out_of_service_rate = 1.0;
        a.annual_savings_potential = 900_000.0;
        let mut b = carrier(1, Region::Ga, 20, 8.0);
        b.wage_percentile = 60.0;
        b.out_of_service_rate = 5.0;
        b.annual_savings_potential = 260_000.0;
        let mut c = carrier(2, Region::Tx, 300, 6.0);
        c.wage_percentile = 50.0;
        c.out_of_service_rate = 3.0;
        c.annual_savings_potential = 3_000_000.0;

        let records = vec![a, b, c];
        let summaries = summarize(&records);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries.iter().map(|s| s.carrier_count).sum::<u64>(), 3);

        let tx = summaries.iter().find(|s| s.region == Region::Tx).unwrap();
        assert_eq!(tx.carrier_count, 2);
        assert!((tx.avg_risk_score - 5.0).abs() < EPS);
        assert!((tx.total_savings_potential - 3_900_000.0).abs() < EPS);
        assert!((tx.avg_fleet_size - 200.0).abs() < EPS);
        assert!((tx.avg_wage_percentile - 40.0).abs() < EPS);
        assert!((tx.avg_out_of_service_rate - 2.0).abs() < EPS);

        let ga = summaries.iter().find(|s| s.region == Region::Ga).unwrap();
        assert_eq!(ga.carrier_count, 1);
        assert!((ga.avg_risk_score - 8.0).abs() < EPS);
        assert!((ga.total_savings_potential - 260_000.0).abs() < EPS);
        assert!((ga.avg_fleet_size - 20.0).abs() < EPS);
        assert!((ga.avg_wage_percentile - 60.0).abs() < EPS);
        assert!((ga.avg_out_of_service_rate - 5.0).abs() < EPS);
    }

    #[test]
    fn summaries_follow_catalogue_order() {
        let records = vec![
            carrier(0, Region::Wv, 10, 1.0),
            carrier(1, Region::Ga, 10, 1.0),
            carrier(2, Region::Tx, 10, 1.0),
        ];
        let regions: Vec<Region> = summarize(&records).iter().map(|s| s.region).collect();
        assert_eq!(regions, vec![Region::Ga, Region::Tx, Region::Wv]);
    }

    #[test]
    fn empty_input_gives_empty_summary() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn accepts_filtered_references() {
        let records = vec![
            carrier(0, Region::Ga, 10, 1.0),
            carrier(1, Region::Fl, 10, 9.0),
        ];
        let high: Vec<&CarrierRecord> = records.iter().filter(|r| r.risk_score > 5.0).collect();
        let summaries = summarize(high.iter().copied());
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].region, Region::Fl);
    }

    #[test]
    fn top_risk_regions_sorts_descending_and_truncates() {
        let records = vec![
            carrier(0, Region::Ga, 10, 3.0),
            carrier(1, Region::Fl, 10, 9.0),
            carrier(2, Region::Tx, 10, 6.0),
        ];
        let top = top_risk_regions(&summarize(&records), 2);
        let regions: Vec<Region> = top.iter().map(|s| s.region).collect();
        assert_eq!(regions, vec![Region::Fl, Region::Tx]);
    }
}
