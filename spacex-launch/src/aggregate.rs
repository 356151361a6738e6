//! Derived views over the launch table.
//!
//! Everything here is recomputed per request and dropped right after the
//! chart description is built.

use crate::record::{LaunchRecord, Outcome};
use serde::{Deserialize, Serialize};

/// Number of successful launches at one site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteCount {
    pub site: String,
    pub count: usize,
}

/// Number of records with one outcome, within a single site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub count: usize,
}

/// Payload selector value: a `[low, high]` pair in kilograms.
///
/// `low <= high` always holds; the constructor orders its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Strict on both ends: `low < mass < high`.
    pub fn contains_exclusive(&self, mass: f64) -> bool {
        self.low < mass && mass < self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

/// One entry per distinct site, in first-appearance order, counting
/// successful launches. Sites without a success still appear with zero.
pub fn success_counts_by_site(records: &[LaunchRecord]) -> Vec<SiteCount> {
    let mut counts: Vec<SiteCount> = Vec::new();
    for record in records {
        let hit = usize::from(record.outcome.is_success());
        match counts.iter_mut().find(|c| c.site == record.launch_site) {
            Some(entry) => entry.count += hit,
            None => counts.push(SiteCount {
                site: record.launch_site.clone(),
                count: hit,
            }),
        }
    }
    counts
}

/// Success and failure counts for `site`, success first. Outcomes that
/// never occur at the site are omitted, so an unknown site yields nothing.
pub fn outcome_counts(records: &[LaunchRecord], site: &str) -> Vec<OutcomeCount> {
    let (successes, failures) =
        records_at_site(records, site).fold((0, 0), |(s, f), r| match r.outcome {
            Outcome::Success => (s + 1, f),
            Outcome::Failure => (s, f + 1),
        });

    [(Outcome::Success, successes), (Outcome::Failure, failures)]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(outcome, count)| OutcomeCount { outcome, count })
        .collect()
}

pub fn records_at_site<'a>(
    records: &'a [LaunchRecord],
    site: &'a str,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    records.iter().filter(move |r| r.launch_site == site)
}

pub fn payload_subset<'a, I>(records: I, range: PayloadRange) -> impl Iterator<Item = &'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(move |r| range.contains_exclusive(r.payload_mass_kg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("A", 100.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("B", 2000.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("A", 3000.0, Outcome::Failure, "FT"),
            LaunchRecord::new("C", 4000.0, Outcome::Failure, "FT"),
            LaunchRecord::new("A", 5000.0, Outcome::Success, "B4"),
        ]
    }

    #[test]
    fn success_counts_keep_first_appearance_order() {
        let counts = success_counts_by_site(&sample());
        let pairs: Vec<(&str, usize)> = counts.iter().map(|c| (c.site.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("A", 2), ("B", 0), ("C", 0)]);
    }

    #[test]
    fn outcome_counts_for_site() {
        let counts = outcome_counts(&sample(), "A");
        assert_eq!(
            counts,
            vec![
                OutcomeCount { outcome: Outcome::Success, count: 2 },
                OutcomeCount { outcome: Outcome::Failure, count: 1 },
            ]
        );
    }

    #[test]
    fn outcome_counts_omit_missing_outcomes() {
        let counts = outcome_counts(&sample(), "B");
        assert_eq!(counts, vec![OutcomeCount { outcome: Outcome::Failure, count: 1 }]);
        assert!(outcome_counts(&sample(), "Nowhere").is_empty());
    }

    #[test]
    fn payload_range_orders_bounds() {
        let range = PayloadRange::new(8000.0, 1000.0);
        assert_eq!(range.low(), 1000.0);
        assert_eq!(range.high(), 8000.0);
    }

    #[test]
    fn payload_range_bounds_are_exclusive() {
        let range = PayloadRange::new(100.0, 5000.0);
        assert!(!range.contains_exclusive(100.0));
        assert!(range.contains_exclusive(100.5));
        assert!(!range.contains_exclusive(5000.0));

        let masses: Vec<f64> = payload_subset(&sample(), range)
            .map(|r| r.payload_mass_kg)
            .collect();
        assert_eq!(masses, vec![2000.0, 3000.0, 4000.0]);
    }

    #[test]
    fn payload_range_from_json_pair() {
        let range: PayloadRange = serde_json::from_str("[9000, 2000]").unwrap();
        assert_eq!(range, PayloadRange::new(2000.0, 9000.0));
        assert_eq!(serde_json::to_string(&range).unwrap(), "[2000.0,9000.0]");
    }
}
