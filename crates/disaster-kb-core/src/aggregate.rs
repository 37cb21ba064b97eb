//! Group-by aggregation of incident records

use crate::types::{GroupKey, GroupStatistics, RawIncidentRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Counters describing what the aggregator kept and dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationReport {
    pub input_records: usize,
    /// Records missing at least one required field
    pub incomplete_records: usize,
    pub groups_formed: usize,
    /// Groups at or below the support threshold
    pub groups_below_threshold: usize,
}

impl AggregationReport {
    pub fn groups_retained(&self) -> usize {
        self.groups_formed - self.groups_below_threshold
    }
}

#[derive(Debug, Default)]
struct Counts {
    total: usize,
    ia: usize,
    pa: usize,
}

/// Percentage rounded to one decimal, ties to even
pub fn round_pct(count: usize, total: usize) -> f64 {
    let pct = count as f64 / total as f64 * 100.0;
    (pct * 10.0).round_ties_even() / 10.0
}

/// Group records by (region, incident type) and keep groups with more than
/// `min_incidents` complete records.
///
/// Output is sorted by [`GroupKey`].
pub fn aggregate(
    records: &[RawIncidentRecord],
    min_incidents: usize,
) -> (Vec<GroupStatistics>, AggregationReport) {
    let mut report = AggregationReport {
        input_records: records.len(),
        ..Default::default()
    };

    let mut groups: BTreeMap<(&str, &str), Counts> = BTreeMap::new();
    for record in records {
        let Some(view) = record.complete() else {
            report.incomplete_records += 1;
            continue;
        };
        let counts = groups.entry((view.region, view.incident_type)).or_default();
        counts.total += 1;
        counts.ia += usize::from(view.ia_approved);
        counts.pa += usize::from(view.pa_approved);
    }
    report.groups_formed = groups.len();

    let mut stats = Vec::with_capacity(groups.len());
    for ((region, incident_type), counts) in groups {
        if counts.total <= min_incidents {
            debug!(region, incident_type, total = counts.total, "group below threshold");
            report.groups_below_threshold += 1;
            continue;
        }
        stats.push(GroupStatistics {
            key: GroupKey::new(region, incident_type),
            total_incidents: counts.total,
            ia_approved_count: counts.ia,
            pa_approved_count: counts.pa,
            ia_probability_pct: round_pct(counts.ia, counts.total),
            pa_probability_pct: round_pct(counts.pa, counts.total),
        });
    }

    (stats, report)
}
