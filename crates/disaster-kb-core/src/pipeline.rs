//! Aggregate-then-synthesize pipeline

use crate::aggregate::{aggregate, AggregationReport};
use crate::config::PipelineConfig;
use crate::synth::{synthesize_entry, EntryIdCounter};
use crate::types::{GroupStatistics, KnowledgeEntry, RawIncidentRecord};
use tracing::info;

/// Output of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    pub entries: Vec<KnowledgeEntry>,
    /// Statistics behind each entry, index-aligned with `entries`
    pub groups: Vec<GroupStatistics>,
    pub report: AggregationReport,
}

impl KnowledgeBase {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Turn raw records into knowledge entries
pub fn build_knowledge_base(
    records: &[RawIncidentRecord],
    config: &PipelineConfig,
) -> KnowledgeBase {
    let (groups, report) = aggregate(records, config.min_incidents);
    info!(
        input = report.input_records,
        incomplete = report.incomplete_records,
        groups = report.groups_formed,
        below_threshold = report.groups_below_threshold,
        "aggregated incident records"
    );

    let mut ids = EntryIdCounter::new(config.id_prefix.as_str());
    let entries: Vec<KnowledgeEntry> = groups
        .iter()
        .map(|group| synthesize_entry(group, &mut ids))
        .collect();

    KnowledgeBase {
        entries,
        groups,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<RawIncidentRecord> {
        let mut records = Vec::new();
        for i in 0..6 {
            records.push(RawIncidentRecord::new("CA", "Flood", i < 3, true));
        }
        for _ in 0..5 {
            records.push(RawIncidentRecord::new("CA", "Fire", true, true));
        }
        for i in 0..7 {
            records.push(RawIncidentRecord::new("TX", "Hurricane", i % 2 == 0, i > 0));
        }
        records
    }

    #[test]
    fn test_end_to_end_scenario() {
        let kb = build_knowledge_base(&scenario(), &PipelineConfig::new());
        assert_eq!(kb.len(), 2);

        let flood = &kb.groups[0];
        assert_eq!(flood.key.region, "CA");
        assert_eq!(flood.key.incident_type, "Flood");
        assert_eq!(flood.total_incidents, 6);
        assert_eq!(flood.ia_probability_pct, 50.0);
        assert_eq!(flood.pa_probability_pct, 100.0);

        let entry = &kb.entries[0];
        assert_eq!(entry.id, "fema_0");
        assert!(entry.insights.minimal_impact.contains("50.0%"));
        assert_eq!(
            entry.keywords,
            vec!["ca", "flood", "disaster", "storm", "weather"]
        );

        assert_eq!(kb.entries[1].id, "fema_1");
        assert_eq!(kb.groups[1].key.incident_type, "Hurricane");
    }

    #[test]
    fn test_small_groups_absent() {
        let kb = build_knowledge_base(&scenario(), &PipelineConfig::new());
        assert!(kb
            .entries
            .iter()
            .all(|e| !e.historical_summary.contains("Fire")));
        assert_eq!(kb.report.groups_below_threshold, 1);
    }

    #[test]
    fn test_empty_input_is_valid() {
        let kb = build_knowledge_base(&[], &PipelineConfig::new());
        assert!(kb.is_empty());
        assert!(kb.groups.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let records = scenario();
        let config = PipelineConfig::new();
        let first = build_knowledge_base(&records, &config);
        let second = build_knowledge_base(&records, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_applied() {
        let config = PipelineConfig::new()
            .with_min_incidents(6)
            .with_id_prefix("hist-");
        let kb = build_knowledge_base(&scenario(), &config);
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.entries[0].id, "hist-0");
        assert_eq!(kb.groups[0].key.incident_type, "Hurricane");
    }
}
