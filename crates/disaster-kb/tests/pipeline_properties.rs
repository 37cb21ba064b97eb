use disaster_kb_core::{
    build_knowledge_base, is_weather_incident, PipelineConfig, RawIncidentRecord,
};

fn group(
    region: &str,
    incident: &str,
    n: usize,
    ia: usize,
    pa: usize,
) -> Vec<RawIncidentRecord> {
    (0..n)
        .map(|i| RawIncidentRecord::new(region, incident, i < ia, i < pa))
        .collect()
}

fn mixed_dataset() -> Vec<RawIncidentRecord> {
    let mut records = Vec::new();
    let incidents = [
        "Flood",
        "Fire",
        "Hurricane",
        "Earthquake",
        "Winter Storm",
        "Tornado",
    ];
    let regions = ["AL", "CA", "FL", "NY", "TX", "WA", "PR"];
    for (r, region) in regions.iter().enumerate() {
        for (t, incident) in incidents.iter().enumerate() {
            let n = 2 + (r * 7 + t * 3) % 12;
            let ia = (r + t) % (n + 1);
            let pa = (r * t) % (n + 1);
            records.extend(group(region, incident, n, ia, pa));
        }
    }
    records
}

#[test]
fn test_surviving_groups_exceed_threshold() {
    let kb = build_knowledge_base(&mixed_dataset(), &PipelineConfig::new());
    assert!(!kb.is_empty());
    assert!(kb.report.groups_below_threshold > 0);
    for stats in &kb.groups {
        assert!(stats.total_incidents > 5, "{:?}", stats.key);
    }
}

#[test]
fn test_probabilities_in_range() {
    let kb = build_knowledge_base(&mixed_dataset(), &PipelineConfig::new());
    for stats in &kb.groups {
        for pct in [stats.ia_probability_pct, stats.pa_probability_pct] {
            assert!((0.0..=100.0).contains(&pct), "{pct}");
            let tenths = pct * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9, "{pct}");
        }
    }
}

#[test]
fn test_entries_align_with_groups() {
    let kb = build_knowledge_base(&mixed_dataset(), &PipelineConfig::new());
    assert_eq!(kb.entries.len(), kb.groups.len());
    for (i, (entry, stats)) in kb.entries.iter().zip(&kb.groups).enumerate() {
        assert_eq!(entry.id, format!("fema_{i}"));
        assert_eq!(entry.keywords[0], stats.key.region.to_lowercase());
        assert_eq!(entry.keywords[1], stats.key.incident_type.to_lowercase());
        assert_eq!(entry.keywords[2], "disaster");
        let expected_len = if is_weather_incident(&stats.key.incident_type) {
            5
        } else {
            3
        };
        assert_eq!(entry.keywords.len(), expected_len);
        assert!(entry
            .historical_summary
            .contains(&format!("Based on {} recorded incidents", stats.total_incidents)));
    }
}

#[test]
fn test_groups_are_independent_by_exact_key() {
    let mut records = group("TX", "Flood", 5, 5, 5);
    records.extend(group("TX", "FLOOD", 9, 0, 0));
    records.extend(group("tx", "Flood", 9, 0, 0));

    let kb = build_knowledge_base(&records, &PipelineConfig::new());
    assert_eq!(kb.len(), 2);
    assert!(kb
        .groups
        .iter()
        .all(|g| !(g.key.region == "TX" && g.key.incident_type == "Flood")));
}

#[test]
fn test_threshold_boundary() {
    let mut records = group("CO", "Fire", 5, 0, 0);
    records.extend(group("CO", "Flood", 6, 0, 0));

    let kb = build_knowledge_base(&records, &PipelineConfig::new());
    assert_eq!(kb.len(), 1);
    assert_eq!(kb.groups[0].key.incident_type, "Flood");
}

#[test]
fn test_input_order_does_not_change_output() {
    let records = mixed_dataset();
    let mut reversed = records.clone();
    reversed.reverse();

    let config = PipelineConfig::new();
    assert_eq!(
        build_knowledge_base(&records, &config).entries,
        build_knowledge_base(&reversed, &config).entries
    );
}
