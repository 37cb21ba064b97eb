use anyhow::Context;
use disaster_kb_core::{matched_term, KnowledgeEntry};
use disaster_kb_io::read_knowledge_base;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

const TOP_REGIONS: usize = 10;

#[derive(Debug, Serialize)]
struct KnowledgeBaseSummary {
    entries: usize,
    weather_entries: usize,
    regions: usize,
    top_regions: Vec<(String, usize)>,
    hazard_terms: BTreeMap<String, usize>,
}

fn summarize(entries: &[KnowledgeEntry]) -> KnowledgeBaseSummary {
    let mut per_region: HashMap<&str, usize> = HashMap::new();
    let mut hazard_terms: BTreeMap<String, usize> = BTreeMap::new();
    let mut weather_entries = 0;

    for entry in entries {
        // keywords[0] is the region, keywords[1] the incident type
        if let Some(region) = entry.keywords.first() {
            *per_region.entry(region.as_str()).or_insert(0) += 1;
        }
        if let Some(term) = entry.keywords.get(1).and_then(|t| matched_term(t)) {
            weather_entries += 1;
            *hazard_terms.entry(term.to_string()).or_insert(0) += 1;
        }
    }

    let mut top_regions: Vec<(String, usize)> = per_region
        .iter()
        .map(|(region, count)| (region.to_string(), *count))
        .collect();
    top_regions.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_regions.truncate(TOP_REGIONS);

    KnowledgeBaseSummary {
        entries: entries.len(),
        weather_entries,
        regions: per_region.len(),
        top_regions,
        hazard_terms,
    }
}

fn render(summary: &KnowledgeBaseSummary) -> String {
    let mut out = format!(
        "Profiles: {}\n\
         Weather-related: {}\n\
         Regions: {}",
        summary.entries, summary.weather_entries, summary.regions
    );
    if !summary.top_regions.is_empty() {
        out.push_str("\nTop regions:");
        for (region, count) in &summary.top_regions {
            out.push_str(&format!("\n  {:<6} {}", region, count));
        }
    }
    if !summary.hazard_terms.is_empty() {
        out.push_str("\nWeather terms matched:");
        for (term, count) in &summary.hazard_terms {
            out.push_str(&format!("\n  {:<10} {}", term, count));
        }
    }
    out
}

pub fn run(file: &Path, json: bool) -> anyhow::Result<()> {
    let entries = read_knowledge_base(file)
        .with_context(|| format!("failed to load {}", file.display()))?;
    let summary = summarize(&entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render(&summary));
    }
    Ok(())
}
