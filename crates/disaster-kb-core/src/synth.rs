//! Profile synthesis: keywords and templated prompt text per group

use crate::classify::is_weather_incident;
use crate::types::{GroupStatistics, KnowledgeEntry, StatisticalInsights};

/// Sequential id source for one run.
///
/// Ids follow the order entries are synthesized in, so the same input
/// order always yields the same ids.
#[derive(Debug, Clone)]
pub struct EntryIdCounter {
    prefix: String,
    next: usize,
}

impl EntryIdCounter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> usize {
        self.next
    }
}

/// Render a percentage the way the published dataset has always shown it:
/// shortest round-trip form, always with a fractional part (`50.0`, `33.3`).
pub fn format_pct(value: f64) -> String {
    format!("{:?}", value)
}

/// Keywords for retrieval: region, incident type, "disaster", and the
/// weather tags when the incident type is weather-related.
pub fn build_keywords(region: &str, incident_type: &str) -> Vec<String> {
    let mut keywords = vec![
        region.to_lowercase(),
        incident_type.to_lowercase(),
        "disaster".to_string(),
    ];
    if is_weather_incident(incident_type) {
        keywords.extend(["storm".to_string(), "weather".to_string()]);
    }
    keywords
}

pub fn historical_summary(stats: &GroupStatistics) -> String {
    format!(
        "Historical {}s in {} (Based on {} recorded incidents)",
        stats.key.incident_type, stats.key.region, stats.total_incidents
    )
}

/// Baseline context plus the three severity-tier strategy prompts
pub fn build_insights(stats: &GroupStatistics) -> StatisticalInsights {
    let incident_type = &stats.key.incident_type;
    let region = &stats.key.region;
    let ia = format_pct(stats.ia_probability_pct);
    let pa = format_pct(stats.pa_probability_pct);
    // Complement of the already-rounded value, not of the raw ratio
    let ia_avoided = format_pct(100.0 - stats.ia_probability_pct);

    StatisticalInsights {
        baseline_context: format!(
            "Use this profile as a decision anchor for ambiguous user prompts. \
             For {incident_type}s in {region}, historical rates are \
             {ia}% for severe household impact (IA) and {pa}% \
             for public infrastructure strain (PA)."
        ),
        minimal_impact: format!(
            "Generate a conservative response strategy with minimal policy disruption. \
             Prioritize low-regret actions (targeted pricing updates, selective underwriting \
             tightening, focused preparedness messaging). Historically, {ia_avoided}% \
             of these events avoid widespread IA-level household losses."
        ),
        moderate_impact: format!(
            "Generate a structural adjustment strategy. Include at least one material lever \
             (deductible redesign, coverage condition updates, portfolio rebalancing, or \
             capital allocation shifts). Ground severity on the {ia}% historical \
             likelihood of widespread IA-level household impact."
        ),
        radical_impact: format!(
            "Generate a survival-level strategy for tail-risk conditions. Include decisive \
             moves such as catastrophe financing, geographic exposure contraction, product \
             withdrawal, or rapid operating model change. Reflect the {pa}% \
             historical probability of PA-level infrastructure disruption."
        ),
    }
}

/// Materialize one group into a knowledge entry, drawing its id from `ids`
pub fn synthesize_entry(stats: &GroupStatistics, ids: &mut EntryIdCounter) -> KnowledgeEntry {
    KnowledgeEntry {
        id: ids.next_id(),
        keywords: build_keywords(&stats.key.region, &stats.key.incident_type),
        historical_summary: historical_summary(stats),
        insights: build_insights(stats),
    }
}
