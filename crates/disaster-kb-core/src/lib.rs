//! Aggregation and profile synthesis for disaster-declaration knowledge bases

mod aggregate;
mod classify;
mod config;
mod pipeline;
mod synth;
mod types;

pub use aggregate::{aggregate, round_pct, AggregationReport};
pub use classify::{is_weather_incident, matched_term, WEATHER_INCIDENT_TERMS};
pub use config::{PipelineConfig, DEFAULT_ID_PREFIX, DEFAULT_MIN_INCIDENTS};
pub use pipeline::{build_knowledge_base, KnowledgeBase};
pub use synth::{build_insights, build_keywords, format_pct, synthesize_entry, EntryIdCounter};
pub use types::{
    CompleteRecord, GroupKey, GroupStatistics, KnowledgeEntry, RawIncidentRecord,
    StatisticalInsights,
};
