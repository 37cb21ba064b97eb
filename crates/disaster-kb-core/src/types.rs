//! Data model for incident records, group statistics, and knowledge entries

use serde::{Deserialize, Serialize};

/// One historical declaration as read from the source dataset.
///
/// Every field is optional at this layer; rows with a missing field are
/// dropped by the aggregator rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIncidentRecord {
    pub region: Option<String>,
    pub incident_type: Option<String>,
    pub ia_approved: Option<bool>,
    pub pa_approved: Option<bool>,
}

/// Borrowed view of a record that has all four fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteRecord<'a> {
    pub region: &'a str,
    pub incident_type: &'a str,
    pub ia_approved: bool,
    pub pa_approved: bool,
}

impl RawIncidentRecord {
    pub fn new(
        region: impl Into<String>,
        incident_type: impl Into<String>,
        ia_approved: bool,
        pa_approved: bool,
    ) -> Self {
        Self {
            region: Some(region.into()),
            incident_type: Some(incident_type.into()),
            ia_approved: Some(ia_approved),
            pa_approved: Some(pa_approved),
        }
    }

    /// Returns the usable view, or `None` if any field is missing
    pub fn complete(&self) -> Option<CompleteRecord<'_>> {
        Some(CompleteRecord {
            region: self.region.as_deref()?,
            incident_type: self.incident_type.as_deref()?,
            ia_approved: self.ia_approved?,
            pa_approved: self.pa_approved?,
        })
    }
}

/// Grouping key. Case-sensitive, compared byte-wise on the raw strings.
///
/// Field order matters: the derived `Ord` sorts by region first, then
/// incident type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub region: String,
    pub incident_type: String,
}

impl GroupKey {
    pub fn new(region: impl Into<String>, incident_type: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            incident_type: incident_type.into(),
        }
    }
}

/// Per-group counts and trigger probabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStatistics {
    pub key: GroupKey,
    pub total_incidents: usize,
    pub ia_approved_count: usize,
    pub pa_approved_count: usize,
    /// Percentage rounded to one decimal place
    pub ia_probability_pct: f64,
    /// Percentage rounded to one decimal place
    pub pa_probability_pct: f64,
}

/// The four templated prompt strings attached to each entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticalInsights {
    pub baseline_context: String,
    pub minimal_impact: String,
    pub moderate_impact: String,
    pub radical_impact: String,
}

/// Retrieval-ready profile for a single (region, incident type) group.
///
/// Serialized field names are consumed by the downstream keyword search and
/// must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub keywords: Vec<String>,
    #[serde(rename = "historical_event")]
    pub historical_summary: String,
    #[serde(rename = "statistical_insights")]
    pub insights: StatisticalInsights,
}
