//! Configuration for knowledge base generation

/// Groups with this many records or fewer are discarded
pub const DEFAULT_MIN_INCIDENTS: usize = 5;

/// Prefix for generated entry ids
pub const DEFAULT_ID_PREFIX: &str = "fema_";

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Exclusive support threshold (a group needs strictly more records)
    pub min_incidents: usize,

    /// Prefix prepended to the sequential entry number
    pub id_prefix: String,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self {
            min_incidents: DEFAULT_MIN_INCIDENTS,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }

    pub fn with_min_incidents(mut self, min_incidents: usize) -> Self {
        self.min_incidents = min_incidents;
        self
    }

    pub fn with_id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = id_prefix.into();
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}
