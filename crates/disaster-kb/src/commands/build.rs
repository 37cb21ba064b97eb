use anyhow::Context;
use disaster_kb_core::{build_knowledge_base, KnowledgeBase, PipelineConfig};
use disaster_kb_io::{read_incident_records, write_knowledge_base, ColumnMap};
use std::path::PathBuf;
use tracing::{info, warn};

pub struct BuildOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub min_incidents: usize,
    pub id_prefix: String,
}

impl BuildOptions {
    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new()
            .with_min_incidents(self.min_incidents)
            .with_id_prefix(self.id_prefix.as_str())
    }
}

fn build(options: &BuildOptions) -> anyhow::Result<KnowledgeBase> {
    println!("Loading dataset...");
    let records = read_incident_records(&options.input, &ColumnMap::default())
        .with_context(|| format!("failed to read {}", options.input.display()))?;
    info!(rows = records.len(), path = %options.input.display(), "loaded dataset");

    println!("Aggregating historical probabilities...");
    let kb = build_knowledge_base(&records, &options.pipeline_config());
    if kb.report.incomplete_records > 0 {
        warn!(
            dropped = kb.report.incomplete_records,
            "skipped rows with missing region, incident type, or assistance flags"
        );
    }

    write_knowledge_base(&options.output, &kb.entries)
        .with_context(|| format!("failed to write {}", options.output.display()))?;

    Ok(kb)
}

pub fn run(options: &BuildOptions) -> anyhow::Result<()> {
    let kb = build(options)?;

    println!(
        "Successfully generated RAG knowledge base with {} historical profiles saved to {}!",
        kb.len(),
        options.output.display()
    );
    println!(
        "  {} rows, {} groups, {} below the {}-incident threshold",
        kb.report.input_records,
        kb.report.groups_formed,
        kb.report.groups_below_threshold,
        options.min_incidents
    );

    Ok(())
}
