//! Knowledge base JSON output and atomic file writes

use crate::error::Result;
use disaster_kb_core::KnowledgeEntry;
use serde::Serialize;
use std::path::Path;

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    if let Err(e) = std::fs::write(&temp_path, data) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }
    std::fs::rename(temp_path, path)?;
    Ok(())
}

/// Serialize entries as a top-level JSON array with four-space indentation
pub fn knowledge_base_to_json(entries: &[KnowledgeEntry]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write the knowledge base, replacing any previous file only on success
pub fn write_knowledge_base(path: &Path, entries: &[KnowledgeEntry]) -> Result<()> {
    let json = knowledge_base_to_json(entries)?;
    atomic_write(path, &json)?;
    Ok(())
}

/// Load a previously written knowledge base
pub fn read_knowledge_base(path: &Path) -> Result<Vec<KnowledgeEntry>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
