//! CSV source for raw incident records

use crate::error::{KbError, Result};
use disaster_kb_core::RawIncidentRecord;
use std::io::Read;
use std::path::Path;

/// Header names of the four columns the pipeline reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub region: String,
    pub incident_type: String,
    pub ia_approved: String,
    pub pa_approved: String,
}

impl ColumnMap {
    /// Column names of the FEMA disaster declarations summary export
    pub fn new() -> Self {
        Self {
            region: "state".to_string(),
            incident_type: "incidentType".to_string(),
            ia_approved: "iaProgramDeclared".to_string(),
            pa_approved: "paProgramDeclared".to_string(),
        }
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    region: usize,
    incident_type: usize,
    ia_approved: usize,
    pa_approved: usize,
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| KbError::MissingColumn {
            column: name.to_string(),
        })
}

impl ColumnIndices {
    fn resolve(headers: &csv::StringRecord, columns: &ColumnMap) -> Result<Self> {
        Ok(Self {
            region: find_column(headers, &columns.region)?,
            incident_type: find_column(headers, &columns.incident_type)?,
            ia_approved: find_column(headers, &columns.ia_approved)?,
            pa_approved: find_column(headers, &columns.pa_approved)?,
        })
    }
}

/// Parse a boolean-like cell. Empty or unrecognized values are missing.
pub fn parse_flag(raw: &str) -> Option<bool> {
    let value = raw.trim().to_ascii_lowercase();
    match value.as_str() {
        "" => None,
        "1" | "true" | "t" | "yes" | "y" => Some(true),
        "0" | "false" | "f" | "no" | "n" => Some(false),
        other => other.parse::<f64>().ok().filter(|v| !v.is_nan()).map(|v| v != 0.0),
    }
}

fn text_cell(row: &csv::StringRecord, idx: usize) -> Option<String> {
    row.get(idx)
        .filter(|cell| !cell.trim().is_empty())
        .map(str::to_string)
}

fn flag_cell(row: &csv::StringRecord, idx: usize) -> Option<bool> {
    row.get(idx).and_then(parse_flag)
}

/// Read every row from a headered CSV stream
pub fn read_incident_records_from<R: Read>(
    reader: R,
    columns: &ColumnMap,
) -> Result<Vec<RawIncidentRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let indices = ColumnIndices::resolve(csv_reader.headers()?, columns)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        records.push(RawIncidentRecord {
            region: text_cell(&row, indices.region),
            incident_type: text_cell(&row, indices.incident_type),
            ia_approved: flag_cell(&row, indices.ia_approved),
            pa_approved: flag_cell(&row, indices.pa_approved),
        });
    }

    Ok(records)
}

/// Read every row from a CSV file on disk
pub fn read_incident_records(path: &Path, columns: &ColumnMap) -> Result<Vec<RawIncidentRecord>> {
    let file = std::fs::File::open(path)?;
    read_incident_records_from(std::io::BufReader::new(file), columns)
}
