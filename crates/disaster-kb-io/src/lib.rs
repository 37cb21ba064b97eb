//! Dataset input and knowledge base output

mod error;
mod sink;
mod source;

pub use error::{KbError, Result};
pub use sink::{atomic_write, knowledge_base_to_json, read_knowledge_base, write_knowledge_base};
pub use source::{parse_flag, read_incident_records, read_incident_records_from, ColumnMap};
