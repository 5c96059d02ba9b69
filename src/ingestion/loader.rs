use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

/// A document ready to be indexed.
pub type Document = Map<String, Value>;

/// Reads CSV records into documents keyed by the header row.
///
/// Every cell is kept as a JSON string; index mappings decide the final field types.
pub fn read_csv_documents<R: Read>(reader: R) -> Result<Vec<Document>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .context("failed to read CSV header row")?
        .clone();

    let mut documents = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record.with_context(|| format!("invalid CSV record {}", line + 1))?;
        let document: Document = headers
            .iter()
            .zip(record.iter())
            .map(|(field, value)| (field.to_string(), Value::String(value.to_string())))
            .collect();
        documents.push(document);
    }

    Ok(documents)
}

pub fn read_csv_file(path: &Path) -> Result<Vec<Document>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    read_csv_documents(file)
}
