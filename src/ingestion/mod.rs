//! Ingestion Module
//!
//! Loads tabular source data into an Elasticsearch index so the autocomplete endpoint has
//! something to search.
//!
//! ## Workflow
//! 1. **Read**: Parse a CSV file; the header row names the document fields.
//! 2. **Encode**: Turn each row into a JSON document and pair it with a bulk `index` action.
//! 3. **Submit**: Send the NDJSON body to `_bulk` in fixed-size chunks.

pub mod bulk;
pub mod loader;
