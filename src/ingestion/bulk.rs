use super::loader::Document;
use crate::elastic::client::ElasticClient;
use crate::elastic::error::BackendError;
use crate::elastic::types::BulkSummary;
use serde_json::json;

/// Documents per `_bulk` request.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Encodes `docs` as a bulk NDJSON body of `index` actions into `index`.
///
/// The body always ends with a newline, as the bulk API requires.
pub fn bulk_body(index: &str, docs: &[Document]) -> String {
    let action = json!({ "index": { "_index": index } }).to_string();
    let mut body = String::new();
    for doc in docs {
        body.push_str(&action);
        body.push('\n');
        body.push_str(&serde_json::Value::Object(doc.clone()).to_string());
        body.push('\n');
    }
    body
}

/// Bulk-indexes `docs` in chunks of `chunk_size`, stopping at the first failed request.
pub async fn ingest(
    client: &ElasticClient,
    index: &str,
    docs: &[Document],
    chunk_size: usize,
) -> Result<BulkSummary, BackendError> {
    let mut total = BulkSummary::default();

    for (n, chunk) in docs.chunks(chunk_size.max(1)).enumerate() {
        let summary = client.bulk(bulk_body(index, chunk)).await?;
        tracing::info!(
            "Chunk {}: indexed {} documents into '{}' ({} failed)",
            n + 1,
            summary.indexed,
            index,
            summary.failed
        );
        total += summary;
    }

    Ok(total)
}
