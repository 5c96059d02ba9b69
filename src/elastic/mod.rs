//! Elasticsearch Backend Module
//!
//! The service's only outbound dependency. Query documents are submitted over the
//! backend's REST/JSON API and responses are decoded into typed envelopes.
//!
//! ## Error Model
//! Transport failures, error envelopes and undecodable bodies each surface as a distinct
//! [`error::BackendError`] variant so the HTTP layer can map them to proper statuses.
//!
//! ## Submodules
//! - **`client`**: Shared `reqwest`-based client (`_search`, `_bulk`, ping).
//! - **`error`**: Backend failure taxonomy.
//! - **`types`**: Response DTOs (`SearchResponse`, `Hit`, `BulkResponse`).

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;
