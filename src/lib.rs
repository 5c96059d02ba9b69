//! Elasticsearch Autocomplete Service Library
//!
//! This library crate defines the modules behind the autocomplete HTTP service and the
//! `csv2es` loader. It serves as the foundation for both binaries.
//!
//! ## Architecture Modules
//! - **`query`**: Pure translation of (domain, mode, text) into an Elasticsearch query document.
//! - **`projection`**: Pure flattening of search hits into `{"output": "..."}` records.
//! - **`elastic`**: The shared REST client for the search backend and its error taxonomy.
//! - **`search`**: Axum router, request validation and HTTP error mapping.
//! - **`ingestion`**: CSV loading and bulk indexing used to seed an index.
//! - **`config`**: Environment and command-line configuration.

pub mod config;
pub mod elastic;
pub mod ingestion;
pub mod projection;
pub mod query;
pub mod search;

#[cfg(test)]
mod testing;
