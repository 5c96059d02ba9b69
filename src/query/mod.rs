//! Query Translation Module
//!
//! Turns an autocomplete request into the JSON query document sent to Elasticsearch.
//!
//! ## Overview
//! The mapping is a pure function of three inputs: the search domain (which field group
//! is targeted), the search mode (which query shape is used) and the raw text typed by
//! the user. No state is kept between calls.
//!
//! ## Query Shapes
//! - **Prefix**: case-insensitive `prefix` query on the `<group>_prefix` keyword field.
//! - **Infix**: `match` query on the analyzed `<group>` field, all tokens required.
//! - **Term**: `multi_match` of type `bool_prefix` over the `<group>_term` search-as-you-type
//!   field and its `_2gram` / `_3gram` shingle subfields.
//!
//! ## Submodules
//! - **`types`**: Closed enums for domain, mode and style, plus the `QueryDocument` DTO.
//! - **`translator`**: The translation function itself.

pub mod translator;
pub mod types;
