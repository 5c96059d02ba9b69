//! Result Projection Module
//!
//! Reshapes the backend hit list into the flat `{"output": "..."}` records returned to
//! autocomplete clients.
//!
//! Each hit becomes one record whose `output` joins the requested `_source` fields with
//! commas, in field order. Hit order and count are preserved.

pub mod projector;
pub mod types;
