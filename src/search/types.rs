//! Autocomplete API Types
//!
//! Query parameters accepted by `/autocomplete/search` and the validated request built
//! from them.

use crate::query::types::{Domain, Mode, UnknownValue};
use serde::{Deserialize, Serialize};

/// Payload returned (with `200 OK`) when a required parameter is missing.
pub const MISSING_PARAMS_MESSAGE: &str = "index_name, text, searchBy, searchType are required";

/// Raw query string parameters. Every field is optional at this stage.
#[derive(Debug, Default)]
pub struct AutocompleteParams {
    pub index_name: Option<String>,
    pub text: Option<String>,
    pub search_by: Option<String>,
    pub search_type: Option<String>,
    pub fields: Option<String>,
}

/// A request that passed validation and can be translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub index: String,
    pub text: String,
    pub mode: Mode,
    pub domain: Domain,
    /// Fields named by the caller. Not used for projection: the domain's field set is.
    pub requested_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", MISSING_PARAMS_MESSAGE)]
    Missing,
    #[error(transparent)]
    Unknown(#[from] UnknownValue),
    #[error("invalid index_name '{0}'")]
    InvalidIndex(String),
}

impl AutocompleteParams {
    /// Collects parameters from decoded query pairs.
    ///
    /// A repeated parameter keeps its first value; unknown parameters are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "index_name" => &mut params.index_name,
                "text" => &mut params.text,
                "searchBy" => &mut params.search_by,
                "searchType" => &mut params.search_type,
                "fields" => &mut params.fields,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Checks presence of the four required parameters, then parses the enums.
    pub fn validate(self) -> Result<SearchRequest, ValidationError> {
        let (Some(index), Some(text), Some(search_by), Some(search_type)) = (
            non_empty(self.index_name),
            non_empty(self.text),
            non_empty(self.search_by),
            non_empty(self.search_type),
        ) else {
            return Err(ValidationError::Missing);
        };

        // Dot segments would be normalized out of the backend URL, widening the search
        if index == "." || index == ".." {
            return Err(ValidationError::InvalidIndex(index));
        }

        Ok(SearchRequest {
            index,
            text,
            mode: search_by.parse()?,
            domain: search_type.parse()?,
            requested_fields: split_fields(self.fields.as_deref()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn split_fields(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub status: String,
}

/// Body returned for backend failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}
