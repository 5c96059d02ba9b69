use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hard cap on the number of hits requested from the backend.
///
/// There is no paging: every request asks for at most this many documents.
pub const MAX_HITS: u32 = 5000;

/// The entity category being searched.
///
/// Selects both the backend field group the query targets and the fields
/// projected from each hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Address,
    Name,
}

impl Domain {
    /// Name of the backend field group for this domain.
    ///
    /// Derived fields (`_prefix`, `_term`, shingles) hang off this name.
    pub fn field_prefix(&self) -> &'static str {
        match self {
            Domain::Address => "full_address",
            Domain::Name => "full_name",
        }
    }

    /// Source fields rendered into the display string, in output order.
    pub fn field_set(&self) -> &'static [&'static str] {
        match self {
            Domain::Address => &["city", "state", "country"],
            Domain::Name => &["fname", "middleName", "lname"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Address => "address",
            Domain::Name => "name",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "address" => Ok(Domain::Address),
            "name" => Ok(Domain::Name),
            other => Err(UnknownValue {
                param: "searchType",
                value: other.to_string(),
            }),
        }
    }
}

/// The match strategy requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Prefix,
    Infix,
    Term,
}

impl Mode {
    /// The full-text match style used by this mode, if any.
    ///
    /// `Prefix` is a term-level query and has no match style.
    pub fn style(&self) -> Option<Style> {
        match self {
            Mode::Prefix => None,
            Mode::Infix => Some(Style::PhraseMatch),
            Mode::Term => Some(Style::MultiFieldPrefixMatch),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Prefix => "prefix",
            Mode::Infix => "infix",
            Mode::Term => "term",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefix" => Ok(Mode::Prefix),
            "infix" => Ok(Mode::Infix),
            "term" => Ok(Mode::Term),
            other => Err(UnknownValue {
                param: "searchBy",
                value: other.to_string(),
            }),
        }
    }
}

/// Full-text match style derived from a [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Single-field `match` with every token required.
    PhraseMatch,
    /// `multi_match` of type `bool_prefix` over the shingle subfields.
    MultiFieldPrefixMatch,
}

impl Style {
    /// Key of the query clause in the Elasticsearch DSL.
    pub fn clause_name(&self) -> &'static str {
        match self {
            Style::PhraseMatch => "match",
            Style::MultiFieldPrefixMatch => "multi_match",
        }
    }
}

/// A request parameter carried a value outside its closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported {param} value '{value}'")]
pub struct UnknownValue {
    pub param: &'static str,
    pub value: String,
}

/// The body submitted to `<index>/_search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDocument {
    pub size: u32,
    pub query: serde_json::Value,
}
