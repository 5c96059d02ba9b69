//! Elasticsearch Wire Types
//!
//! Response envelopes decoded from the backend's REST API. Only the parts the service
//! reads are modelled; unknown keys are ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a successful `_search` response.
///
/// `hits.hits` is required: a body without it is reported as malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub timed_out: bool,
    pub hits: HitsEnvelope,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitsEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<TotalHits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    pub hits: Vec<Hit>,
}

impl HitsEnvelope {
    /// Total matching documents, or the returned hit count when the backend did not track totals.
    pub fn total_value(&self) -> u64 {
        match &self.total {
            Some(total) => total.value(),
            None => self.hits.len() as u64,
        }
    }
}

/// `hits.total`: an object since Elasticsearch 7, a bare integer before.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TotalHits {
    Count(u64),
    Tracked {
        value: u64,
        #[serde(default)]
        relation: String,
    },
}

impl TotalHits {
    pub fn value(&self) -> u64 {
        match self {
            TotalHits::Count(value) => *value,
            TotalHits::Tracked { value, .. } => *value,
        }
    }
}

/// A single search hit. The projector reads only `source`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "_index", default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "_score", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: Map<String, Value>,
}

impl Hit {
    pub fn from_source(source: Value) -> Self {
        let source = match source {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            source,
            ..Self::default()
        }
    }
}

/// Error body returned with non-2xx statuses.
///
/// `error` is an object with `type` / `reason` on current versions and a plain string on
/// very old ones.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Value,
    #[serde(default)]
    pub status: Option<u16>,
}

impl ErrorEnvelope {
    /// Returns `(type, reason)`.
    pub fn describe(&self) -> (String, String) {
        match &self.error {
            Value::Object(map) => {
                let field = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_str)
                        .unwrap_or("unknown")
                        .to_string()
                };
                (field("type"), field("reason"))
            }
            Value::String(reason) => ("error".to_string(), reason.clone()),
            other => ("error".to_string(), other.to_string()),
        }
    }
}

/// Body of a `_bulk` response.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub took: u64,
    pub errors: bool,
    #[serde(default)]
    pub items: Vec<Map<String, Value>>,
}

impl BulkResponse {
    pub fn summary(&self) -> BulkSummary {
        let failed = self
            .items
            .iter()
            .filter(|item| item.values().any(|action| action.get("error").is_some()))
            .count();

        BulkSummary {
            indexed: self.items.len() - failed,
            failed,
        }
    }
}

/// Outcome of one or more bulk requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BulkSummary {
    pub indexed: usize,
    pub failed: usize,
}

impl std::ops::AddAssign for BulkSummary {
    fn add_assign(&mut self, other: Self) {
        self.indexed += other.indexed;
        self.failed += other.failed;
    }
}
