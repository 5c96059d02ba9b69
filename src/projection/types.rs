use serde::{Deserialize, Serialize};

/// One line of autocomplete output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedResult {
    pub output: String,
}

impl ProjectedResult {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}
