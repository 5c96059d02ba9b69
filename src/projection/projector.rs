use super::types::ProjectedResult;
use crate::elastic::types::Hit;
use serde_json::Value;

/// Rendering of a field that is null or absent from `_source`.
pub const MISSING_VALUE: &str = "<nil>";

const SEPARATOR: &str = ",";

/// Projects each hit onto `fields`, one result per hit, in hit order.
pub fn project<S: AsRef<str>>(hits: &[Hit], fields: &[S]) -> Vec<ProjectedResult> {
    hits.iter()
        .map(|hit| ProjectedResult {
            output: render_hit(hit, fields),
        })
        .collect()
}

fn render_hit<S: AsRef<str>>(hit: &Hit, fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| render_value(hit.source.get(field.as_ref())))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Natural text form of a `_source` value.
pub fn render_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_VALUE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => {
            let inner: Vec<String> = items.iter().map(|v| render_value(Some(v))).collect();
            format!("[{}]", inner.join(" "))
        }
        Some(obj @ Value::Object(_)) => obj.to_string(),
    }
}
