use super::types::{Domain, MAX_HITS, Mode, QueryDocument, Style};
use serde_json::{Value, json};

/// Builds the search document for a domain, mode and user text.
///
/// Deterministic: the same inputs always produce an identical document.
pub fn translate(domain: Domain, mode: Mode, text: &str) -> QueryDocument {
    QueryDocument {
        size: MAX_HITS,
        query: query_clause(domain, mode, text),
    }
}

fn query_clause(domain: Domain, mode: Mode, text: &str) -> Value {
    let group = domain.field_prefix();

    match mode.style() {
        None => json!({
            "prefix": {
                (format!("{}_prefix", group)): {
                    "value": text,
                    "case_insensitive": true,
                }
            }
        }),
        Some(style) => json!({ (style.clause_name()): match_clause(style, group, text) }),
    }
}

fn match_clause(style: Style, group: &str, text: &str) -> Value {
    match style {
        Style::MultiFieldPrefixMatch => json!({
            "query": text,
            "type": "bool_prefix",
            "fields": shingle_fields(group),
        }),
        Style::PhraseMatch => json!({
            (group): {
                "query": text,
                "operator": "and",
            }
        }),
    }
}

/// The search-as-you-type field and its 2-gram and 3-gram subfields.
pub fn shingle_fields(group: &str) -> [String; 3] {
    [
        format!("{}_term", group),
        format!("{}_term._2gram", group),
        format!("{}_term._3gram", group),
    ]
}
