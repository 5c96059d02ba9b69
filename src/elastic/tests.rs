//! Elastic Module Tests
//!
//! Exercises the REST client against a fake backend served by a local axum listener.
//!
//! ## Test Scopes
//! - **Wire Types**: Decoding of search, error and bulk envelopes across backend versions.
//! - **Search**: Request path, parameters and body; success and each failure class.
//! - **Bulk / Ping**: NDJSON submission and reachability checks.

#[cfg(test)]
mod tests {
    use crate::elastic::client::error_from_body;
    use crate::elastic::error::BackendError;
    use crate::elastic::types::{BulkResponse, ErrorEnvelope, Hit, SearchResponse, TotalHits};
    use crate::query::translator::translate;
    use crate::query::types::{Domain, Mode};
    use crate::testing::{client_for, spawn_backend, unreachable_url};
    use axum::extract::{Path, RawQuery, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use reqwest::StatusCode as ReqwestStatus;
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone)]
    struct Captured {
        index: String,
        query_string: Option<String>,
        body: Value,
    }

    type Captures = Arc<Mutex<Vec<Captured>>>;

    fn search_body() -> Value {
        json!({
            "took": 3,
            "timed_out": false,
            "hits": {
                "total": {"value": 2, "relation": "eq"},
                "max_score": 1.0,
                "hits": [
                    {"_index": "places", "_id": "1", "_score": 1.0,
                     "_source": {"city": "Austin", "state": "TX", "country": "US"}},
                    {"_index": "places", "_id": "2", "_score": 0.5,
                     "_source": {"city": "Boston", "state": "MA", "country": "US"}}
                ]
            }
        })
    }

    async fn recording_search(
        State(captures): State<Captures>,
        Path(index): Path<String>,
        RawQuery(query_string): RawQuery,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        captures.lock().unwrap().push(Captured {
            index,
            query_string,
            body,
        });
        Json(search_body())
    }

    // ============================================================
    // WIRE TYPE TESTS
    // ============================================================

    #[test]
    fn test_search_response_decodes_hits() {
        let response: SearchResponse = serde_json::from_value(search_body()).unwrap();

        assert_eq!(response.took, 3);
        assert_eq!(response.hits.total_value(), 2);
        assert_eq!(response.hits.hits.len(), 2);
        assert_eq!(response.hits.hits[0].id.as_deref(), Some("1"));
        assert_eq!(response.hits.hits[1].source["city"], json!("Boston"));
    }

    #[test]
    fn test_legacy_integer_total() {
        let response: SearchResponse =
            serde_json::from_value(json!({"hits": {"total": 7, "hits": []}})).unwrap();

        assert_eq!(response.hits.total, Some(TotalHits::Count(7)));
        assert_eq!(response.hits.total_value(), 7);
    }

    #[test]
    fn test_untracked_total_falls_back_to_hit_count() {
        let response: SearchResponse =
            serde_json::from_value(json!({"hits": {"hits": [{"_source": {}}]}})).unwrap();
        assert_eq!(response.hits.total_value(), 1);
    }

    #[test]
    fn test_missing_hits_is_decode_error() {
        let result = serde_json::from_value::<SearchResponse>(json!({"took": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_hit_without_source_has_empty_map() {
        let hit: Hit = serde_json::from_value(json!({"_id": "x"})).unwrap();
        assert!(hit.source.is_empty());
    }

    #[test]
    fn test_hit_from_source_ignores_non_objects() {
        assert!(Hit::from_source(json!("text")).source.is_empty());
        assert_eq!(Hit::from_source(json!({"a": 1})).source.len(), 1);
    }

    #[test]
    fn test_error_envelope_object_and_string_forms() {
        let modern: ErrorEnvelope = serde_json::from_value(json!({
            "error": {"type": "index_not_found_exception", "reason": "no such index [x]"},
            "status": 404
        }))
        .unwrap();
        assert_eq!(
            modern.describe(),
            (
                "index_not_found_exception".to_string(),
                "no such index [x]".to_string()
            )
        );
        assert_eq!(modern.status, Some(404));

        let legacy: ErrorEnvelope =
            serde_json::from_value(json!({"error": "IndexMissingException[[x] missing]"})).unwrap();
        assert_eq!(legacy.describe().0, "error");
    }

    #[test]
    fn test_error_from_plain_text_body() {
        let err = error_from_body(ReqwestStatus::BAD_GATEWAY, b" upstream down \n");

        match err {
            BackendError::Query {
                status,
                kind,
                reason,
            } => {
                assert_eq!(status, 502);
                assert_eq!(kind, "http_error");
                assert_eq!(reason, "upstream down");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_bulk_response_summary_counts_failures() {
        let response: BulkResponse = serde_json::from_value(json!({
            "took": 5,
            "errors": true,
            "items": [
                {"index": {"_id": "1", "status": 201}},
                {"index": {"_id": "2", "status": 400, "error": {"type": "mapper_parsing_exception"}}},
                {"index": {"_id": "3", "status": 201}}
            ]
        }))
        .unwrap();

        let summary = response.summary();
        assert_eq!(summary.indexed, 2);
        assert_eq!(summary.failed, 1);
    }

    // ============================================================
    // SEARCH TESTS
    // ============================================================

    #[tokio::test]
    async fn test_search_posts_query_document() {
        let captures: Captures = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/:index/_search", post(recording_search))
            .with_state(captures.clone());
        let client = client_for(&spawn_backend(app).await);

        let query = translate(Domain::Address, Mode::Prefix, "Aus");
        let response = client.search("places", &query).await.unwrap();

        assert_eq!(response.hits.hits.len(), 2);

        let captured = captures.lock().unwrap()[0].clone();
        assert_eq!(captured.index, "places");
        assert_eq!(captured.query_string.as_deref(), Some("track_total_hits=true"));
        assert_eq!(captured.body["size"], json!(5000));
        assert_eq!(captured.body["query"], query.query);
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_is_trimmed() {
        let captures: Captures = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/:index/_search", post(recording_search))
            .with_state(captures.clone());
        let base = spawn_backend(app).await;
        let client = client_for(&format!("{}/", base));

        assert_eq!(client.base_url(), base);
        let query = translate(Domain::Name, Mode::Term, "jo");
        assert!(client.search("people", &query).await.is_ok());
    }

    #[tokio::test]
    async fn test_search_error_envelope_is_query_error() {
        let app = Router::new().route(
            "/:index/_search",
            post(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "error": {"type": "index_not_found_exception", "reason": "no such index [missing]"},
                        "status": 404
                    })),
                )
            }),
        );
        let client = client_for(&spawn_backend(app).await);

        let query = translate(Domain::Address, Mode::Infix, "x");
        let err = client.search("missing", &query).await.unwrap_err();

        assert_eq!(err.code(), "backend_query_error");
        assert_eq!(
            err.to_string(),
            "[404] index_not_found_exception: no such index [missing]"
        );
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let app = Router::new().route(
            "/:index/_search",
            post(|| async { Json(json!({"took": 1, "shards": {}})) }),
        );
        let client = client_for(&spawn_backend(app).await);

        let query = translate(Domain::Address, Mode::Prefix, "x");
        let err = client.search("places", &query).await.unwrap_err();

        assert!(matches!(err, BackendError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_search_unreachable_backend() {
        let client = client_for(&unreachable_url().await);

        let query = translate(Domain::Name, Mode::Prefix, "x");
        let err = client.search("people", &query).await.unwrap_err();

        assert!(matches!(err, BackendError::Unavailable(_)));
        assert_eq!(err.code(), "backend_unavailable");
    }

    // ============================================================
    // BULK & PING TESTS
    // ============================================================

    #[tokio::test]
    async fn test_bulk_sends_ndjson() {
        let received: Arc<Mutex<Option<(String, String)>>> = Arc::new(Mutex::new(None));
        let sink = received.clone();
        let app = Router::new().route(
            "/_bulk",
            post(move |headers: HeaderMap, body: String| {
                let sink = sink.clone();
                async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    *sink.lock().unwrap() = Some((content_type, body));
                    Json(json!({
                        "took": 1,
                        "errors": false,
                        "items": [{"index": {"status": 201}}]
                    }))
                }
            }),
        );
        let client = client_for(&spawn_backend(app).await);

        let body = "{\"index\":{\"_index\":\"t\"}}\n{\"a\":\"1\"}\n".to_string();
        let summary = client.bulk(body.clone()).await.unwrap();

        assert_eq!(summary.indexed, 1);
        assert_eq!(summary.failed, 0);
        let (content_type, sent) = received.lock().unwrap().clone().unwrap();
        assert_eq!(content_type, "application/x-ndjson");
        assert_eq!(sent, body);
    }

    #[tokio::test]
    async fn test_ping() {
        let app = Router::new().route("/", get(|| async { Json(json!({"tagline": "You Know, for Search"})) }));
        let client = client_for(&spawn_backend(app).await);
        assert!(client.ping().await.is_ok());

        let down = client_for(&unreachable_url().await);
        assert!(down.ping().await.is_err());
    }
}
