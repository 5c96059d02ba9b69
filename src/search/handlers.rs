use super::error::ApiError;
use super::types::{AutocompleteParams, PingResponse};
use crate::elastic::client::ElasticClient;
use crate::projection::projector::project;
use crate::projection::types::ProjectedResult;
use crate::query::translator::translate;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_autocomplete(
    Extension(client): Extension<Arc<ElasticClient>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<ProjectedResult>>, ApiError> {
    let request = AutocompleteParams::from_pairs(pairs).validate()?;

    tracing::info!(
        "Autocomplete on '{}': searchBy={} searchType={}",
        request.index,
        request.mode,
        request.domain
    );
    if !request.requested_fields.is_empty() {
        tracing::debug!(
            "Ignoring requested fields {:?}, projecting {:?}",
            request.requested_fields,
            request.domain.field_set()
        );
    }

    let query = translate(request.domain, request.mode, &request.text);
    let response = client.search(&request.index, &query).await?;

    Ok(Json(project(
        &response.hits.hits,
        request.domain.field_set(),
    )))
}

pub async fn handle_ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "success".to_string(),
    })
}
