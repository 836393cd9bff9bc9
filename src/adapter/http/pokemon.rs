//! Catalog browsing endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use super::error::ApiResult;
use super::AppState;
use crate::domain::PokemonPage;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    limit: Option<u32>,
    offset: Option<u32>,
    q: Option<String>,
}

/// `GET /api/pokemon` - paged catalog listing with optional search.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<PokemonPage>> {
    let page = state
        .browser
        .page(params.limit, params.offset, params.q.as_deref())
        .await?;
    Ok(Json(page))
}

/// `GET /api/pokemon/{name}` - upstream record passthrough.
pub async fn detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Value>> {
    let record = state.browser.detail(&name).await?;
    Ok(Json(record))
}
