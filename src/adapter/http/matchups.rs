//! Matchup resolution endpoint.

use axum::extract::State;
use axum::http::header::{HeaderName, HeaderValue, CACHE_CONTROL};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::error::ApiResult;
use super::AppState;

/// Shared-cache lifetime advertised on successful matchup responses.
const CACHE_CONTROL_VALUE: &str = "s-maxage=86400, stale-while-revalidate=3600";

/// Provenance header naming the tier that produced the body.
const SOURCE_HEADER: &str = "x-matchup-source";

#[derive(Debug, Deserialize)]
pub struct MatchupRequest {
    #[serde(default)]
    name: Option<String>,
}

/// `POST /api/matchups` - resolve win/loss suggestions for a subject.
pub async fn resolve(
    State(state): State<AppState>,
    Json(request): Json<MatchupRequest>,
) -> ApiResult<Response> {
    let name = request.name.unwrap_or_default();
    let matchup = state.resolver.resolve(&name).await?;

    let source = matchup.source;
    let mut response = Json(matchup).into_response();
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL_VALUE));
    if let Some(source) = source {
        response.headers_mut().insert(
            HeaderName::from_static(SOURCE_HEADER),
            HeaderValue::from_static(source.as_str()),
        );
    }

    Ok(response)
}
