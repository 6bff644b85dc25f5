use crate::error::{AppError, Result};
use crate::model::ShortenQuery;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use shortcut_core::ShortLink;

/// `POST /shorten-url` — the request body is the raw source URL, the
/// optional `custom-hash` query parameter a caller-chosen code.
pub async fn shorten_url_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortenQuery>,
    body: String,
) -> Result<Json<ShortLink>> {
    let link = state
        .shortener()
        .shorten(&body, query.custom_hash.as_deref())
        .await?;
    Ok(Json(link))
}

/// `GET /url` — lists every mapping, shortcut enriched.
pub async fn list_urls_handler(State(state): State<AppState>) -> Result<Json<Vec<ShortLink>>> {
    Ok(Json(state.shortener().list().await?))
}

/// `GET /url/{id}` — 404 when the id is unknown.
pub async fn get_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortLink>> {
    let link = state
        .shortener()
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("url id={} not found", id)))?;
    Ok(Json(link))
}

/// `GET /redirect/{id}` — 302 to the stored source URL, 404 on a miss.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let target = state
        .shortener()
        .resolve(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("shortened url with id={} not found", id)))?;

    let response = Response::builder()
        .status(StatusCode::FOUND)
        .header(header::LOCATION, target)
        .body(axum::body::Body::empty())
        .expect("statically valid redirect response");
    Ok(response)
}

/// `DELETE /url/{id}` — idempotent; deleting an absent id is a 200.
pub async fn delete_url_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    state.shortener().delete_by_id(&id).await?;
    Ok(StatusCode::OK)
}
