use crate::error::{ServerError, ServerResult};
use crate::middleware::CurrentUser;
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use items::{ItemId, ItemStatus, NewItem};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for listing items
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    /// Only items in this status (`LOST`, `FOUND`, ...)
    #[serde(default)]
    pub status: Option<ItemStatus>,
}

/// Report a lost or found item on behalf of the current user.
///
/// The store assigns the id, and `createdAt` defaults to the time of the
/// report. Any `reportedBy` in the body is replaced by the caller.
pub async fn create_item(
    State(state): State<Arc<ServerState>>,
    CurrentUser(user): CurrentUser,
    Json(mut report): Json<NewItem>,
) -> ServerResult<impl IntoResponse> {
    if report.name.trim().is_empty() {
        return Err(ServerError::BadRequest("name must not be blank".to_string()));
    }
    if report.latitude.is_some() != report.longitude.is_some() {
        return Err(ServerError::BadRequest(
            "latitude and longitude must be given together".to_string(),
        ));
    }

    report.reported_by = Some(user);
    let item = state.store.insert(report)?;
    tracing::info!(item_id = %item.id, status = %item.status, user = %user, "item reported");

    Ok((StatusCode::CREATED, Json(item)))
}

/// Fetch a single item
pub async fn get_item(
    State(state): State<Arc<ServerState>>,
    Path(item_id): Path<u64>,
) -> ServerResult<impl IntoResponse> {
    let id = ItemId(item_id);
    let item = state.store.get(id)?.ok_or(ServerError::ItemNotFound(id))?;
    Ok(Json(item))
}

/// List items, optionally filtered by status
pub async fn list_items(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ListItemsQuery>,
) -> ServerResult<impl IntoResponse> {
    let items = match query.status {
        Some(status) => state.store.find_by_status(status)?,
        None => state.store.all()?,
    };
    Ok(Json(items))
}
