use crate::error::{ServerError, ServerResult};
use crate::middleware::CurrentUser;
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use items::ItemId;
use std::sync::Arc;

/// Match suggestions for the current user's LOST items.
///
/// Returns a JSON array of match results, best first, capped at the
/// configured `max_suggestions`.
pub async fn suggestions(
    State(state): State<Arc<ServerState>>,
    CurrentUser(user): CurrentUser,
) -> ServerResult<impl IntoResponse> {
    let matches = state.matcher.find_potential_matches(user)?;
    Ok(Json(matches))
}

/// Matches for a single item.
///
/// An unknown id answers `200` with an empty array rather than `404`.
pub async fn item_matches(
    State(state): State<Arc<ServerState>>,
    Path(item_id): Path<u64>,
) -> ServerResult<impl IntoResponse> {
    let matches = state.matcher.find_matches_for_item(ItemId(item_id))?;
    Ok(Json(matches))
}

/// Per-signal explanation of how two stored items score against each other.
pub async fn compare_items(
    State(state): State<Arc<ServerState>>,
    Path((first_id, second_id)): Path<(u64, u64)>,
) -> ServerResult<impl IntoResponse> {
    let breakdown = state
        .matcher
        .compare(ItemId(first_id), ItemId(second_id))?
        .ok_or(ServerError::NotFound)?;
    Ok(Json(breakdown))
}
