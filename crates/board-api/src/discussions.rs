//! JSON endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use board_types::api::DiscussionUpdate;
use board_types::models::{Discussion, DiscussionPatch};
use tracing::warn;

use crate::error::ApiError;
use crate::state::{AppState, with_store};

pub const DELETE_NOT_FOUND: &str = "Discussion not found, fail to delete.";
pub const EDIT_NOT_FOUND: &str = "Target discussion not found";

pub async fn hello() -> Json<&'static str> {
    Json("DISCUSSION BOARD")
}

pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Discussion>>, ApiError> {
    let discussions = with_store(&state, |s| s.list_all()).await?;
    Ok(Json(discussions))
}

pub async fn my_discussions(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Discussion>>, ApiError> {
    let discussions = with_store(&state, move |s| s.list_by_author(&email)).await?;
    Ok(Json(discussions))
}

pub async fn delete_discussion(
    State(state): State<AppState>,
    Path((_email, discussion_id)): Path<(String, i64)>,
) -> Result<Json<&'static str>, ApiError> {
    remove(&state, discussion_id).await?;
    Ok(Json("deleted"))
}

/// Partial update. A `discussion_id` in the body takes precedence over the
/// one in the path.
pub async fn edit_discussion(
    State(state): State<AppState>,
    Path((_email, discussion_id)): Path<(String, i64)>,
    Json(req): Json<DiscussionUpdate>,
) -> Result<Json<&'static str>, ApiError> {
    let target = req.discussion_id.unwrap_or(discussion_id);
    if let Some(ts) = req.timestamp {
        warn!(
            "Ignoring timestamp {} on edit of discussion {}: creation time is immutable",
            ts, target
        );
    }

    amend(&state, target, req.into_patch()).await?;
    Ok(Json("updated"))
}

pub(crate) async fn remove(state: &AppState, id: i64) -> Result<(), ApiError> {
    with_store(state, move |s| s.delete(id))
        .await
        .map_err(|e| e.with_detail(DELETE_NOT_FOUND))
}

pub(crate) async fn amend(
    state: &AppState,
    id: i64,
    patch: DiscussionPatch,
) -> Result<Discussion, ApiError> {
    with_store(state, move |s| s.update(id, patch))
        .await
        .map_err(|e| e.with_detail(EDIT_NOT_FOUND))
}
