use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use super::dto::{BrowseQuery, ContactMessage};
use super::services::{validate_contact_message, PublicBrowser};
use crate::{error::AppResult, notify::Notification, render::ProjectGrid, state::AppState};

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(browse_projects))
        .route("/contact", post(submit_contact))
}

/// Each request is a fresh generation: the store is re-read every time.
/// "Load more" is the client asking again with a larger `limit`.
#[instrument(skip(state))]
pub async fn browse_projects(
    State(state): State<AppState>,
    query: Result<Query<BrowseQuery>, QueryRejection>,
) -> AppResult<Json<ProjectGrid>> {
    let Query(q) = query?;
    let mut browser = PublicBrowser::with_view(q.filter, q.limit);
    let grid = browser.regenerate(&state.store)?.clone();
    Ok(Json(grid))
}

#[instrument(skip(payload))]
pub async fn submit_contact(Json(payload): Json<ContactMessage>) -> AppResult<Json<Notification>> {
    Ok(Json(validate_contact_message(&payload)?))
}
