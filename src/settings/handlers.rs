use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use tracing::instrument;

use super::dto::{ContactsRequest, PhotosView, PreviewQuery, SavePhotoRequest, Saved, ThemeResponse};
use super::services;
use crate::{
    auth::extractors::AdminSession,
    content::{ContactInfo, PhotoSlot},
    error::AppResult,
    notify::Notification,
    render::{self, PhotoPreview},
    state::AppState,
};

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/photos", get(get_photos))
        .route("/admin/photos/:slot", put(save_photo))
        .route("/admin/photos/:slot/preview", get(preview_photo))
        .route("/admin/contacts", get(get_contacts).put(save_contacts))
}

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/theme", get(get_theme))
        .route("/theme/toggle", post(toggle_theme))
}

#[instrument(skip(state))]
pub async fn get_photos(State(state): State<AppState>, _admin: AdminSession) -> AppResult<Json<PhotosView>> {
    let photos = services::load_photos(&state.store)?;
    Ok(Json(services::photos_view(&photos)))
}

#[instrument(skip(state, body))]
pub async fn save_photo(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(slot): Path<PhotoSlot>,
    Json(body): Json<SavePhotoRequest>,
) -> AppResult<Json<Saved<PhotosView>>> {
    let photos = services::save_photo(&state.store, slot, &body.url)?;
    Ok(Json(Saved {
        value: services::photos_view(&photos),
        notification: Notification::success("Photo saved"),
    }))
}

/// Live preview while the URL is typed; nothing is stored.
#[instrument]
pub async fn preview_photo(
    _admin: AdminSession,
    Path(slot): Path<PhotoSlot>,
    Query(q): Query<PreviewQuery>,
) -> Json<Option<PhotoPreview>> {
    Json(render::photo_preview(slot, &q.url))
}

#[instrument(skip(state))]
pub async fn get_contacts(State(state): State<AppState>, _admin: AdminSession) -> AppResult<Json<ContactInfo>> {
    Ok(Json(services::load_contacts(&state.store)?))
}

#[instrument(skip(state, body))]
pub async fn save_contacts(
    State(state): State<AppState>,
    _admin: AdminSession,
    Json(body): Json<ContactsRequest>,
) -> AppResult<Json<Saved<ContactInfo>>> {
    let contacts = services::save_contacts(&state.store, &body)?;
    Ok(Json(Saved {
        value: contacts,
        notification: Notification::success("Contact details saved"),
    }))
}

#[instrument(skip(state))]
pub async fn get_theme(State(state): State<AppState>) -> AppResult<Json<ThemeResponse>> {
    let theme = services::current_theme(&state.store, state.config.system_theme)?;
    Ok(Json(ThemeResponse { theme }))
}

#[instrument(skip(state))]
pub async fn toggle_theme(State(state): State<AppState>) -> AppResult<Json<ThemeResponse>> {
    let theme = services::toggle_theme(&state.store, state.config.system_theme)?;
    Ok(Json(ThemeResponse { theme }))
}
