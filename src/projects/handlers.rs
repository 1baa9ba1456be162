use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use super::dto::{AdminOverview, DeletePrompt, EditorResponse, ProjectForm};
use super::services::{AdminWorkspace, Editor};
use crate::{
    auth::extractors::AdminSession,
    content::{ContentStore, ProjectId},
    error::{AppError, AppResult},
    notify::Notification,
    state::AppState,
};

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/projects", get(list_projects))
        .route("/admin/projects/:id/edit", post(open_edit))
        .route("/admin/projects/:id/delete", post(request_delete))
        .route("/admin/editor", post(open_create))
        .route("/admin/editor/submit", post(submit_editor))
        .route("/admin/editor/close", post(close_editor))
        .route("/admin/deletion/confirm", post(confirm_delete))
        .route("/admin/deletion/cancel", post(cancel_delete))
}

/// Runs `f` against the caller's workspace on the blocking pool, since the
/// store may touch the disk. Only that session's lock is held meanwhile.
async fn with_workspace<R, F>(state: AppState, session: Uuid, f: F) -> AppResult<R>
where
    R: Send + 'static,
    F: FnOnce(&mut AdminWorkspace, &ContentStore) -> AppResult<R> + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        state
            .sessions
            .with_session(session, |s| f(&mut s.workspace, &state.store))
            .ok_or(AppError::Unauthorized)?
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("workspace task failed: {e}")))?
}

fn overview(ws: &AdminWorkspace, notification: Option<Notification>) -> AdminOverview {
    AdminOverview {
        list: ws.list_view(),
        stats: ws.stats(),
        pending_delete: ws.pending_delete(),
        notification,
    }
}

fn editing(ws: &AdminWorkspace) -> Option<ProjectId> {
    match ws.editor() {
        Editor::Editing(id) => Some(id),
        Editor::Creating | Editor::Closed => None,
    }
}

/// Showing the list re-reads the store.
#[instrument(skip(state))]
pub async fn list_projects(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> AppResult<Json<AdminOverview>> {
    with_workspace(state, session, move |ws, store| {
        ws.refresh(store)?;
        Ok(Json(overview(ws, None)))
    })
    .await
}

#[instrument(skip(state))]
pub async fn open_create(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> AppResult<Json<EditorResponse>> {
    with_workspace(state, session, move |ws, _| {
        let form = ws.open_create();
        Ok(Json(EditorResponse { editing: None, form }))
    })
    .await
}

#[instrument(skip(state))]
pub async fn open_edit(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    Path(id): Path<ProjectId>,
) -> AppResult<Json<EditorResponse>> {
    with_workspace(state, session, move |ws, _| {
        let form = ws.open_edit(id)?;
        Ok(Json(EditorResponse {
            editing: editing(ws),
            form,
        }))
    })
    .await
}

#[instrument(skip(state, form))]
pub async fn submit_editor(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    Json(form): Json<ProjectForm>,
) -> AppResult<Json<AdminOverview>> {
    with_workspace(state, session, move |ws, store| {
        ws.submit(store, form)?;
        Ok(Json(overview(ws, Some(Notification::success("Project saved")))))
    })
    .await
}

#[instrument(skip(state))]
pub async fn close_editor(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> AppResult<Json<AdminOverview>> {
    with_workspace(state, session, move |ws, _| {
        ws.close_editor();
        Ok(Json(overview(ws, None)))
    })
    .await
}

#[instrument(skip(state))]
pub async fn request_delete(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    Path(id): Path<ProjectId>,
) -> AppResult<Json<DeletePrompt>> {
    with_workspace(state, session, move |ws, _| {
        ws.request_delete(id);
        Ok(Json(DeletePrompt {
            pending_delete: ws.pending_delete(),
        }))
    })
    .await
}

#[instrument(skip(state))]
pub async fn confirm_delete(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> AppResult<Json<AdminOverview>> {
    with_workspace(state, session, move |ws, store| {
        let removed = ws.confirm_delete(store)?;
        let notification = removed.then(|| Notification::success("Project deleted"));
        Ok(Json(overview(ws, notification)))
    })
    .await
}

#[instrument(skip(state))]
pub async fn cancel_delete(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
) -> AppResult<Json<DeletePrompt>> {
    with_workspace(state, session, move |ws, _| {
        ws.cancel_delete();
        Ok(Json(DeletePrompt { pending_delete: None }))
    })
    .await
}
