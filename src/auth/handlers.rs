use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{
        dto::{ChangePasswordRequest, LoginRequest, SessionResponse},
        extractors::{AdminSession, MaybeSession},
        services,
    },
    error::{AppError, AppResult},
    notify::Notification,
    state::AppState,
};

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(open_session))
        .route("/admin/login", post(login))
        .route("/admin/logout", post(logout))
        .route("/admin/session", get(session_status))
        .route("/admin/password", put(change_password))
}

#[instrument(skip(state))]
pub async fn open_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        session_id: state.sessions.open(),
        authenticated: false,
    })
}

/// Logs the session in, opening one first if the request carries none.
/// A session opened here is closed again when the password is wrong.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<SessionResponse>> {
    let opened = session.is_none();
    let session_id = session.unwrap_or_else(|| state.sessions.open());
    let outcome = state
        .sessions
        .with_session(session_id, |s| -> AppResult<()> {
            services::login(&state.store, &s.flag, &payload.password)?;
            s.workspace.refresh(&state.store)?;
            Ok(())
        })
        .ok_or(AppError::Unauthorized)?;

    if let Err(err) = outcome {
        if opened {
            state.sessions.close(session_id);
        }
        return Err(err);
    }

    Ok(Json(SessionResponse {
        session_id,
        authenticated: true,
    }))
}

/// Clears the flag and forgets the session.
#[instrument(skip(state))]
pub async fn logout(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> AppResult<Json<Notification>> {
    if let Some(id) = session {
        state
            .sessions
            .with_session(id, |s| services::logout(&s.flag))
            .transpose()?;
        state.sessions.close(id);
    }
    Ok(Json(Notification::info("Logged out")))
}

#[instrument(skip(state))]
pub async fn session_status(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> AppResult<Json<SessionResponse>> {
    let session_id = session.ok_or(AppError::Unauthorized)?;
    Ok(Json(SessionResponse {
        session_id,
        authenticated: state.sessions.is_authenticated(session_id),
    }))
}

#[instrument(skip(state, payload))]
pub async fn change_password(
    State(state): State<AppState>,
    _admin: AdminSession,
    Json(payload): Json<ChangePasswordRequest>,
) -> AppResult<Json<Notification>> {
    Ok(Json(services::change_password(&state.store, &payload)?))
}
