use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

pub const SESSION_HEADER: &str = "x-session-id";

fn session_header(parts: &Parts) -> Option<Uuid> {
    parts
        .headers
        .get(SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
}

/// Session id from the request, if it names a live session.
#[derive(Debug, Clone, Copy)]
pub struct MaybeSession(pub Option<Uuid>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(
            session_header(parts).filter(|id| state.sessions.contains(*id)),
        ))
    }
}

/// A session that currently holds the admin flag.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let id = session_header(parts).ok_or(AppError::Unauthorized)?;
        if !state.sessions.is_authenticated(id) {
            warn!(session_id = %id, "admin route without admin session");
            return Err(AppError::Unauthorized);
        }
        Ok(AdminSession(id))
    }
}
