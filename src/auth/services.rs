use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use super::dto::ChangePasswordRequest;
use super::session::SessionFlag;
use crate::content::ContentStore;
use crate::error::{AppError, AppResult};
use crate::notify::Notification;

pub const MIN_PASSWORD_LEN: usize = 4;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Plain string comparison against the stored (or built-in) password.
pub fn login(store: &ContentStore, flag: &SessionFlag, password: &str) -> AppResult<()> {
    let expected = store.admin_password()?;
    if password != expected {
        warn!("admin login rejected");
        return Err(AppError::InvalidCredentials);
    }
    flag.set_authenticated()?;
    info!("admin logged in");
    Ok(())
}

pub fn logout(flag: &SessionFlag) -> anyhow::Result<()> {
    flag.clear()?;
    info!("admin logged out");
    Ok(())
}

/// Overwrites the stored password. The caller's session is left as it is.
pub fn change_password(store: &ContentStore, req: &ChangePasswordRequest) -> AppResult<Notification> {
    if req.current_password.is_empty() || req.new_password.is_empty() || req.confirm_password.is_empty() {
        return Err(AppError::field("password", "Fill in all fields"));
    }
    if req.current_password != store.admin_password()? {
        warn!("password change with wrong current password");
        return Err(AppError::field("current_password", "Current password is incorrect"));
    }
    if req.new_password != req.confirm_password {
        return Err(AppError::field("confirm_password", "Passwords do not match"));
    }
    if req.new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::field(
            "new_password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }

    store.save_admin_password(&req.new_password)?;
    info!("admin password changed");
    Ok(Notification::success("Password changed"))
}
