use tracing::debug;

use super::dto::{CategoryFilter, ContactMessage, Visibility};
use crate::auth::services::is_valid_email;
use crate::content::ContentStore;
use crate::error::{AppError, AppResult, FieldError};
use crate::notify::Notification;
use crate::render::{self, ProjectGrid};

pub const INITIAL_LIMIT: usize = 6;
pub const LOAD_MORE_STEP: usize = 3;
pub const MIN_MESSAGE_LEN: usize = 10;

/// Read-only, filtered and paginated view of the projects.
///
/// Every generation re-reads the store, so edits made through the admin
/// panel show up the next time the grid is regenerated, typically when the
/// page becomes visible again. There is no push channel.
#[derive(Debug, Clone)]
pub struct PublicBrowser {
    filter: CategoryFilter,
    limit: usize,
    last: Option<ProjectGrid>,
}

impl Default for PublicBrowser {
    fn default() -> Self {
        Self::with_view(CategoryFilter::All, INITIAL_LIMIT)
    }
}

impl PublicBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(filter: CategoryFilter, limit: usize) -> Self {
        Self {
            filter,
            limit,
            last: None,
        }
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Most recent generation, if any.
    pub fn current(&self) -> Option<&ProjectGrid> {
        self.last.as_ref()
    }

    pub fn regenerate(&mut self, store: &ContentStore) -> anyhow::Result<&ProjectGrid> {
        let projects = store.read_projects()?;
        let grid = render::project_grid(&projects, &self.filter, self.limit);
        debug!(filter = self.filter.as_str(), limit = self.limit, shown = grid.cards.len(), "grid regenerated");
        Ok(&*self.last.insert(grid))
    }

    /// Picking a filter starts over at the initial page size.
    pub fn select_filter(&mut self, store: &ContentStore, filter: CategoryFilter) -> anyhow::Result<&ProjectGrid> {
        self.filter = filter;
        self.limit = INITIAL_LIMIT;
        self.regenerate(store)
    }

    pub fn load_more(&mut self, store: &ContentStore) -> anyhow::Result<&ProjectGrid> {
        self.limit = self.limit.saturating_add(LOAD_MORE_STEP);
        self.regenerate(store)
    }

    /// Regenerates when the page comes back into view; ignores hiding.
    pub fn on_visibility_change(
        &mut self,
        store: &ContentStore,
        visibility: Visibility,
    ) -> anyhow::Result<Option<&ProjectGrid>> {
        match visibility {
            Visibility::Visible => self.regenerate(store).map(Some),
            Visibility::Hidden => Ok(None),
        }
    }
}

/// Dispatches visibility changes to registered listeners, in registration order.
#[derive(Default)]
pub struct VisibilityHub {
    listeners: Vec<Box<dyn FnMut(Visibility)>>,
}

impl VisibilityHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Visibility) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn notify(&mut self, visibility: Visibility) {
        for listener in &mut self.listeners {
            listener(visibility);
        }
    }
}

/// Reports every failing field at once.
pub fn validate_contact_message(msg: &ContactMessage) -> AppResult<Notification> {
    let mut errors = Vec::new();
    if msg.name.trim().is_empty() {
        errors.push(FieldError::new("name", "This field is required"));
    }
    if msg.email.trim().is_empty() {
        errors.push(FieldError::new("email", "This field is required"));
    } else if !is_valid_email(msg.email.trim()) {
        errors.push(FieldError::new("email", "Enter a valid email address"));
    }
    let message = msg.message.trim();
    if message.is_empty() {
        errors.push(FieldError::new("message", "This field is required"));
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.push(FieldError::new(
            "message",
            format!("Message must be at least {MIN_MESSAGE_LEN} characters"),
        ));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok(Notification::success("Thanks! Your message has been received."))
}
