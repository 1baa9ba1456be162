use std::sync::Arc;
use tracing::{debug, info, warn};

use super::dto::{ProjectForm, ProjectStats};
use super::ids::{Clock, ProjectIds};
use crate::content::{ContentStore, Project, ProjectId};
use crate::error::{AppError, AppResult};
use crate::render::{self, AdminListView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editor {
    Closed,
    Creating,
    Editing(ProjectId),
}

/// Admin panel state for one session.
///
/// `projects` is this session's last view of the store. Mutations start from
/// a fresh read, so changes made meanwhile through another session survive.
pub struct AdminWorkspace {
    projects: Vec<Project>,
    editor: Editor,
    pending_delete: Option<ProjectId>,
    ids: ProjectIds,
}

impl AdminWorkspace {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            projects: Vec::new(),
            editor: Editor::Closed,
            pending_delete: None,
            ids: ProjectIds::new(clock),
        }
    }

    pub fn refresh(&mut self, store: &ContentStore) -> anyhow::Result<()> {
        self.projects = store.load_projects()?;
        debug!(count = self.projects.len(), "admin projects refreshed");
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn editor(&self) -> Editor {
        self.editor
    }

    pub fn pending_delete(&self) -> Option<ProjectId> {
        self.pending_delete
    }

    pub fn list_view(&self) -> AdminListView {
        render::admin_list(&self.projects)
    }

    pub fn stats(&self) -> ProjectStats {
        ProjectStats::from_projects(&self.projects)
    }

    pub fn open_create(&mut self) -> ProjectForm {
        self.editor = Editor::Creating;
        ProjectForm::default()
    }

    pub fn open_edit(&mut self, id: ProjectId) -> AppResult<ProjectForm> {
        let project = self
            .projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(AppError::ProjectNotFound(id))?;
        let form = ProjectForm::from_project(project);
        self.editor = Editor::Editing(id);
        Ok(form)
    }

    pub fn close_editor(&mut self) {
        self.editor = Editor::Closed;
    }

    /// Validates and persists the open form. On any error the editor stays
    /// open and the store does not change.
    pub fn submit(&mut self, store: &ContentStore, form: ProjectForm) -> AppResult<Project> {
        let editing = match self.editor {
            Editor::Closed => return Err(AppError::field("form", "No project is being edited")),
            Editor::Creating => None,
            Editor::Editing(id) => Some(id),
        };
        // validate before reading the store or consuming an id
        form.clone().into_project(0)?;

        let mut next = store.load_projects()?;
        let saved = match editing {
            None => {
                let project = form.into_project(self.ids.next(&next))?;
                next.push(project.clone());
                project
            }
            Some(id) => {
                let project = form.into_project(id)?;
                let Some(index) = next.iter().position(|p| p.id == id) else {
                    warn!(id, "edited project vanished from collection");
                    self.projects = next;
                    return Err(AppError::ProjectNotFound(id));
                };
                next[index] = project.clone();
                project
            }
        };

        store.save_projects(&next)?;
        self.projects = next;
        self.editor = Editor::Closed;
        info!(id = saved.id, title = %saved.title, total = self.projects.len(), "project saved");
        Ok(saved)
    }

    pub fn request_delete(&mut self, id: ProjectId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Removes every project with the pending id and persists. `Ok(false)`
    /// when nothing is pending. An id that is no longer stored is reported
    /// as `ProjectNotFound` and nothing is written.
    pub fn confirm_delete(&mut self, store: &ContentStore) -> AppResult<bool> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(false);
        };
        let current = store.load_projects()?;
        if !current.iter().any(|p| p.id == id) {
            warn!(id, "delete confirmed for unknown project");
            self.projects = current;
            return Err(AppError::ProjectNotFound(id));
        }

        let next: Vec<Project> = current.into_iter().filter(|p| p.id != id).collect();
        store.save_projects(&next)?;
        self.projects = next;
        info!(id, total = self.projects.len(), "project deleted");
        Ok(true)
    }
}
