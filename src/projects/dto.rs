use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::content::{repo_types::NO_LINK, Project, ProjectId};
use crate::error::{AppError, FieldError};
use crate::notify::Notification;
use crate::render::AdminListView;

/// Editor form contents; technologies are one comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectForm {
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub technologies: String,
    pub live_url: String,
    pub github_url: String,
}

/// Splits on commas, trims, drops empty segments.
pub fn parse_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn link_or_placeholder(raw: &str) -> String {
    match raw.trim() {
        "" => NO_LINK.to_string(),
        url => url.to_string(),
    }
}

impl ProjectForm {
    pub fn from_project(p: &Project) -> Self {
        Self {
            title: p.title.clone(),
            category: p.category.clone(),
            description: p.description.clone(),
            image: p.image.clone(),
            technologies: p.technologies.join(", "),
            live_url: p.live_url.clone(),
            github_url: p.github_url.clone(),
        }
    }

    /// Validates the form and builds the record that would be persisted.
    pub fn into_project(self, id: ProjectId) -> Result<Project, AppError> {
        let technologies = parse_technologies(&self.technologies);
        let project = Project {
            id,
            title: self.title.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            technologies,
            live_url: link_or_placeholder(&self.live_url),
            github_url: link_or_placeholder(&self.github_url),
        };

        let mut errors = Vec::new();
        for (field, value) in [
            ("title", &project.title),
            ("category", &project.category),
            ("description", &project.description),
            ("image", &project.image),
        ] {
            if value.is_empty() {
                errors.push(FieldError::new(field, "This field is required"));
            }
        }
        if project.technologies.is_empty() {
            errors.push(FieldError::new("technologies", "List at least one technology"));
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(project)
    }
}

/// Summary counts shown above the admin list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub total: usize,
    pub web: usize,
    pub mobile: usize,
    pub by_category: BTreeMap<String, usize>,
}

impl ProjectStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut by_category = BTreeMap::new();
        for p in projects {
            *by_category.entry(p.category.clone()).or_insert(0) += 1;
        }
        Self {
            total: projects.len(),
            web: by_category.get("web").copied().unwrap_or(0),
            mobile: by_category.get("mobile").copied().unwrap_or(0),
            by_category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub list: AdminListView,
    pub stats: ProjectStats,
    pub pending_delete: Option<ProjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
}

#[derive(Debug, Serialize)]
pub struct EditorResponse {
    pub editing: Option<ProjectId>,
    pub form: ProjectForm,
}

#[derive(Debug, Serialize)]
pub struct DeletePrompt {
    pub pending_delete: Option<ProjectId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProjectForm {
        ProjectForm {
            title: "  Shop ".into(),
            category: "web".into(),
            description: "Store".into(),
            image: "shop.png".into(),
            technologies: " Rust, , axum ,".into(),
            live_url: "".into(),
            github_url: " https://git.example/shop ".into(),
        }
    }

    #[test]
    fn technologies_are_split_trimmed_and_filtered() {
        assert_eq!(parse_technologies(" a, b ,, c ,"), vec!["a", "b", "c"]);
        assert!(parse_technologies(" , ,").is_empty());
    }

    #[test]
    fn valid_form_builds_project() {
        let p = filled().into_project(42).unwrap();
        assert_eq!(p.id, 42);
        assert_eq!(p.title, "Shop");
        assert_eq!(p.technologies, vec!["Rust", "axum"]);
        assert_eq!(p.live_url, "#");
        assert_eq!(p.github_url, "https://git.example/shop");
    }

    #[test]
    fn blank_fields_reported_per_field() {
        let form = ProjectForm {
            technologies: " , ".into(),
            ..Default::default()
        };
        let err = form.into_project(1).unwrap_err();
        let fields: Vec<_> = err.fields().iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["title", "category", "description", "image", "technologies"]);
    }

    #[test]
    fn form_round_trips_through_project() {
        let p = filled().into_project(3).unwrap();
        let form = ProjectForm::from_project(&p);
        assert_eq!(form.technologies, "Rust, axum");
        assert_eq!(form.into_project(3).unwrap(), p);
    }

    #[test]
    fn stats_count_categories() {
        let mut projects = crate::content::defaults::public_projects();
        projects[0].category = "games".into();
        let stats = ProjectStats::from_projects(&projects);
        assert_eq!(stats.total, 8);
        assert_eq!(stats.web, 3);
        assert_eq!(stats.mobile, 2);
        assert_eq!(stats.by_category["games"], 1);
    }
}
