use serde::{Deserialize, Serialize};

use crate::content::Project;

/// Category filter of the public grid: `"all"` or one exact category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "all" => CategoryFilter::All,
            other => CategoryFilter::Category(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Category(c) => c,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => project.category == *c,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(raw: String) -> Self {
        CategoryFilter::parse(&raw)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

fn default_limit() -> usize {
    super::services::INITIAL_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub filter: CategoryFilter,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Public contact form. Only validated; nothing is sent anywhere.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}
