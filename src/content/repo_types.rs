use serde::{Deserialize, Serialize};
use std::fmt;

pub type ProjectId = i64;

/// Placeholder link used when a project has no live demo or repository.
pub const NO_LINK: &str = "#";

fn no_link() -> String {
    NO_LINK.to_string()
}

/// One portfolio entry as persisted under the `projects` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: String, // web, mobile, design or anything else (shown verbatim)
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default = "no_link")]
    pub live_url: String,
    #[serde(default = "no_link")]
    pub github_url: String,
}

impl Project {
    /// Required fields are non-empty and at least one technology is listed.
    pub fn is_valid(&self) -> bool {
        let required = [&self.title, &self.category, &self.description, &self.image];
        required.iter().all(|f| !f.trim().is_empty())
            && !self.technologies.is_empty()
            && self.technologies.iter().all(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSlot {
    Profile,
    About,
}

impl PhotoSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            PhotoSlot::Profile => "profile",
            PhotoSlot::About => "about",
        }
    }
}

impl fmt::Display for PhotoSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile and about-section photo URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSet {
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub about: String,
}

impl PhotoSet {
    pub fn get(&self, slot: PhotoSlot) -> &str {
        match slot {
            PhotoSlot::Profile => &self.profile,
            PhotoSlot::About => &self.about,
        }
    }

    pub fn set(&mut self, slot: PhotoSlot, url: String) {
        match slot {
            PhotoSlot::Profile => self.profile = url,
            PhotoSlot::About => self.about = url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}
