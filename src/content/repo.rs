use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::defaults;
use super::repo_types::{ContactInfo, PhotoSet, Project, Theme};
use crate::storage::KeyValueStore;

pub const KEY_PROJECTS: &str = "projects";
pub const KEY_ADMIN_PASSWORD: &str = "admin_password";
pub const KEY_PHOTOS: &str = "portfolio_photos";
pub const KEY_CONTACTS: &str = "portfolio_contacts";
pub const KEY_THEME: &str = "theme";

/// Typed view over the persistent key-value namespace.
///
/// Reads never fail on bad data: an absent, unparseable or invalid value is
/// replaced by the record kind's built-in default. Only the admin projects
/// read writes that default back; every other fallback stays in memory.
/// Errors returned here are storage I/O failures.
#[derive(Clone)]
pub struct ContentStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ContentStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Admin read: get-or-initialize. Absent or corrupt projects are replaced
    /// by the admin seed, which is persisted.
    pub fn load_projects(&self) -> anyhow::Result<Vec<Project>> {
        if let Some(projects) = self.decode_projects()? {
            return Ok(projects);
        }
        let seed = defaults::admin_projects();
        self.save_projects(&seed)?;
        info!(count = seed.len(), "projects seeded");
        Ok(seed)
    }

    /// Public read: never writes. Absent or corrupt projects yield the public seed.
    pub fn read_projects(&self) -> anyhow::Result<Vec<Project>> {
        Ok(self
            .decode_projects()?
            .unwrap_or_else(defaults::public_projects))
    }

    pub fn save_projects(&self, projects: &[Project]) -> anyhow::Result<()> {
        self.write_json(KEY_PROJECTS, projects)
    }

    pub fn photos(&self) -> anyhow::Result<PhotoSet> {
        let fallback = defaults::photos();
        let Some(mut photos) = self.read_json::<PhotoSet>(KEY_PHOTOS)? else {
            return Ok(fallback);
        };
        if photos.profile.trim().is_empty() {
            photos.profile = fallback.profile;
        }
        if photos.about.trim().is_empty() {
            photos.about = fallback.about;
        }
        Ok(photos)
    }

    pub fn save_photos(&self, photos: &PhotoSet) -> anyhow::Result<()> {
        self.write_json(KEY_PHOTOS, photos)
    }

    pub fn contacts(&self) -> anyhow::Result<ContactInfo> {
        let fallback = defaults::contacts();
        let Some(mut contacts) = self.read_json::<ContactInfo>(KEY_CONTACTS)? else {
            return Ok(fallback);
        };
        if contacts.email.trim().is_empty() {
            contacts.email = fallback.email;
        }
        if contacts.phone.trim().is_empty() {
            contacts.phone = fallback.phone;
        }
        Ok(contacts)
    }

    pub fn save_contacts(&self, contacts: &ContactInfo) -> anyhow::Result<()> {
        self.write_json(KEY_CONTACTS, contacts)
    }

    /// Stored as the raw string; an empty value counts as unset.
    pub fn admin_password(&self) -> anyhow::Result<String> {
        let stored = self.kv.get(KEY_ADMIN_PASSWORD).context("read admin password")?;
        Ok(stored
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| defaults::DEFAULT_ADMIN_PASSWORD.to_string()))
    }

    pub fn save_admin_password(&self, password: &str) -> anyhow::Result<()> {
        self.kv
            .set(KEY_ADMIN_PASSWORD, password)
            .context("write admin password")
    }

    /// Stored theme, or `system` when unset or unrecognised.
    pub fn theme(&self, system: Theme) -> anyhow::Result<Theme> {
        let stored = self.kv.get(KEY_THEME).context("read theme")?;
        Ok(stored.as_deref().and_then(Theme::parse).unwrap_or(system))
    }

    pub fn save_theme(&self, theme: Theme) -> anyhow::Result<()> {
        self.kv.set(KEY_THEME, theme.as_str()).context("write theme")
    }

    /// `Ok(None)` when the projects value is absent, unparseable or holds an
    /// invalid record.
    fn decode_projects(&self) -> anyhow::Result<Option<Vec<Project>>> {
        let Some(projects) = self.read_json::<Vec<Project>>(KEY_PROJECTS)? else {
            return Ok(None);
        };
        if let Some(bad) = projects.iter().find(|p| !p.is_valid()) {
            warn!(id = bad.id, "stored project fails validation; using defaults");
            return Ok(None);
        }
        debug!(count = projects.len(), "projects loaded");
        Ok(Some(projects))
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Option<T>> {
        let Some(raw) = self.kv.get(key).with_context(|| format!("read {key}"))? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(error = %e, key, "stored value unreadable; using defaults");
                Ok(None)
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        let body = serde_json::to_string(value).with_context(|| format!("serialize {key}"))?;
        self.kv.set(key, &body).with_context(|| format!("write {key}"))
    }
}

#[cfg(test)]
mod content_tests {
    use super::*;
    use crate::content::repo_types::{PhotoSlot, NO_LINK};
    use crate::storage::MemoryStore;

    fn store() -> (ContentStore, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (ContentStore::new(kv.clone()), kv)
    }

    fn project(id: i64, category: &str) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: "desc".into(),
            category: category.into(),
            image: "img.png".into(),
            technologies: vec!["Rust".into(), "axum".into()],
            live_url: NO_LINK.into(),
            github_url: "https://example.com/repo".into(),
        }
    }

    #[test]
    fn projects_round_trip_in_order() {
        let (content, _) = store();
        let list = vec![project(30, "web"), project(10, "mobile"), project(20, "other")];
        content.save_projects(&list).unwrap();
        assert_eq!(content.load_projects().unwrap(), list);
        assert_eq!(content.read_projects().unwrap(), list);
    }

    #[test]
    fn empty_store_admin_read_seeds_and_persists() {
        let (content, kv) = store();
        let projects = content.load_projects().unwrap();
        assert_eq!(projects.len(), 3);
        assert!(kv.get(KEY_PROJECTS).unwrap().is_some());
        assert_eq!(content.read_projects().unwrap(), projects);
    }

    #[test]
    fn empty_store_public_read_does_not_persist() {
        let (content, kv) = store();
        assert_eq!(content.read_projects().unwrap().len(), 8);
        assert_eq!(kv.get(KEY_PROJECTS).unwrap(), None);
    }

    #[test]
    fn corrupt_projects_repaired_only_by_admin_read() {
        let (content, kv) = store();
        kv.set(KEY_PROJECTS, "[{broken").unwrap();

        assert_eq!(content.read_projects().unwrap().len(), 8);
        assert_eq!(kv.get(KEY_PROJECTS).unwrap().as_deref(), Some("[{broken"));

        assert_eq!(content.load_projects().unwrap().len(), 3);
        let repaired: Vec<Project> =
            serde_json::from_str(&kv.get(KEY_PROJECTS).unwrap().unwrap()).unwrap();
        assert_eq!(repaired.len(), 3);
    }

    #[test]
    fn wrong_shape_falls_back() {
        let (content, kv) = store();
        kv.set(KEY_PROJECTS, r#"{"id":1}"#).unwrap();
        assert_eq!(content.read_projects().unwrap().len(), 8);

        let mut invalid = project(1, "web");
        invalid.technologies.clear();
        content.save_projects(&[invalid]).unwrap();
        assert_eq!(content.read_projects().unwrap().len(), 8);
    }

    #[test]
    fn other_kinds_default_without_write_back() {
        let (content, kv) = store();
        assert_eq!(content.photos().unwrap(), defaults::photos());
        assert_eq!(content.contacts().unwrap(), defaults::contacts());
        assert_eq!(content.admin_password().unwrap(), defaults::DEFAULT_ADMIN_PASSWORD);
        assert_eq!(content.theme(Theme::Dark).unwrap(), Theme::Dark);
        for key in [KEY_PHOTOS, KEY_CONTACTS, KEY_ADMIN_PASSWORD, KEY_THEME] {
            assert_eq!(kv.get(key).unwrap(), None, "{key} should stay unset");
        }
    }

    #[test]
    fn partial_photo_record_falls_back_per_slot() {
        let (content, kv) = store();
        kv.set(KEY_PHOTOS, r#"{"profile":"me.jpg"}"#).unwrap();
        let photos = content.photos().unwrap();
        assert_eq!(photos.get(PhotoSlot::Profile), "me.jpg");
        assert_eq!(photos.get(PhotoSlot::About), defaults::DEFAULT_ABOUT_PHOTO);
    }

    #[test]
    fn corrupt_contacts_fall_back() {
        let (content, kv) = store();
        kv.set(KEY_CONTACTS, "nope").unwrap();
        assert_eq!(content.contacts().unwrap(), defaults::contacts());
    }

    #[test]
    fn password_is_stored_plain() {
        let (content, kv) = store();
        content.save_admin_password("letmein").unwrap();
        assert_eq!(kv.get(KEY_ADMIN_PASSWORD).unwrap().as_deref(), Some("letmein"));
        assert_eq!(content.admin_password().unwrap(), "letmein");
    }

    #[test]
    fn unknown_theme_uses_system_preference() {
        let (content, kv) = store();
        kv.set(KEY_THEME, "sepia").unwrap();
        assert_eq!(content.theme(Theme::Light).unwrap(), Theme::Light);
        content.save_theme(Theme::Dark).unwrap();
        assert_eq!(content.theme(Theme::Light).unwrap(), Theme::Dark);
    }
}
