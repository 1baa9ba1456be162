use tracing::info;

use super::dto::{ContactsRequest, PhotosView};
use crate::auth::services::is_valid_email;
use crate::content::{ContactInfo, ContentStore, PhotoSet, PhotoSlot, Theme};
use crate::error::{AppError, AppResult, FieldError};
use crate::render;

pub fn photos_view(photos: &PhotoSet) -> PhotosView {
    // stored slots are never blank after defaulting, so previews exist
    PhotosView {
        profile: render::photo_preview(PhotoSlot::Profile, &photos.profile),
        about: render::photo_preview(PhotoSlot::About, &photos.about),
    }
}

pub fn load_photos(store: &ContentStore) -> anyhow::Result<PhotoSet> {
    store.photos()
}

/// Stores one slot, keeping the other slot's current value.
pub fn save_photo(store: &ContentStore, slot: PhotoSlot, url: &str) -> AppResult<PhotoSet> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AppError::field("url", "Enter an image URL"));
    }
    let mut photos = store.photos()?;
    photos.set(slot, url.to_string());
    store.save_photos(&photos)?;
    info!(%slot, "photo saved");
    Ok(photos)
}

pub fn load_contacts(store: &ContentStore) -> anyhow::Result<ContactInfo> {
    store.contacts()
}

pub fn save_contacts(store: &ContentStore, req: &ContactsRequest) -> AppResult<ContactInfo> {
    let email = req.email.trim();
    let phone = req.phone.trim();

    let mut errors = Vec::new();
    if email.is_empty() {
        errors.push(FieldError::new("email", "This field is required"));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new("email", "Enter a valid email address"));
    }
    if phone.is_empty() {
        errors.push(FieldError::new("phone", "This field is required"));
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let contacts = ContactInfo {
        email: email.to_string(),
        phone: phone.to_string(),
    };
    store.save_contacts(&contacts)?;
    info!(email = %contacts.email, "contacts saved");
    Ok(contacts)
}

pub fn current_theme(store: &ContentStore, system: Theme) -> anyhow::Result<Theme> {
    store.theme(system)
}

pub fn toggle_theme(store: &ContentStore, system: Theme) -> anyhow::Result<Theme> {
    let next = store.theme(system)?.toggled();
    store.save_theme(next)?;
    Ok(next)
}

#[cfg(test)]
mod settings_tests {
    use super::*;
    use crate::content::defaults;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn store() -> ContentStore {
        ContentStore::new(Arc::new(MemoryStore::new()))
    }

    fn contacts(email: &str, phone: &str) -> ContactsRequest {
        ContactsRequest {
            email: email.into(),
            phone: phone.into(),
        }
    }

    #[test]
    fn blank_photo_url_rejected() {
        let store = store();
        let err = save_photo(&store, PhotoSlot::Profile, "   ").unwrap_err();
        assert_eq!(err.fields()[0].field, "url");
        assert_eq!(load_photos(&store).unwrap(), defaults::photos());
    }

    #[test]
    fn saving_one_slot_keeps_the_other() {
        let store = store();
        save_photo(&store, PhotoSlot::About, "https://cdn.example/about.jpg").unwrap();
        save_photo(&store, PhotoSlot::Profile, "https://cdn.example/me.jpg").unwrap();

        let photos = load_photos(&store).unwrap();
        assert_eq!(photos.about, "https://cdn.example/about.jpg");
        assert_eq!(photos.profile, "https://cdn.example/me.jpg");
    }

    #[test]
    fn photos_view_carries_fallbacks() {
        let view = photos_view(&defaults::photos());
        let about = view.about.unwrap();
        assert_eq!(about.src, defaults::DEFAULT_ABOUT_PHOTO);
        assert_eq!(about.fallback, "https://picsum.photos/500/400?random=2");
    }

    #[test]
    fn contacts_validation() {
        let store = store();
        let err = save_contacts(&store, &contacts("", "")).unwrap_err();
        assert_eq!(err.fields().len(), 2);

        let err = save_contacts(&store, &contacts("not-an-email", "123")).unwrap_err();
        assert_eq!(err.fields()[0].message, "Enter a valid email address");
        assert_eq!(load_contacts(&store).unwrap(), defaults::contacts());
    }

    #[test]
    fn contacts_saved_trimmed() {
        let store = store();
        save_contacts(&store, &contacts(" me@site.dev ", " +1 555 0100 ")).unwrap();
        let saved = load_contacts(&store).unwrap();
        assert_eq!(saved.email, "me@site.dev");
        assert_eq!(saved.phone, "+1 555 0100");
    }

    #[test]
    fn toggle_starts_from_system_preference() {
        let store = store();
        assert_eq!(current_theme(&store, Theme::Dark).unwrap(), Theme::Dark);
        assert_eq!(toggle_theme(&store, Theme::Dark).unwrap(), Theme::Light);
        assert_eq!(current_theme(&store, Theme::Dark).unwrap(), Theme::Light);
        assert_eq!(toggle_theme(&store, Theme::Dark).unwrap(), Theme::Dark);
    }
}
