use serde::{Deserialize, Serialize};

use crate::content::Theme;
use crate::notify::Notification;
use crate::render::PhotoPreview;

#[derive(Debug, Deserialize)]
pub struct SavePhotoRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactsRequest {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct PhotosView {
    pub profile: Option<PhotoPreview>,
    pub about: Option<PhotoPreview>,
}

#[derive(Debug, Serialize)]
pub struct Saved<T> {
    #[serde(flatten)]
    pub value: T,
    pub notification: Notification,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}
