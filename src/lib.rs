//! Portfolio content service: local content store, admin editing and the
//! public projects browser, served over HTTP.

pub mod app;
pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod notify;
pub mod projects;
pub mod public;
pub mod render;
pub mod settings;
pub mod state;
pub mod storage;
