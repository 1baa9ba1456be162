use anyhow::Context;
use std::{net::SocketAddr, path::PathBuf};

use crate::content::Theme;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_path: PathBuf,
    /// Stand-in for the visitor's color-scheme preference when no theme is stored.
    pub system_theme: Theme,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let store_path = std::env::var("CONTENT_STORE_PATH")
            .unwrap_or_else(|_| "portfolio-store.json".into())
            .into();
        let prefers_dark = std::env::var("PREFERS_DARK")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let port = match std::env::var("APP_PORT") {
            Ok(raw) => raw.parse::<u16>().with_context(|| format!("APP_PORT={raw}"))?,
            Err(_) => 8080,
        };
        Ok(Self {
            store_path,
            system_theme: if prefers_dark { Theme::Dark } else { Theme::Light },
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_parses_host_and_port() {
        let cfg = AppConfig {
            store_path: "s.json".into(),
            system_theme: Theme::Light,
            host: "127.0.0.1".into(),
            port: 9000,
        };
        assert_eq!(cfg.addr().unwrap().port(), 9000);

        let bad = AppConfig {
            host: "not a host".into(),
            ..cfg
        };
        assert!(bad.addr().is_err());
    }
}
