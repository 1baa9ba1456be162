use crate::auth::session::SessionRegistry;
use crate::config::AppConfig;
use crate::content::ContentStore;
use crate::projects::ids::SystemClock;
use crate::storage::{FileStore, KeyValueStore};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub store: ContentStore,
    pub sessions: Arc<SessionRegistry>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init(config: AppConfig) -> Self {
        info!(path = %config.store_path.display(), "opening content store");
        let kv = Arc::new(FileStore::new(config.store_path.clone())) as Arc<dyn KeyValueStore>;
        Self::from_parts(kv, Arc::new(config))
    }

    pub fn from_parts(kv: Arc<dyn KeyValueStore>, config: Arc<AppConfig>) -> Self {
        Self {
            store: ContentStore::new(kv),
            sessions: Arc::new(SessionRegistry::new(Arc::new(SystemClock))),
            config,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::content::Theme;
        use crate::storage::MemoryStore;

        let config = Arc::new(AppConfig {
            store_path: "unused.json".into(),
            system_theme: Theme::Light,
            host: "127.0.0.1".into(),
            port: 0,
        });
        Self::from_parts(Arc::new(MemoryStore::new()), config)
    }
}
