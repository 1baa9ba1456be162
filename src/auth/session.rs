use std::{
    collections::HashMap,
    sync::{Arc, Mutex, TryLockError},
};
use tracing::debug;
use uuid::Uuid;

use crate::projects::{ids::Clock, services::AdminWorkspace};
use crate::storage::{lock, KeyValueStore, MemoryStore};

pub const ADMIN_AUTHENTICATED: &str = "admin_authenticated";

/// Per-session namespace holding `admin_authenticated = "true"` while logged in.
/// Absent means logged out.
#[derive(Default)]
pub struct SessionFlag {
    storage: MemoryStore,
}

impl SessionFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.storage.get(ADMIN_AUTHENTICATED), Ok(Some(v)) if v == "true")
    }

    pub fn set_authenticated(&self) -> anyhow::Result<()> {
        self.storage.set(ADMIN_AUTHENTICATED, "true")
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        self.storage.remove(ADMIN_AUTHENTICATED)
    }
}

/// Sessions idle for longer than this are dropped the next time one is opened.
pub const SESSION_IDLE_MS: i64 = 30 * 60 * 1000;

/// One browsing session: its flag and its admin panel state.
pub struct Session {
    pub id: Uuid,
    pub flag: SessionFlag,
    pub workspace: AdminWorkspace,
    last_seen: i64,
}

/// Live sessions. Nothing here outlives the process.
///
/// The map lock is only held to look a session up; work on a session runs
/// under that session's own lock, so one slow request does not stall others.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, Arc<Mutex<Session>>>>,
    clock: Arc<dyn Clock>,
}

impl SessionRegistry {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
        }
    }

    pub fn open(&self) -> Uuid {
        let id = Uuid::new_v4();
        let now = self.clock.now_millis();
        let session = Session {
            id,
            flag: SessionFlag::new(),
            workspace: AdminWorkspace::new(self.clock.clone()),
            last_seen: now,
        };
        let mut sessions = lock(&self.sessions);
        prune_idle(&mut sessions, now);
        sessions.insert(id, Arc::new(Mutex::new(session)));
        debug!(session_id = %id, live = sessions.len(), "session opened");
        id
    }

    fn get(&self, id: Uuid) -> Option<Arc<Mutex<Session>>> {
        lock(&self.sessions).get(&id).cloned()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        lock(&self.sessions).contains_key(&id)
    }

    pub fn is_authenticated(&self, id: Uuid) -> bool {
        self.get(id)
            .map(|slot| {
                let authenticated = lock(&slot).flag.is_authenticated();
                authenticated
            })
            .unwrap_or(false)
    }

    /// Runs `f` on the session, or returns `None` if it does not exist.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let slot = self.get(id)?;
        let mut session = lock(&slot);
        session.last_seen = self.clock.now_millis();
        Some(f(&mut *session))
    }

    pub fn close(&self, id: Uuid) -> bool {
        let closed = lock(&self.sessions).remove(&id).is_some();
        if closed {
            debug!(session_id = %id, "session closed");
        }
        closed
    }

    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Drops idle sessions. A session busy with a request is never idle.
fn prune_idle(sessions: &mut HashMap<Uuid, Arc<Mutex<Session>>>, now: i64) {
    sessions.retain(|_, slot| {
        let session = match slot.try_lock() {
            Ok(session) => session,
            Err(TryLockError::WouldBlock) => return true,
            Err(TryLockError::Poisoned(p)) => p.into_inner(),
        };
        let live = now - session.last_seen <= SESSION_IDLE_MS;
        if !live {
            debug!(session_id = %session.id, "idle session dropped");
        }
        live
    });
}
