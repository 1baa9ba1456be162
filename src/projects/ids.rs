use std::sync::Arc;
use time::OffsetDateTime;

use crate::content::{Project, ProjectId};

/// Millisecond wall clock; injectable so id assignment is testable.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }
}

/// Issues project ids from the clock, bumped past anything already seen.
///
/// Two creations inside one millisecond still get distinct ids, and an id
/// issued by this instance is never issued again even after its project
/// is deleted.
pub struct ProjectIds {
    clock: Arc<dyn Clock>,
    highest: ProjectId,
}

impl ProjectIds {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, highest: 0 }
    }

    pub fn next(&mut self, existing: &[Project]) -> ProjectId {
        let seen = existing.iter().map(|p| p.id).max().unwrap_or(0).max(self.highest);
        let id = self.clock.now_millis().max(seen + 1);
        self.highest = id;
        id
    }
}

#[cfg(test)]
pub(crate) mod test_clock {
    use super::Clock;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Clock that only moves when told to.
    pub struct FixedClock(pub AtomicI64);

    impl FixedClock {
        pub fn at(ms: i64) -> Self {
            Self(AtomicI64::new(ms))
        }

        pub fn advance(&self, ms: i64) {
            self.0.fetch_add(ms, Ordering::SeqCst);
        }
    }

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }
}
