use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde::Serialize;
use uuid::Uuid;

use prizefund_core::reward::ScoreSet;

/// Editable state of one visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionMarks {
    pub public: ScoreSet,
    pub internal: ScoreSet,
    pub editing: bool,
}

impl SessionMarks {
    /// Fresh state seeded from startup defaults, editing off.
    pub fn new(public: ScoreSet, internal: ScoreSet) -> Self {
        Self { public, internal, editing: false }
    }
}

#[derive(Debug, Clone)]
struct SessionEntry {
    marks: SessionMarks,
    last_seen: Instant,
}

/// Session store:
/// - `session_id (uuid v4) -> SessionEntry`
/// - entries idle for longer than `idle` are dropped on access or prune
/// - at most `capacity` entries; a full store evicts the least recently seen
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, SessionEntry>,
    idle: Duration,
    capacity: usize,
}

impl SessionStore {
    pub fn new(idle: Duration, capacity: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            idle,
            capacity: capacity.max(1),
        }
    }

    /// Start a session and return its id.
    pub fn create(&self, marks: SessionMarks) -> String {
        self.create_at(marks, Instant::now())
    }

    pub fn create_at(&self, marks: SessionMarks, now: Instant) -> String {
        if self.sessions.len() >= self.capacity {
            self.prune_idle_at(now);
        }
        while self.sessions.len() >= self.capacity {
            if self.evict_oldest().is_none() {
                break;
            }
        }

        let id = Uuid::new_v4().to_string();
        self.sessions.insert(id.clone(), SessionEntry { marks, last_seen: now });
        id
    }

    /// Current state of a live session. Touches the idle clock.
    pub fn get(&self, id: &str) -> Option<SessionMarks> {
        self.get_at(id, Instant::now())
    }

    pub fn get_at(&self, id: &str, now: Instant) -> Option<SessionMarks> {
        self.update_at(id, now, |_| {})
    }

    /// Mutate a live session in place and return the new state.
    pub fn update<F>(&self, id: &str, f: F) -> Option<SessionMarks>
    where
        F: FnOnce(&mut SessionMarks),
    {
        self.update_at(id, Instant::now(), f)
    }

    pub fn update_at<F>(&self, id: &str, now: Instant, f: F) -> Option<SessionMarks>
    where
        F: FnOnce(&mut SessionMarks),
    {
        // removal and the idle check happen under the same shard lock
        let expired = self
            .sessions
            .remove_if(id, |_, e| now.saturating_duration_since(e.last_seen) > self.idle);
        if expired.is_some() {
            return None;
        }

        let mut entry = self.sessions.get_mut(id)?;
        entry.last_seen = entry.last_seen.max(now);
        f(&mut entry.marks);
        Some(entry.marks)
    }

    /// End a session. Returns whether it existed.
    pub fn remove(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Drop every session idle since before `now - idle`. Returns how many went.
    pub fn prune_idle_at(&self, now: Instant) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, e| now.saturating_duration_since(e.last_seen) <= self.idle);
        before.saturating_sub(self.sessions.len())
    }

    pub fn prune_idle(&self) -> usize {
        self.prune_idle_at(Instant::now())
    }

    /// Evict the least recently seen session. Returns its id.
    pub fn evict_oldest(&self) -> Option<String> {
        let victim = self
            .sessions
            .iter()
            .min_by_key(|r| r.value().last_seen)
            .map(|r| r.key().clone())?;
        self.sessions.remove(&victim)?;
        tracing::debug!(session = %victim, "session store full, evicted oldest");
        Some(victim)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
