//! Session store — durable collection of saved sessions.
//!
//! The whole collection lives under one storage key as a JSON array and is
//! always read and written as a unit. An in-memory snapshot mirrors the
//! persisted document; the read-modify step of an upsert is synchronous
//! (no suspension inside the critical section), so interleaved saves on the
//! single-threaded scheduler cannot lose updates.

use std::cell::RefCell;
use std::rc::Rc;

use lingo_types::Result;
use lingo_types::session::{Session, SessionSummary};
use crate::ports::StoragePort;

/// The one durable key holding every saved session.
pub const SESSIONS_KEY: &str = "lingo:sessions";

pub struct SessionStore {
    storage: Rc<dyn StoragePort>,
    sessions: RefCell<Vec<Session>>,
}

impl SessionStore {
    /// Create an empty store over an injected storage backend.
    /// Call [`hydrate`](Self::hydrate) once before reading.
    pub fn new(storage: Rc<dyn StoragePort>) -> Self {
        Self {
            storage,
            sessions: RefCell::new(Vec::new()),
        }
    }

    /// Load the persisted collection into the snapshot.
    ///
    /// Absent or corrupt data is a recoverable condition, not fatal: both
    /// hydrate as an empty collection. Returns the number of sessions loaded.
    pub async fn hydrate(&self) -> usize {
        let sessions = match self.storage.get(SESSIONS_KEY).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<Session>>(&bytes) {
                Ok(sessions) => sessions,
                Err(e) => {
                    log::warn!("Corrupt saved chats, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!(
                    "Could not read saved chats from {}: {}",
                    self.storage.backend_name(),
                    e
                );
                Vec::new()
            }
        };
        let count = sessions.len();
        *self.sessions.borrow_mut() = sessions;
        count
    }

    /// All saved sessions, insertion/update order (most-recently-saved last).
    pub fn load_all(&self) -> Vec<Session> {
        self.sessions.borrow().clone()
    }

    /// Identity-keyed lookup.
    pub fn get(&self, id: &str) -> Option<Session> {
        self.sessions.borrow().iter().find(|s| s.id == id).cloned()
    }

    /// The last entry by insertion/update order, if any.
    pub fn most_recent(&self) -> Option<Session> {
        self.sessions.borrow().last().cloned()
    }

    pub fn summaries(&self) -> Vec<SessionSummary> {
        self.sessions.borrow().iter().map(|s| s.summarize()).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.borrow().is_empty()
    }

    /// Idempotent upsert keyed by `session.id`.
    ///
    /// An existing entry with the same id is replaced; a new id is appended.
    /// Either way the saved session ends up last, so [`most_recent`]
    /// reflects the latest save. All other entries are untouched.
    ///
    /// The snapshot mutation and serialization happen before the single
    /// awaited write of the full document. When that write fails, the
    /// snapshot is rolled back so it never claims more than durable storage
    /// holds.
    pub async fn save_or_update(&self, session: Session) -> Result<()> {
        let id = session.id.clone();
        let (displaced, bytes) = {
            let mut sessions = self.sessions.borrow_mut();
            let displaced = sessions
                .iter()
                .position(|s| s.id == id)
                .map(|pos| (pos, sessions.remove(pos)));
            sessions.push(session);
            match serde_json::to_vec(&*sessions) {
                Ok(bytes) => (displaced, bytes),
                Err(e) => {
                    rollback(&mut sessions, &id, displaced);
                    return Err(e.into());
                }
            }
        };
        if let Err(e) = self.storage.set(SESSIONS_KEY, &bytes).await {
            rollback(&mut self.sessions.borrow_mut(), &id, displaced);
            return Err(e);
        }
        Ok(())
    }
}

/// Undo a failed upsert: drop the pending entry and reinstate whatever it
/// displaced at its old position.
fn rollback(sessions: &mut Vec<Session>, id: &str, displaced: Option<(usize, Session)>) {
    if let Some(pos) = sessions.iter().position(|s| s.id == id) {
        sessions.remove(pos);
    }
    if let Some((pos, old)) = displaced {
        let pos = pos.min(sessions.len());
        sessions.insert(pos, old);
    }
}
