#![cfg(feature = "std")]

//! Thread-safe handle serialising command dispatch for one session.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::session::{Command, CommandOutcome, GameSession, Snapshot};

/// Cloneable handle to a [`GameSession`] shared between threads.
///
/// Every command runs under the lock, so commands from different threads are
/// handled one at a time in lock acquisition order.
#[derive(Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn dispatch(&self, command: Command) -> CommandOutcome {
        self.lock().dispatch(command)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    // Commands finish mutating before they publish a status, so a sink that
    // panics leaves a coherent session behind the poisoned lock.
    fn lock(&self) -> MutexGuard<'_, GameSession> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("session lock was poisoned; recovering");
            poisoned.into_inner()
        })
    }
}

impl From<GameSession> for SharedSession {
    fn from(session: GameSession) -> Self {
        Self::new(session)
    }
}
