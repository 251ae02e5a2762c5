use std::sync::Arc;

use rw_core::{WizardSession, WizardSnapshot};
use tokio::sync::Mutex;

/// Shared wizard context containing the session and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `session`.
/// - `dispatch_lock`: held by every mutating operation for its whole duration,
///   including the registry round-trip.
/// - `session`: short-lived, for reads and for committing a working copy.
#[derive(Clone)]
pub struct WizardContext {
    session: Arc<Mutex<WizardSession>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl Default for WizardContext {
    fn default() -> Self {
        Self::new(WizardSession::new())
    }
}

impl WizardContext {
    pub fn new(initial: WizardSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(initial)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Clone of the current session. Does NOT acquire `dispatch_lock`.
    pub async fn get_session(&self) -> WizardSession {
        self.session.lock().await.clone()
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn acquire_dispatch_lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Replaces the session. Call only while holding `dispatch_lock`.
    pub async fn set_session(&self, session: WizardSession) {
        let mut guard = self.session.lock().await;
        *guard = session;
    }
}
