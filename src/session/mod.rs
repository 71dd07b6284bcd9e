//! The current authenticated user, shared by every service that needs it.
//!
//! A single `SessionHolder` is created by the composition root and cloned
//! into each resource service. Clones share the same slot, so a login seen by
//! `AuthService` is immediately visible to `ProfileService`.
//!
//! ```text
//!   empty ──login/register──▶ set ──profile call ok──▶ replaced
//!     ▲                        │                          │
//!     └────────── logout ──────┴──────────────────────────┘
//! ```

pub mod store;

pub use store::SessionStore;

use crate::models::{Session, User};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// Shared handle to the process-wide session slot.
#[derive(Debug, Clone, Default)]
pub struct SessionHolder {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionHolder {
    /// Create an empty (unauthenticated) holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a holder that starts out with `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }

    /// Store a freshly issued session, replacing any previous one.
    pub fn set(&self, session: Session) {
        info!(
            "Session started for user {} ({})",
            session.user_id, session.email
        );
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Replace the user record after a successful profile call.
    ///
    /// The record is swapped as a whole. The token is kept unless the
    /// response carried one. Returns the new session, or `None` if nobody is
    /// logged in (the response is then dropped).
    pub fn replace_user(&self, user: User) -> Option<Session> {
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let current_token = slot.as_ref()?.token.clone();
        let session = Session::from_user(user, current_token);
        *slot = Some(session.clone());
        Some(session)
    }

    /// Forget the current session.
    pub fn clear(&self) {
        let previous = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(session) = previous {
            info!("Session cleared for user {}", session.user_id);
        }
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

/// Shorten a token for logs: first and last four characters, or `***` when
/// the token is too short for that to hide most of it.
pub fn mask_token(token: &str) -> String {
    const MIN_MASKED_LEN: usize = 16;
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > MIN_MASKED_LEN {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}
