//! Driven port backing the session issuer.
//!
//! Stores key sessions by token digest; raw bearer tokens never reach an
//! adapter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Session, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by session store adapters.
    pub enum SessionStoreError {
        /// Backing store is unreachable.
        Connection { message: String } =>
            "session store connection failed: {message}",
        /// A digest collided with an existing session.
        DuplicateToken =>
            "session token collision",
    }
}

/// Session persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Record a new session.
    async fn save(&self, session: Session) -> Result<(), SessionStoreError>;

    /// Look a session up by token digest.
    async fn find(&self, token_digest: &str) -> Result<Option<Session>, SessionStoreError>;

    /// Remove one session. Returns whether it existed.
    async fn revoke(&self, token_digest: &str) -> Result<bool, SessionStoreError>;

    /// Remove every session for `user_id`, returning how many were dropped.
    async fn revoke_user(&self, user_id: &UserId) -> Result<usize, SessionStoreError>;

    /// Remove sessions that are no longer live at `now`, returning how many
    /// were dropped.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, SessionStoreError>;

    /// Drop every session.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
