//! `SessionStore` adapter keyed by token digest.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::ports::{SessionStore, SessionStoreError};
use crate::domain::{Session, UserId};

/// In-memory session store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: Session) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.token_digest) {
            return Err(SessionStoreError::duplicate_token());
        }
        sessions.insert(session.token_digest.clone(), session);
        Ok(())
    }

    async fn find(&self, token_digest: &str) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.sessions.read().await.get(token_digest).cloned())
    }

    async fn revoke(&self, token_digest: &str) -> Result<bool, SessionStoreError> {
        Ok(self.sessions.write().await.remove(token_digest).is_some())
    }

    async fn revoke_user(&self, user_id: &UserId) -> Result<usize, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| &session.user_id != user_id);
        Ok(before - sessions.len())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.is_live_at(now));
        Ok(before - sessions.len())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        self.sessions.write().await.clear();
        Ok(())
    }
}
