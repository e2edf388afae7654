//! Driven port for blog entry storage.
//!
//! Every mutating method must be atomic with respect to the others: a like
//! racing a delete on the same entry either lands before the removal or
//! observes the entry as missing, never a half-removed entry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{BlogDraft, BlogEntry, BlogId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by blog repository adapters.
    pub enum BlogRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "blog repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "blog repository query failed: {message}",
    }
}

/// Result of an ownership-checked removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The entry existed, the caller owned it, and it is gone.
    Removed(BlogEntry),
    /// The entry exists but belongs to someone else; nothing changed.
    NotOwner(BlogEntry),
    /// No entry with that id exists.
    Missing,
}

/// Storage for blog entries.
///
/// `list` returns an unordered snapshot taken at call time; ordering is the
/// ranking policy's job, not the adapter's.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Store a new entry, assigning its id and creation sequence.
    async fn insert(
        &self,
        draft: BlogDraft,
        owner: &UserId,
        created_at: DateTime<Utc>,
    ) -> Result<BlogEntry, BlogRepositoryError>;

    /// Fetch an entry by id.
    async fn find_by_id(&self, id: &BlogId) -> Result<Option<BlogEntry>, BlogRepositoryError>;

    /// Add exactly one like. Returns `None` when the entry does not exist.
    async fn increment_likes(&self, id: &BlogId)
    -> Result<Option<BlogEntry>, BlogRepositoryError>;

    /// Remove the entry if `caller` passes the ownership guard.
    async fn remove_owned(
        &self,
        id: &BlogId,
        caller: &UserId,
    ) -> Result<RemoveOutcome, BlogRepositoryError>;

    /// Consistent snapshot of every live entry.
    async fn list(&self) -> Result<Vec<BlogEntry>, BlogRepositoryError>;

    /// Drop every entry.
    async fn clear(&self) -> Result<(), BlogRepositoryError>;
}
