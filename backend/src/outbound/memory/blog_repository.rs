//! `BlogRepository` adapter backed by a locked hash map.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::authorization;
use crate::domain::ports::{BlogRepository, BlogRepositoryError, RemoveOutcome};
use crate::domain::{BlogDraft, BlogEntry, BlogId, UserId};

#[derive(Debug, Default)]
struct BlogTable {
    entries: HashMap<BlogId, BlogEntry>,
    next_sequence: u64,
}

/// In-memory blog store.
///
/// Creation sequences keep increasing across [`BlogRepository::clear`] so an
/// entry created after a reset never ties with a stale snapshot.
#[derive(Debug, Default)]
pub struct InMemoryBlogRepository {
    table: RwLock<BlogTable>,
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn insert(
        &self,
        draft: BlogDraft,
        owner: &UserId,
        created_at: DateTime<Utc>,
    ) -> Result<BlogEntry, BlogRepositoryError> {
        let mut table = self.table.write().await;
        let sequence = table.next_sequence;
        table.next_sequence = sequence
            .checked_add(1)
            .ok_or_else(|| BlogRepositoryError::query("blog sequence exhausted"))?;

        let mut id = BlogId::random();
        while table.entries.contains_key(&id) {
            id = BlogId::random();
        }
        let entry = BlogEntry::create(id, draft, owner.clone(), sequence, created_at);
        table.entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<BlogEntry>, BlogRepositoryError> {
        Ok(self.table.read().await.entries.get(id).cloned())
    }

    async fn increment_likes(
        &self,
        id: &BlogId,
    ) -> Result<Option<BlogEntry>, BlogRepositoryError> {
        let mut table = self.table.write().await;
        Ok(table.entries.get_mut(id).map(|entry| {
            entry.record_like();
            entry.clone()
        }))
    }

    async fn remove_owned(
        &self,
        id: &BlogId,
        caller: &UserId,
    ) -> Result<RemoveOutcome, BlogRepositoryError> {
        let mut table = self.table.write().await;
        let Some(entry) = table.entries.get(id) else {
            return Ok(RemoveOutcome::Missing);
        };
        if !authorization::can_delete(entry, caller) {
            return Ok(RemoveOutcome::NotOwner(entry.clone()));
        }
        Ok(table
            .entries
            .remove(id)
            .map_or(RemoveOutcome::Missing, RemoveOutcome::Removed))
    }

    async fn list(&self) -> Result<Vec<BlogEntry>, BlogRepositoryError> {
        Ok(self.table.read().await.entries.values().cloned().collect())
    }

    async fn clear(&self) -> Result<(), BlogRepositoryError> {
        self.table.write().await.entries.clear();
        Ok(())
    }
}
