//! Driving port for reading blog entries.

use async_trait::async_trait;

use crate::domain::{BlogEntry, BlogId, Error};

/// Read-only blog use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogQuery: Send + Sync {
    /// Every live entry in ranking order, recomputed on each call.
    async fn list(&self) -> Result<Vec<BlogEntry>, Error>;

    /// One entry. Fails with `NotFound` when missing.
    async fn get(&self, id: &BlogId) -> Result<BlogEntry, Error>;
}
