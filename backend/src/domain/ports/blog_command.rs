//! Driving port for blog mutations.

use async_trait::async_trait;

use crate::domain::{BlogEntry, BlogId, Error, UserId};

/// Raw create payload; validated by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBlogRequest {
    /// Entry title.
    pub title: String,
    /// Author as typed by the publisher.
    pub author: String,
    /// Link to the blog.
    pub url: String,
}

/// Mutating blog use-cases. The caller identity is always passed in
/// explicitly; no ambient session state exists in the domain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogCommand: Send + Sync {
    /// Publish a new entry owned by `owner`.
    ///
    /// Fails with `Unauthorized` when `owner` does not resolve to a live user
    /// and `InvalidRequest` when any field is blank.
    async fn create(&self, owner: &UserId, request: CreateBlogRequest) -> Result<BlogEntry, Error>;

    /// Add one like. Fails with `NotFound` when the entry is missing.
    async fn like(&self, id: &BlogId) -> Result<BlogEntry, Error>;

    /// Remove an entry. Fails with `NotFound` when missing and `Forbidden`
    /// when `caller` is not the owner.
    async fn delete(&self, id: &BlogId, caller: &UserId) -> Result<(), Error>;
}
