//! Blog domain service.
//!
//! Implements the blog driving ports on top of the blog and user
//! repositories: ownership is checked through the authorization guard and
//! listings go through the ranking policy.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, info, warn};

use crate::domain::ports::{
    BlogCommand, BlogQuery, BlogRepository, BlogRepositoryError, CreateBlogRequest, RemoveOutcome,
    UserRepository, UserRepositoryError,
};
use crate::domain::{BlogDraft, BlogEntry, BlogId, Error, UserId, authorization, ranking};

pub(crate) fn map_blog_repository_error(err: BlogRepositoryError) -> Error {
    error!(error = %err, "blog repository failure");
    match err {
        BlogRepositoryError::Connection { message } => {
            Error::internal(format!("blog repository unavailable: {message}"))
        }
        BlogRepositoryError::Query { message } => {
            Error::internal(format!("blog repository error: {message}"))
        }
    }
}

pub(crate) fn map_user_repository_error(err: UserRepositoryError) -> Error {
    error!(error = %err, "user repository failure");
    Error::internal(format!("user repository error: {err}"))
}

fn blog_not_found(id: &BlogId) -> Error {
    Error::not_found(format!("blog {id} not found"))
}

/// Blog service implementing [`BlogCommand`] and [`BlogQuery`].
#[derive(Clone)]
pub struct BlogService<B, U> {
    blogs: Arc<B>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<B, U> BlogService<B, U> {
    /// Create a service over the given repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bloglist::domain::BlogService;
    /// use bloglist::outbound::memory::{InMemoryBlogRepository, InMemoryUserRepository};
    /// use mockable::DefaultClock;
    ///
    /// let service = BlogService::new(
    ///     Arc::new(InMemoryBlogRepository::default()),
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(blogs: Arc<B>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            blogs,
            users,
            clock,
        }
    }
}

#[async_trait]
impl<B, U> BlogCommand for BlogService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    async fn create(&self, owner: &UserId, request: CreateBlogRequest) -> Result<BlogEntry, Error> {
        let user = self
            .users
            .find_by_id(owner)
            .await
            .map_err(map_user_repository_error)?;
        if user.is_none() {
            return Err(Error::unauthorized("credential does not resolve to a live user"));
        }

        let draft = BlogDraft::try_from_parts(&request.title, &request.author, &request.url)?;
        let entry = self
            .blogs
            .insert(draft, owner, self.clock.utc())
            .await
            .map_err(map_blog_repository_error)?;

        info!(blog_id = %entry.id(), owner = %owner, "blog created");
        Ok(entry)
    }

    async fn like(&self, id: &BlogId) -> Result<BlogEntry, Error> {
        self.blogs
            .increment_likes(id)
            .await
            .map_err(map_blog_repository_error)?
            .ok_or_else(|| blog_not_found(id))
    }

    async fn delete(&self, id: &BlogId, caller: &UserId) -> Result<(), Error> {
        let outcome = self
            .blogs
            .remove_owned(id, caller)
            .await
            .map_err(map_blog_repository_error)?;

        match outcome {
            RemoveOutcome::Removed(entry) => {
                info!(blog_id = %entry.id(), owner = %caller, "blog deleted");
                Ok(())
            }
            RemoveOutcome::NotOwner(entry) => {
                warn!(
                    blog_id = %entry.id(),
                    owner = %entry.owner(),
                    caller = %caller,
                    "delete rejected for non-owner"
                );
                Err(authorization::forbidden_delete())
            }
            RemoveOutcome::Missing => Err(blog_not_found(id)),
        }
    }
}

#[async_trait]
impl<B, U> BlogQuery for BlogService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    async fn list(&self) -> Result<Vec<BlogEntry>, Error> {
        let snapshot = self
            .blogs
            .list()
            .await
            .map_err(map_blog_repository_error)?;
        Ok(ranking::ranked(snapshot))
    }

    async fn get(&self, id: &BlogId) -> Result<BlogEntry, Error> {
        self.blogs
            .find_by_id(id)
            .await
            .map_err(map_blog_repository_error)?
            .ok_or_else(|| blog_not_found(id))
    }
}

#[cfg(test)]
#[path = "blog_service_tests.rs"]
mod tests;
