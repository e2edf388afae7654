//! Wipes every store for end-to-end test runs.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::Error;
use crate::domain::auth_service::map_session_store_error;
use crate::domain::blog_service::{map_blog_repository_error, map_user_repository_error};
use crate::domain::ports::{BlogRepository, SessionStore, StateReset, UserRepository};

/// [`StateReset`] implementation clearing blogs, users and sessions.
#[derive(Clone)]
pub struct ResetService<B, U, S> {
    blogs: Arc<B>,
    users: Arc<U>,
    sessions: Arc<S>,
}

impl<B, U, S> ResetService<B, U, S> {
    /// Build the service over the three stores it clears.
    pub fn new(blogs: Arc<B>, users: Arc<U>, sessions: Arc<S>) -> Self {
        Self {
            blogs,
            users,
            sessions,
        }
    }
}

#[async_trait]
impl<B, U, S> StateReset for ResetService<B, U, S>
where
    B: BlogRepository,
    U: UserRepository,
    S: SessionStore,
{
    async fn reset(&self) -> Result<(), Error> {
        // Sessions, then users, then blogs. A create whose owner check ran
        // before the users were cleared and whose insert lands after the
        // blogs were cleared leaves an orphaned entry.
        self.sessions
            .clear()
            .await
            .map_err(map_session_store_error)?;
        self.users.clear().await.map_err(map_user_repository_error)?;
        self.blogs.clear().await.map_err(map_blog_repository_error)?;
        info!("application state reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{
        MockBlogRepository, MockSessionStore, MockUserRepository, UserRepositoryError,
    };
    use mockall::Sequence;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn reset_clears_sessions_then_users_then_blogs() {
        let mut seq = Sequence::new();
        let mut sessions = MockSessionStore::new();
        sessions
            .expect_clear()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(()));
        let mut users = MockUserRepository::new();
        users
            .expect_clear()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(()));
        let mut blogs = MockBlogRepository::new();
        blogs
            .expect_clear()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|| Ok(()));

        let service = ResetService::new(Arc::new(blogs), Arc::new(users), Arc::new(sessions));
        service.reset().await.expect("reset");
    }

    #[rstest]
    #[tokio::test]
    async fn reset_stops_at_the_first_failure() {
        let mut users = MockUserRepository::new();
        users
            .expect_clear()
            .times(1)
            .return_once(|| Err(UserRepositoryError::connection("gone")));
        let mut blogs = MockBlogRepository::new();
        blogs.expect_clear().times(0);
        let mut sessions = MockSessionStore::new();
        sessions.expect_clear().times(1).return_once(|| Ok(()));

        let service = ResetService::new(Arc::new(blogs), Arc::new(users), Arc::new(sessions));
        let err = service.reset().await.expect_err("failure");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
