//! Driving port for creating and listing users.

use async_trait::async_trait;

use crate::domain::{Error, Registration, User};

/// User directory use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Register a user. Fails with `Conflict` when the username is taken.
    async fn register(&self, registration: Registration) -> Result<User, Error>;

    /// Every registered user ordered by username.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
