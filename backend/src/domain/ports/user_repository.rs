//! Driven port for registered users and their stored credentials.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by [`UserRepository`] adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
        /// Another user already holds the username.
        DuplicateUsername { username: String } =>
            "username {username} is already taken",
    }
}

/// A user plus the credential handle the credential store verifies against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Public identity.
    pub user: User,
    /// PHC-formatted password hash.
    pub password_hash: String,
}

/// Credential store and user directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `DuplicateUsername` when taken.
    async fn insert(&self, record: UserRecord) -> Result<(), UserRepositoryError>;

    /// Look a record up by login handle.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Every registered user, ordered by username.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Drop every user.
    async fn clear(&self) -> Result<(), UserRepositoryError>;
}
