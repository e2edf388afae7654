//! Driven port for password hashing.

use super::define_port_error;

define_port_error! {
    /// Errors raised while hashing or verifying passwords.
    pub enum PasswordHashError {
        /// The hashing backend failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// A stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

/// One-way password hashing.
///
/// Methods are synchronous: hashing is CPU-bound and has no I/O to await.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Produce a self-describing hash string for storage.
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Check `password` against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError>;
}
