//! Driving port for login, logout and bearer-token resolution.
//!
//! Inbound adapters call it to authenticate callers without knowing the
//! credential store or session store behind it.

use async_trait::async_trait;

use crate::domain::{BearerToken, Error, LoginCredentials, User, UserId};

/// Successful login: the freshly minted token and who it belongs to.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Opaque bearer credential for subsequent requests.
    pub token: BearerToken,
    /// The authenticated user.
    pub user: User,
}

/// Authentication use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Verify credentials and issue a session.
    ///
    /// Fails with `InvalidCredentials` when the username is unknown or the
    /// password does not match; the two cases are indistinguishable.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, Error>;

    /// Invalidate the session behind `token`.
    async fn logout(&self, token: &BearerToken) -> Result<(), Error>;

    /// Resolve `token` to the live user it was issued for.
    ///
    /// Fails with `Unauthorized` for unknown, expired or orphaned tokens.
    async fn resolve(&self, token: &BearerToken) -> Result<UserId, Error>;
}
