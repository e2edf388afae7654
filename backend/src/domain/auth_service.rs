//! Session issuer implementing the [`LoginService`] port.
//!
//! Verifies credentials against the user repository, mints bearer tokens and
//! resolves them back to users. Only token digests are handed to the
//! session store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::TimeDelta;
use mockable::Clock;
use tokio::task::{self, JoinError};
use tracing::{error, info, warn};
use zeroize::Zeroizing;

use crate::domain::blog_service::map_user_repository_error;
use crate::domain::ports::{
    LoginOutcome, LoginService, PasswordHashError, PasswordHasher, SessionStore,
    SessionStoreError, UserRepository,
};
use crate::domain::{BearerToken, Error, LoginCredentials, Session, UserId};

/// Message returned for every failed login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Wrong username or password";

// A fresh 256-bit token colliding twice in a row means the RNG is broken.
const TOKEN_ATTEMPTS: usize = 2;

/// Well-formed Argon2id hash with the default cost parameters that matches
/// no password. Verified on the unknown-username path so both login failures
/// cost one verification.
pub(crate) const UNKNOWN_USER_HASH: &str = concat!(
    "$argon2id$v=19$m=19456,t=2,p=1",
    "$c29tZXNhbHRzb21lc2FsdA",
    "$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
);

pub(crate) fn map_session_store_error(err: SessionStoreError) -> Error {
    error!(error = %err, "session store failure");
    Error::internal(format!("session store error: {err}"))
}

fn map_password_hash_error(err: PasswordHashError) -> Error {
    error!(error = %err, "password hasher failure");
    Error::internal("credential verification failed")
}

fn map_join_error(err: JoinError) -> Error {
    error!(error = %err, "password hashing task failed");
    Error::internal("credential verification failed")
}

/// Hash `password` on the blocking pool so the async worker keeps serving.
pub(crate) async fn hash_password(
    hasher: &Arc<dyn PasswordHasher>,
    password: &str,
) -> Result<String, Error> {
    let hasher = Arc::clone(hasher);
    let password = Zeroizing::new(password.to_owned());
    task::spawn_blocking(move || hasher.hash(password.as_str()))
        .await
        .map_err(map_join_error)?
        .map_err(map_password_hash_error)
}

/// Verify `password` against `hash` on the blocking pool.
pub(crate) async fn verify_password(
    hasher: &Arc<dyn PasswordHasher>,
    password: &str,
    hash: &str,
) -> Result<bool, Error> {
    let hasher = Arc::clone(hasher);
    let password = Zeroizing::new(password.to_owned());
    let hash = hash.to_owned();
    task::spawn_blocking(move || hasher.verify(password.as_str(), &hash))
        .await
        .map_err(map_join_error)?
        .map_err(map_password_hash_error)
}

fn stale_token() -> Error {
    Error::unauthorized("token is missing, expired or revoked")
}

/// Login service over a user repository and a session store.
#[derive(Clone)]
pub struct AuthService<U, S> {
    users: Arc<U>,
    sessions: Arc<S>,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
    session_ttl: TimeDelta,
}

impl<U, S> AuthService<U, S> {
    /// Build the service. `session_ttl` bounds how long issued tokens resolve.
    pub fn new(
        users: Arc<U>,
        sessions: Arc<S>,
        hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
        session_ttl: TimeDelta,
    ) -> Self {
        Self {
            users,
            sessions,
            hasher,
            clock,
            session_ttl,
        }
    }
}

impl<U, S> AuthService<U, S>
where
    S: SessionStore,
{
    async fn issue(&self, user_id: &UserId) -> Result<BearerToken, Error> {
        let now = self.clock.utc();
        let expires_at = now.checked_add_signed(self.session_ttl).ok_or_else(|| {
            error!(ttl_secs = self.session_ttl.num_seconds(), "session expiry overflowed");
            Error::internal("session expiry is out of range")
        })?;

        let purged = self
            .sessions
            .purge_expired(now)
            .await
            .map_err(map_session_store_error)?;
        if purged > 0 {
            info!(purged, "expired sessions purged");
        }

        let mut attempts = 0;
        loop {
            attempts += 1;
            let token = BearerToken::generate();
            let session = Session {
                token_digest: token.digest(),
                user_id: user_id.clone(),
                expires_at,
            };
            match self.sessions.save(session).await {
                Ok(()) => return Ok(token),
                Err(SessionStoreError::DuplicateToken) if attempts < TOKEN_ATTEMPTS => {
                    warn!(attempts, "session token collision, retrying");
                }
                Err(err) => return Err(map_session_store_error(err)),
            }
        }
    }
}

#[async_trait]
impl<U, S> LoginService for AuthService<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, Error> {
        let record = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_user_repository_error)?;

        let Some(record) = record else {
            verify_password(&self.hasher, credentials.password(), UNKNOWN_USER_HASH).await?;
            warn!(username = credentials.username(), "login rejected: unknown username");
            return Err(Error::invalid_credentials(INVALID_CREDENTIALS_MESSAGE));
        };

        let matches =
            verify_password(&self.hasher, credentials.password(), &record.password_hash).await?;
        if !matches {
            warn!(username = credentials.username(), "login rejected: password mismatch");
            return Err(Error::invalid_credentials(INVALID_CREDENTIALS_MESSAGE));
        }

        let token = self.issue(record.user.id()).await?;
        info!(user_id = %record.user.id(), "session issued");
        Ok(LoginOutcome {
            token,
            user: record.user,
        })
    }

    async fn logout(&self, token: &BearerToken) -> Result<(), Error> {
        let existed = self
            .sessions
            .revoke(&token.digest())
            .await
            .map_err(map_session_store_error)?;
        if existed {
            info!("session revoked");
        }
        Ok(())
    }

    async fn resolve(&self, token: &BearerToken) -> Result<UserId, Error> {
        let digest = token.digest();
        let session = self
            .sessions
            .find(&digest)
            .await
            .map_err(map_session_store_error)?
            .ok_or_else(stale_token)?;

        if !session.is_live_at(self.clock.utc()) {
            self.sessions
                .revoke(&digest)
                .await
                .map_err(map_session_store_error)?;
            return Err(stale_token());
        }

        let user = self
            .users
            .find_by_id(&session.user_id)
            .await
            .map_err(map_user_repository_error)?;
        if user.is_none() {
            let dropped = self
                .sessions
                .revoke_user(&session.user_id)
                .await
                .map_err(map_session_store_error)?;
            warn!(user_id = %session.user_id, dropped, "sessions revoked for missing user");
            return Err(stale_token());
        }

        Ok(session.user_id)
    }
}

#[cfg(test)]
#[path = "auth_service_tests.rs"]
mod tests;
