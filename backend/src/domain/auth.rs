//! Authentication primitives: login credentials, registrations, bearer
//! tokens and sessions.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::{DisplayName, UserId, UserValidationError, Username};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use bloglist::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("adp10390", "weakpassword").unwrap();
/// assert_eq!(creds.username(), "adp10390");
/// assert_eq!(creds.password(), "weakpassword");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validation failures raised while parsing a registration payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationValidationError {
    /// Username or display name failed validation.
    #[error(transparent)]
    User(#[from] UserValidationError),
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated request to create a new user.
#[derive(Clone)]
pub struct Registration {
    username: Username,
    display_name: DisplayName,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate raw registration inputs.
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::Registration;
    ///
    /// let reg = Registration::try_from_parts("Andrew Padgett", "adp10390", "weakpassword")
    ///     .expect("valid registration");
    /// assert_eq!(reg.username().as_ref(), "adp10390");
    /// ```
    pub fn try_from_parts(
        name: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, RegistrationValidationError> {
        let display_name = DisplayName::new(name)?;
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(RegistrationValidationError::EmptyPassword);
        }
        Ok(Self {
            username,
            display_name,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested login handle.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Requested display name.
    #[must_use]
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Plain-text password, held only until it has been hashed.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("display_name", &self.display_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

const TOKEN_BYTES: usize = 32;

/// Opaque bearer credential handed to a client after login.
///
/// The raw value is only ever returned to the client; stores keep the
/// [`BearerToken::digest`].
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Mint a fresh token from 32 random bytes, hex encoded.
    #[must_use]
    pub fn generate() -> Self {
        let bytes: [u8; TOKEN_BYTES] = rand::random();
        Self(Zeroizing::new(hex::encode(bytes)))
    }

    /// Wrap a token presented by a client. Returns `None` for blank input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(Zeroizing::new(trimmed.to_owned())))
    }

    /// Raw token value for the login response.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Hex-encoded SHA-256 digest used as the storage key.
    #[must_use]
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.0.as_bytes()))
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Server-side session bound to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Digest of the bearer token that resolves to this session.
    pub token_digest: String,
    /// User the session authenticates.
    pub user_id: UserId,
    /// Instant after which the token no longer resolves.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session is still usable at `now`.
    #[must_use]
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
