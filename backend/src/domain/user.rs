//! Registered user identities.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a canonical UUID.
    #[error("user id must be a valid UUID")]
    InvalidId,
    /// The username was blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// The username was shorter than [`USERNAME_MIN`].
    #[error("username must be at least {min} characters")]
    UsernameTooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },
    /// The display name was blank once trimmed.
    #[error("name must not be empty")]
    EmptyDisplayName,
    /// The display name exceeded [`DISPLAY_NAME_MAX`].
    #[error("name must be at most {max} characters")]
    DisplayNameTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;
/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 64;

/// Login handle, unique across users.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace.
/// - At least [`USERNAME_MIN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    ///
    /// # Examples
    /// ```
    /// use bloglist::domain::Username;
    ///
    /// let name = Username::new("  adp10390 ").expect("valid username");
    /// assert_eq!(name.as_ref(), "adp10390");
    /// assert!(Username::new("ab").is_err());
    /// ```
    pub fn new(username: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = username.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if trimmed.chars().count() < USERNAME_MIN {
            return Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Human readable name shown next to a user's activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    pub fn new(display_name: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = display_name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        if trimmed.chars().count() > DISPLAY_NAME_MAX {
            return Err(UserValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Application user.
///
/// The stored credential is deliberately absent: it belongs to the user
/// repository record and never leaves the credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    display_name: DisplayName,
}

impl User {
    /// Build a user from validated components.
    #[must_use]
    pub fn new(id: UserId, username: Username, display_name: DisplayName) -> Self {
        Self {
            id,
            username,
            display_name,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Login handle.
    #[must_use]
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Display name.
    #[must_use]
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for user value types.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", UserValidationError::EmptyId)]
    #[case("not-a-uuid", UserValidationError::InvalidId)]
    fn user_id_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
        assert_eq!(UserId::new(raw), Err(expected));
    }

    #[rstest]
    fn user_id_round_trips_through_serde() {
        let id = UserId::random();
        let json = serde_json::to_string(&id).expect("serialise");
        let back: UserId = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, id);
    }

    #[rstest]
    #[case("", UserValidationError::EmptyUsername)]
    #[case("   ", UserValidationError::EmptyUsername)]
    #[case(" ab ", UserValidationError::UsernameTooShort { min: USERNAME_MIN })]
    fn username_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
        assert_eq!(Username::new(raw), Err(expected));
    }

    #[rstest]
    fn display_name_is_trimmed() {
        let name = DisplayName::new("  Andrew Padgett ").expect("valid name");
        assert_eq!(name.as_ref(), "Andrew Padgett");
    }

    #[rstest]
    fn display_name_rejects_overlong_input() {
        let raw = "x".repeat(DISPLAY_NAME_MAX + 1);
        assert_eq!(
            DisplayName::new(raw),
            Err(UserValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX
            })
        );
    }
}
