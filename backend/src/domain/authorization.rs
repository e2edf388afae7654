//! Ownership guard for mutating blog entries.

use super::{BlogEntry, Error, UserId};

/// `true` iff `caller` owns `entry`.
#[must_use]
pub fn can_delete(entry: &BlogEntry, caller: &UserId) -> bool {
    entry.owner() == caller
}

/// The error reported when a non-owner attempts a delete. Its
/// [`crate::domain::ErrorCode::Forbidden`] code is distinct from "not found"
/// so clients can tell a rejected removal from a missing entry.
#[must_use]
pub fn forbidden_delete() -> Error {
    Error::forbidden("only the creator can delete a blog")
}
