//! Driving port behind the test-only reset endpoint.

use async_trait::async_trait;

use crate::domain::Error;

/// Wipes every store. Only mounted when testing endpoints are enabled.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StateReset: Send + Sync {
    /// Remove all blogs, users and sessions.
    async fn reset(&self) -> Result<(), Error>;
}
