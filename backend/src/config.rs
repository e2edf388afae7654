//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `BLOGLIST_*` environment variables and
//! configuration files, in the precedence `ortho_config` applies.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use chrono::TimeDelta;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3003;
const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
/// Longest accepted bearer token lifetime: 366 days.
pub const MAX_SESSION_TTL_SECS: u64 = 366 * 24 * 60 * 60;

/// Rejected setting combinations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Tokens would expire the moment they are issued.
    #[error("session_ttl_secs must be greater than zero")]
    ZeroSessionTtl,
    /// The lifetime exceeds [`MAX_SESSION_TTL_SECS`].
    #[error("session_ttl_secs {0} exceeds the maximum of {MAX_SESSION_TTL_SECS}")]
    SessionTtlTooLarge(u64),
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOGLIST")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<IpAddr>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Mount `POST /api/testing/reset`.
    #[ortho_config(default = false)]
    pub testing_endpoints: bool,
    /// Bearer token lifetime in seconds.
    pub session_ttl_secs: Option<u64>,
}

impl AppSettings {
    /// Address the server listens on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Validated session lifetime.
    pub fn session_ttl(&self) -> Result<TimeDelta, SettingsError> {
        let secs = self.session_ttl_secs.unwrap_or(DEFAULT_SESSION_TTL_SECS);
        if secs == 0 {
            return Err(SettingsError::ZeroSessionTtl);
        }
        if secs > MAX_SESSION_TTL_SECS {
            return Err(SettingsError::SessionTtlTooLarge(secs));
        }
        i64::try_from(secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .ok_or(SettingsError::SessionTtlTooLarge(secs))
    }
}
