//! Server configuration derived from [`AppSettings`].

use std::net::SocketAddr;

use chrono::TimeDelta;

use bloglist::config::{AppSettings, SettingsError};

/// Validated settings the server is built from.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub testing_endpoints: bool,
    pub session_ttl: TimeDelta,
}

impl TryFrom<&AppSettings> for ServerConfig {
    type Error = SettingsError;

    fn try_from(settings: &AppSettings) -> Result<Self, Self::Error> {
        Ok(Self {
            bind_addr: settings.bind_addr(),
            testing_endpoints: settings.testing_endpoints,
            session_ttl: settings.session_ttl()?,
        })
    }
}
