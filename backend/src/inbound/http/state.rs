//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend only
//! on driving ports and stay testable without real adapters.

use std::sync::Arc;

use crate::domain::ports::{BlogCommand, BlogQuery, LoginService, StateReset, UserRegistration};

/// Parameter object bundling the port implementations handlers need.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UserRegistration>,
    pub blogs: Arc<dyn BlogCommand>,
    pub blogs_query: Arc<dyn BlogQuery>,
    pub reset: Arc<dyn StateReset>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UserRegistration>,
    pub blogs: Arc<dyn BlogCommand>,
    pub blogs_query: Arc<dyn BlogQuery>,
    pub reset: Arc<dyn StateReset>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            users,
            blogs,
            blogs_query,
            reset,
        } = ports;
        Self {
            login,
            users,
            blogs,
            blogs_query,
            reset,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
