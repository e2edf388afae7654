//! Blog-sharing backend library.
//!
//! Users register and log in for a bearer token, publish blog links, like
//! them and list them by popularity. Only the creator of an entry may delete
//! it. The crate is split hexagonally: [`domain`] holds types, services and
//! ports; [`inbound`] and [`outbound`] hold the adapters.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(test)]
pub(crate) mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
