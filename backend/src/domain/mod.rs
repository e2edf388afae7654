//! Domain primitives, aggregates and use-case services.
//!
//! Purpose: define strongly typed entities shared by the HTTP adapter and the
//! storage adapters, plus the services that enforce blog ownership, like
//! counting and listing order. Nothing in this module depends on actix.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User / UserId / Username / DisplayName: registered identities.
//! - BlogEntry / BlogId / BlogDraft: published blog entries.
//! - ranking: total order used when listing entries.
//! - authorization: ownership predicate guarding deletes.
//! - ports: traits at the edges of the hexagon.

pub mod auth;
pub mod auth_service;
pub mod authorization;
pub mod blog;
pub mod blog_service;
pub mod error;
pub mod ports;
pub mod ranking;
pub mod reset_service;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::auth::{
    BearerToken, LoginCredentials, LoginValidationError, Registration,
    RegistrationValidationError, Session,
};
pub use self::auth_service::AuthService;
pub use self::blog::{BlogDraft, BlogEntry, BlogId, BlogValidationError};
pub use self::blog_service::BlogService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::reset_service::ResetService;
pub use self::trace_id::TraceId;
pub use self::user::{DisplayName, User, UserId, UserValidationError, Username};
pub use self::user_service::UserRegistrationService;

/// HTTP header name used to surface the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
