//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports (`LoginService`, `UserRegistration`, `BlogCommand`,
//! `BlogQuery`, `StateReset`) are called by inbound adapters. Driven ports
//! (`BlogRepository`, `UserRepository`, `SessionStore`, `PasswordHasher`) are
//! implemented by outbound adapters and expose strongly typed errors so
//! services can map failures predictably.

mod macros;
pub(crate) use macros::define_port_error;

mod blog_command;
mod blog_query;
mod blog_repository;
mod login_service;
mod password_hasher;
mod session_store;
mod state_reset;
mod user_registration;
mod user_repository;

#[cfg(test)]
pub use blog_command::MockBlogCommand;
pub use blog_command::{BlogCommand, CreateBlogRequest};
#[cfg(test)]
pub use blog_query::MockBlogQuery;
pub use blog_query::BlogQuery;
#[cfg(test)]
pub use blog_repository::MockBlogRepository;
pub use blog_repository::{BlogRepository, BlogRepositoryError, RemoveOutcome};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{LoginOutcome, LoginService};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{SessionStore, SessionStoreError};
#[cfg(test)]
pub use state_reset::MockStateReset;
pub use state_reset::StateReset;
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRecord, UserRepository, UserRepositoryError};
