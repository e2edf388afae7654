//! Builders wiring in-memory adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use chrono::TimeDelta;
use mockable::Clock;

use bloglist::domain::ports::PasswordHasher;
use bloglist::domain::{AuthService, BlogService, ResetService, UserRegistrationService};
use bloglist::inbound::http::state::{HttpState, HttpStatePorts};
use bloglist::outbound::memory::{
    InMemoryBlogRepository, InMemorySessionStore, InMemoryUserRepository,
};

/// Build handler state over fresh in-memory stores.
///
/// Every service shares the same three stores, so a user registered through
/// one port is visible to login and blog ownership checks.
pub fn build_http_state(
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
    session_ttl: TimeDelta,
) -> web::Data<HttpState> {
    let blogs = Arc::new(InMemoryBlogRepository::default());
    let users = Arc::new(InMemoryUserRepository::default());
    let sessions = Arc::new(InMemorySessionStore::default());

    let login = AuthService::new(
        users.clone(),
        sessions.clone(),
        hasher.clone(),
        clock.clone(),
        session_ttl,
    );
    let registration = UserRegistrationService::new(users.clone(), hasher);
    let blog_service = Arc::new(BlogService::new(blogs.clone(), users.clone(), clock));
    let reset = ResetService::new(blogs, users, sessions);

    web::Data::new(HttpState::new(HttpStatePorts {
        login: Arc::new(login),
        users: Arc::new(registration),
        blogs: blog_service.clone(),
        blogs_query: blog_service,
        reset: Arc::new(reset),
    }))
}
