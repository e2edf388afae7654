//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;
use chrono::Utc;

use crate::domain::ports::{
    MockBlogCommand, MockBlogQuery, MockLoginService, MockStateReset, MockUserRegistration,
};
use crate::domain::{BlogDraft, BlogEntry, BlogId, DisplayName, User, UserId, Username};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Token used by handler tests; any value resolves when the login mock says so.
pub const TEST_TOKEN: &str = "test-token";

/// One mock per driving port.
#[derive(Default)]
pub struct MockPorts {
    pub login: MockLoginService,
    pub users: MockUserRegistration,
    pub blogs: MockBlogCommand,
    pub blogs_query: MockBlogQuery,
    pub reset: MockStateReset,
}

impl MockPorts {
    /// Mocks whose login port resolves every token to `user_id`.
    pub fn authenticated_as(user_id: &UserId) -> Self {
        let mut ports = Self::default();
        let resolved = user_id.clone();
        ports
            .login
            .expect_resolve()
            .returning(move |_| Ok(resolved.clone()));
        ports
    }

    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(HttpStatePorts {
            login: Arc::new(self.login),
            users: Arc::new(self.users),
            blogs: Arc::new(self.blogs),
            blogs_query: Arc::new(self.blogs_query),
            reset: Arc::new(self.reset),
        }))
    }
}

pub fn bearer_header() -> (&'static str, String) {
    ("Authorization", format!("Bearer {TEST_TOKEN}"))
}

pub fn sample_user(username: &str) -> User {
    User::new(
        UserId::random(),
        Username::new(username).expect("username"),
        DisplayName::new("Andrew Padgett").expect("display name"),
    )
}

pub fn sample_entry(owner: &UserId, title: &str, likes: u64, sequence: u64) -> BlogEntry {
    let draft = BlogDraft::try_from_parts(title, "Ferris", "https://blogs.test/post")
        .expect("valid draft");
    let mut entry = BlogEntry::create(BlogId::random(), draft, owner.clone(), sequence, Utc::now());
    for _ in 0..likes {
        entry.record_like();
    }
    entry
}
