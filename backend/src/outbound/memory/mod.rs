//! In-memory adapters.
//!
//! Each adapter keeps its state behind a single `RwLock`: writers are
//! serialised, readers clone a consistent snapshot.

mod blog_repository;
mod session_store;
mod user_repository;

pub use blog_repository::InMemoryBlogRepository;
pub use session_store::InMemorySessionStore;
pub use user_repository::InMemoryUserRepository;
