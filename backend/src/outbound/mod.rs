//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local repositories and session store guarded by
//!   `tokio::sync::RwLock`.
//! - **crypto**: Argon2 password hashing.
//!
//! Adapters are thin translators. The only domain rule they apply is the
//! ownership guard inside the atomic remove, so the check and the removal
//! cannot be interleaved with another writer.

pub mod crypto;
pub mod memory;
