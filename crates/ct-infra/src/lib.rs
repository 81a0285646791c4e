//! # ct-infra
//!
//! Infrastructure implementations of the `ct-core` ports: the SQLite-backed
//! clip store, content hashing and the system clock.

pub mod db;
pub mod hashing;
pub mod store;
pub mod time;

pub use hashing::Sha1ContentHasher;
pub use store::ClipStore;
pub use time::SystemClock;
