//! # Forum Infrastructure
//!
//! Concrete implementations of the ports defined in `forum-core`:
//! password hashing, access tokens and the SeaORM-backed entity store.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//! - `sqlite` - SQLite store via SeaORM
//! - `auth` (default) - JWT access tokens

pub mod auth;
pub mod database;

pub use auth::Argon2PasswordService;
#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, StoreClient, StoreOptions};
