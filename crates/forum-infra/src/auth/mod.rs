//! Authentication implementations.

#[cfg(feature = "auth")]
mod jwt;
mod password;

#[cfg(feature = "auth")]
pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;
