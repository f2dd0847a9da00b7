//! # Forum Core
//!
//! The domain layer of the forum backend.
//! This crate contains the entity model, validation rules and lifecycle hooks,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod hooks;
pub mod ports;
pub mod validation;

pub use error::{DomainError, RepoError};
