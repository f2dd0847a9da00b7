//! # Forum Shared
//!
//! Types shared between the server and whatever renders its responses:
//! request/response DTOs, problem details and display helpers.

pub mod dto;
pub mod format;
pub mod response;

pub use response::ErrorResponse;
