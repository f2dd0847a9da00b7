//! SeaORM entity definitions for the `user`, `post`, `comment` and `vote` tables.

pub mod comment;
pub mod post;
pub mod user;
pub mod vote;
