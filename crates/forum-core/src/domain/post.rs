use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a shared link with a title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub post_url: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub post_url: String,
    /// The author. Must reference an existing user.
    pub user_id: i32,
}

impl NewPost {
    pub fn new(title: impl Into<String>, post_url: impl Into<String>, user_id: i32) -> Self {
        Self {
            title: title.into(),
            post_url: post_url.into(),
            user_id,
        }
    }
}
