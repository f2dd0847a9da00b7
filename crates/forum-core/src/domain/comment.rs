use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity - a user's remark on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub comment_text: String,
    pub user_id: i32,
    pub post_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub comment_text: String,
    pub user_id: i32,
    pub post_id: i32,
}

impl NewComment {
    pub fn new(comment_text: impl Into<String>, user_id: i32, post_id: i32) -> Self {
        Self {
            comment_text: comment_text.into(),
            user_id,
            post_id,
        }
    }
}
