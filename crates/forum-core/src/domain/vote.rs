use serde::{Deserialize, Serialize};

/// Vote join entity - one row means `user_id` voted on `post_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub id: i32,
    pub user_id: i32,
    pub post_id: i32,
}
