//! Aggregate projections returned by the association layer.
//!
//! These shapes are what the rendering side consumes, so field names and
//! nesting are part of the external contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Post, User};

/// The author attributes exposed inside a projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorView {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: i32,
    pub comment_text: String,
    pub post_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub user: AuthorView,
}

/// A post with its author, its comments (each with author) and a computed vote count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: i32,
    pub post_url: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub vote_count: i64,
    pub comments: Vec<CommentView>,
    pub user: AuthorView,
}

/// A user together with the posts they voted on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserVotes {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub voted_posts: Vec<Post>,
}

impl UserVotes {
    pub fn new(user: User, voted_posts: Vec<Post>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            voted_posts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterView {
    pub id: i32,
    pub username: String,
}

/// A post together with the users who voted on it.
///
/// The association keeps the `voted_posts` name on this side too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostVoters {
    pub id: i32,
    pub title: String,
    pub post_url: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub voted_posts: Vec<VoterView>,
}

impl PostVoters {
    pub fn new(post: Post, voters: Vec<VoterView>) -> Self {
        Self {
            id: post.id,
            title: post.title,
            post_url: post.post_url,
            user_id: post.user_id,
            created_at: post.created_at,
            voted_posts: voters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_post_view_serialized_shape() {
        let created_at = Utc.with_ymd_and_hms(2020, 3, 20, 16, 12, 3).unwrap();
        let view = PostView {
            id: 1,
            post_url: "https://example.com".to_string(),
            title: "Hello".to_string(),
            created_at,
            vote_count: 2,
            comments: vec![CommentView {
                id: 7,
                comment_text: "Nice".to_string(),
                post_id: 1,
                user_id: 3,
                created_at,
                user: AuthorView {
                    username: "bob".to_string(),
                },
            }],
            user: AuthorView {
                username: "alice".to_string(),
            },
        };

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["vote_count"], 2);
        assert_eq!(json["user"]["username"], "alice");
        assert_eq!(json["comments"][0]["user"]["username"], "bob");
        assert_eq!(json["comments"][0]["comment_text"], "Nice");
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_user_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "alice@example.com");
    }
}
