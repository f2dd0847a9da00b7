use async_trait::async_trait;

use crate::domain::{
    Comment, NewComment, NewPost, NewUser, Post, PostView, PostVoters, User, UserChanges,
    UserVotes, Vote,
};
use crate::error::RepoError;

/// Generic read operations shared by every entity repository.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its surrogate key.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// List every entity, ordered by id.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;
}

/// User repository. Writes run the lifecycle hooks before touching the store.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i32> {
    /// Validate, hash and insert a new user.
    async fn create(&self, new_user: NewUser) -> Result<User, RepoError>;

    /// Apply a partial update. A present password is always re-hashed.
    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, RepoError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Return the user only if `password` verifies against the stored digest.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, RepoError>;
}

#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Insert a post. The author must exist.
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError>;

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;
}

#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i32> {
    /// Insert a comment. Both the author and the post must exist.
    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError>;

    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError>;
}

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Record that `user_id` voted on `post_id`.
    async fn cast(&self, user_id: i32, post_id: i32) -> Result<Vote, RepoError>;

    /// Number of vote rows referencing the post.
    async fn count_for_post(&self, post_id: i32) -> Result<u64, RepoError>;
}

/// Read-side projections across the entity graph.
#[async_trait]
pub trait AssociationRepository: Send + Sync {
    /// Every post with author, comments, comment authors and vote count, newest first.
    async fn post_feed(&self) -> Result<Vec<PostView>, RepoError>;

    /// The same projection for a single post.
    async fn post_view(&self, post_id: i32) -> Result<Option<PostView>, RepoError>;

    /// A user and the posts they voted on.
    async fn user_with_voted_posts(&self, user_id: i32) -> Result<Option<UserVotes>, RepoError>;

    /// A post and the users who voted on it.
    async fn post_with_voters(&self, post_id: i32) -> Result<Option<PostVoters>, RepoError>;
}
