//! SeaORM repository implementations.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use forum_core::domain::{Comment, NewComment, NewPost, NewUser, Post, User, UserChanges, Vote};
use forum_core::error::RepoError;
use forum_core::hooks;
use forum_core::ports::{
    BaseRepository, CommentRepository, PasswordService, PostRepository, UserRepository,
    VoteRepository,
};

use super::StoreOptions;
use super::base::{SeaOrmBaseRepository, ensure_exists, map_db_err};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::entity::vote::{self, Entity as VoteEntity};

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmBaseRepository<PostEntity>;

/// SeaORM comment repository.
pub type SeaOrmCommentRepository = SeaOrmBaseRepository<CommentEntity>;

/// SeaORM user repository. Owns the password hasher used by the lifecycle hooks.
pub struct SeaOrmUserRepository {
    base: SeaOrmBaseRepository<UserEntity>,
    hasher: Arc<dyn PasswordService>,
}

impl SeaOrmUserRepository {
    pub fn new(db: DbConn, hasher: Arc<dyn PasswordService>) -> Self {
        Self {
            base: SeaOrmBaseRepository::new(db),
            hasher,
        }
    }

    fn db(&self) -> &DbConn {
        &self.base.db
    }
}

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let masked_local = match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}@{domain}")
        }
        None => "***".to_string(),
    }
}

#[async_trait]
impl BaseRepository<User, i32> for SeaOrmUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        BaseRepository::<User, i32>::find_by_id(&self.base, id).await
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        BaseRepository::<User, i32>::find_all(&self.base).await
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        let insert = hooks::before_create(new_user, self.hasher.as_ref())?;

        let model = user::ActiveModel::from(insert)
            .insert(self.db())
            .await
            .map_err(map_db_err)?;

        tracing::info!(user_id = model.id, "User created");
        Ok(model.into())
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, RepoError> {
        let existing = UserEntity::find_by_id(id)
            .one(self.db())
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::not_found("User", id))?;

        if changes.is_empty() {
            return Ok(existing.into());
        }

        let patch = hooks::before_update(changes, self.hasher.as_ref())?;
        let rehashed = patch.password_hash.is_some();

        let mut active = existing.into_active_model();
        if let Some(username) = patch.username {
            active.username = Set(username);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(password_hash) = patch.password_hash {
            active.password_hash = Set(password_hash);
        }

        let model = active.update(self.db()).await.map_err(map_db_err)?;

        tracing::info!(user_id = model.id, rehashed, "User updated");
        Ok(model.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>, RepoError> {
        let Some(user) = self.find_by_email(email).await? else {
            return Ok(None);
        };

        if self.hasher.verify(password, &user.password_hash) {
            Ok(Some(user))
        } else {
            tracing::warn!(user_id = user.id, "Password verification failed");
            Ok(None)
        }
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        ensure_exists::<UserEntity>(&self.db, "User", new_post.user_id).await?;

        let model = post::ActiveModel::from(new_post)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::info!(post_id = model.id, user_id = model.user_id, "Post created");
        Ok(model.into())
    }

    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        ensure_exists::<UserEntity>(&self.db, "User", new_comment.user_id).await?;
        ensure_exists::<PostEntity>(&self.db, "Post", new_comment.post_id).await?;

        let model = comment::ActiveModel::from(new_comment)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::info!(comment_id = model.id, post_id = model.post_id, "Comment created");
        Ok(model.into())
    }

    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

/// SeaORM vote repository.
pub struct SeaOrmVoteRepository {
    db: DbConn,
    options: StoreOptions,
}

impl SeaOrmVoteRepository {
    pub fn new(db: DbConn, options: StoreOptions) -> Self {
        Self { db, options }
    }
}

#[async_trait]
impl VoteRepository for SeaOrmVoteRepository {
    async fn cast(&self, user_id: i32, post_id: i32) -> Result<Vote, RepoError> {
        ensure_exists::<UserEntity>(&self.db, "User", user_id).await?;
        ensure_exists::<PostEntity>(&self.db, "Post", post_id).await?;

        if self.options.unique_votes {
            let existing = VoteEntity::find()
                .filter(vote::Column::UserId.eq(user_id))
                .filter(vote::Column::PostId.eq(post_id))
                .one(&self.db)
                .await
                .map_err(map_db_err)?;

            if existing.is_some() {
                return Err(RepoError::Uniqueness(format!(
                    "user {user_id} already voted on post {post_id}"
                )));
            }
        }

        let model = vote::ActiveModel::cast(user_id, post_id)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(user_id, post_id, "Vote recorded");
        Ok(model.into())
    }

    async fn count_for_post(&self, post_id: i32) -> Result<u64, RepoError> {
        VoteEntity::find()
            .filter(vote::Column::PostId.eq(post_id))
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@example.com"), "***@example.com");
        assert_eq!(mask_email("no-at-sign"), "***");
    }
}
