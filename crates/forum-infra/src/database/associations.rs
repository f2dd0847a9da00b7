//! Aggregate projections over the entity graph.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, DbConn, EntityTrait, FromQueryResult, LoaderTrait, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use forum_core::domain::{AuthorView, CommentView, PostView, PostVoters, UserVotes, VoterView};
use forum_core::error::RepoError;
use forum_core::ports::AssociationRepository;

use super::base::map_db_err;
use super::entity::{comment, post, user, vote};

#[derive(Debug, FromQueryResult)]
struct VoteCount {
    post_id: i32,
    vote_count: i64,
}

/// SeaORM implementation of the association layer.
///
/// A projection costs a fixed number of queries regardless of how many posts
/// it covers: posts, comments, authors and grouped vote counts.
pub struct SeaOrmAssociationRepository {
    db: DbConn,
}

impl SeaOrmAssociationRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn project(&self, posts: Vec<post::Model>) -> Result<Vec<PostView>, RepoError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let comments = posts
            .load_many(comment::Entity, &self.db)
            .await
            .map_err(map_db_err)?;

        let post_ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
        let vote_counts = self.vote_counts(&post_ids).await?;

        let author_ids: BTreeSet<i32> = posts
            .iter()
            .map(|p| p.user_id)
            .chain(comments.iter().flatten().map(|c| c.user_id))
            .collect();
        let usernames = self.usernames(author_ids).await?;
        let author = |user_id: i32| -> Result<AuthorView, RepoError> {
            usernames
                .get(&user_id)
                .map(|username| AuthorView {
                    username: username.clone(),
                })
                .ok_or_else(|| {
                    RepoError::DanglingReference(format!("user {user_id} does not exist"))
                })
        };

        posts
            .into_iter()
            .zip(comments)
            .map(|(post, mut comments)| {
                comments.sort_by_key(|c| (c.created_at, c.id));
                let comments = comments
                    .into_iter()
                    .map(|c| {
                        Ok(CommentView {
                            user: author(c.user_id)?,
                            id: c.id,
                            comment_text: c.comment_text,
                            post_id: c.post_id,
                            user_id: c.user_id,
                            created_at: c.created_at.into(),
                        })
                    })
                    .collect::<Result<Vec<_>, RepoError>>()?;

                Ok(PostView {
                    user: author(post.user_id)?,
                    vote_count: vote_counts.get(&post.id).copied().unwrap_or(0),
                    id: post.id,
                    post_url: post.post_url,
                    title: post.title,
                    created_at: post.created_at.into(),
                    comments,
                })
            })
            .collect()
    }

    /// `SELECT post_id, COUNT(id) FROM vote WHERE post_id IN (..) GROUP BY post_id`
    async fn vote_counts(&self, post_ids: &[i32]) -> Result<HashMap<i32, i64>, RepoError> {
        let count = SimpleExpr::from(Func::count(Expr::col((vote::Entity, vote::Column::Id))));

        let rows = vote::Entity::find()
            .select_only()
            .column(vote::Column::PostId)
            .column_as(count, "vote_count")
            .filter(vote::Column::PostId.is_in(post_ids.iter().copied()))
            .group_by(vote::Column::PostId)
            .into_model::<VoteCount>()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(|r| (r.post_id, r.vote_count)).collect())
    }

    async fn usernames(&self, user_ids: BTreeSet<i32>) -> Result<HashMap<i32, String>, RepoError> {
        let users = user::Entity::find()
            .filter(user::Column::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(users.into_iter().map(|u| (u.id, u.username)).collect())
    }
}

#[async_trait]
impl AssociationRepository for SeaOrmAssociationRepository {
    async fn post_feed(&self) -> Result<Vec<PostView>, RepoError> {
        let posts = post::Entity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(posts = posts.len(), "Projecting post feed");
        self.project(posts).await
    }

    async fn post_view(&self, post_id: i32) -> Result<Option<PostView>, RepoError> {
        let Some(post) = post::Entity::find_by_id(post_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        Ok(self.project(vec![post]).await?.into_iter().next())
    }

    async fn user_with_voted_posts(&self, user_id: i32) -> Result<Option<UserVotes>, RepoError> {
        let Some(user) = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let voted_posts = user
            .find_linked(user::VotedPosts)
            .distinct()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(UserVotes::new(
            user.into(),
            voted_posts.into_iter().map(Into::into).collect(),
        )))
    }

    async fn post_with_voters(&self, post_id: i32) -> Result<Option<PostVoters>, RepoError> {
        let Some(post) = post::Entity::find_by_id(post_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let voters = post
            .find_linked(post::Voters)
            .distinct()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|u| VoterView {
                id: u.id,
                username: u.username,
            })
            .collect();

        Ok(Some(PostVoters::new(post.into(), voters)))
    }
}
