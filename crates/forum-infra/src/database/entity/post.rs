//! Post entity for SeaORM.

use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;

use forum_core::domain::NewPost;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub post_url: String,
    #[sea_orm(indexed)]
    pub user_id: i32,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    User,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::vote::Entity")]
    Vote,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vote.def()
    }
}

/// The users who voted on a post. Exposed under the same `voted_posts` name
/// as the user side of the association.
#[derive(Debug)]
pub struct Voters;

impl Linked for Voters {
    type FromEntity = Entity;
    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::vote::Relation::Post.def().rev(),
            super::vote::Relation::User.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for forum_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            post_url: model.post_url,
            user_id: model.user_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            title: Set(post.title),
            post_url: Set(post.post_url),
            user_id: Set(post.user_id),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
    }
}
