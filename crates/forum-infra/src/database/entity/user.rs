//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use forum_core::domain::UserInsert;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Only ever holds a digest.
    #[sea_orm(column_name = "password")]
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::vote::Entity")]
    Vote,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
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

/// `voted_posts`: the posts a user voted on, through `vote`.
#[derive(Debug)]
pub struct VotedPosts;

impl Linked for VotedPosts {
    type FromEntity = Entity;
    type ToEntity = super::post::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::vote::Relation::User.def().rev(),
            super::vote::Relation::Post.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for forum_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
        }
    }
}

/// A hashed registration becomes a fresh row; the id is assigned by the store.
impl From<UserInsert> for ActiveModel {
    fn from(user: UserInsert) -> Self {
        Self {
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            ..Default::default()
        }
    }
}
