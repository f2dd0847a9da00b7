//! Comment entity for SeaORM.

use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;

use forum_core::domain::NewComment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub comment_text: String,
    #[sea_orm(indexed)]
    pub user_id: i32,
    #[sea_orm(indexed)]
    pub post_id: i32,
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
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Restrict",
        on_delete = "Restrict"
    )]
    Post,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for forum_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            comment_text: model.comment_text,
            user_id: model.user_id,
            post_id: model.post_id,
            created_at: model.created_at.into(),
        }
    }
}

impl From<NewComment> for ActiveModel {
    fn from(comment: NewComment) -> Self {
        Self {
            comment_text: Set(comment.comment_text),
            user_id: Set(comment.user_id),
            post_id: Set(comment.post_id),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
    }
}
