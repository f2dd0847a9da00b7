//! Table and index definitions derived from the entities.

use sea_orm::sea_query::{Index, IndexCreateStatement, Table, TableCreateStatement, TableDropStatement};
use sea_orm::{ConnectionTrait, DbBackend, DbConn, DbErr, EntityTrait, Schema};

use super::StoreOptions;
use super::entity::{comment, post, user, vote};

pub const VOTE_UNIQUE_INDEX: &str = "idx_vote_user_post";

/// `CREATE TABLE` statements in dependency order.
pub fn table_statements(backend: DbBackend) -> Vec<TableCreateStatement> {
    let schema = Schema::new(backend);
    vec![
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(post::Entity),
        schema.create_table_from_entity(comment::Entity),
        schema.create_table_from_entity(vote::Entity),
    ]
}

/// Secondary indexes for the `indexed` foreign key columns.
pub fn index_statements(backend: DbBackend) -> Vec<IndexCreateStatement> {
    let schema = Schema::new(backend);
    let mut indexes = Vec::new();
    indexes.extend(schema.create_index_from_entity(post::Entity));
    indexes.extend(schema.create_index_from_entity(comment::Entity));
    indexes.extend(schema.create_index_from_entity(vote::Entity));
    indexes
}

/// Unique `(user_id, post_id)` index, only created when duplicate votes are disallowed.
pub fn vote_unique_index() -> IndexCreateStatement {
    Index::create()
        .name(VOTE_UNIQUE_INDEX)
        .table(vote::Entity)
        .col(vote::Column::UserId)
        .col(vote::Column::PostId)
        .unique()
        .if_not_exists()
        .to_owned()
}

/// `DROP TABLE` statements in reverse dependency order.
pub fn drop_statements() -> Vec<TableDropStatement> {
    fn drop<E: EntityTrait>(entity: E) -> TableDropStatement {
        Table::drop().table(entity).if_exists().to_owned()
    }

    vec![
        drop(vote::Entity),
        drop(comment::Entity),
        drop(post::Entity),
        drop(user::Entity),
    ]
}

/// Create missing tables and indexes on an open connection.
pub async fn create_schema(db: &DbConn, options: StoreOptions) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    for mut table in table_statements(backend) {
        table.if_not_exists();
        db.execute(backend.build(&table)).await?;
    }

    for mut index in index_statements(backend) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    if options.unique_votes {
        db.execute(backend.build(&vote_unique_index())).await?;
    }

    tracing::info!(unique_votes = options.unique_votes, "Schema synchronized");
    Ok(())
}
