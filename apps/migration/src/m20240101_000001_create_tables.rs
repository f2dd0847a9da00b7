use forum_infra::StoreOptions;
use forum_infra::database::schema;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        for table in schema::table_statements(backend) {
            manager.create_table(table).await?;
        }

        for index in schema::index_statements(backend) {
            manager.create_index(index).await?;
        }

        if StoreOptions::from_env().unique_votes {
            manager.create_index(schema::vote_unique_index()).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in schema::drop_statements() {
            manager.drop_table(table).await?;
        }

        Ok(())
    }
}
