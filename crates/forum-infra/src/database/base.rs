use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    DbConn, DbErr, EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder, SqlErr,
};

use forum_core::error::RepoError;
use forum_core::ports::BaseRepository;

/// Generic SeaORM repository implementation.
pub struct SeaOrmBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SeaOrmBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for SeaOrmBaseRepository<E>
where
    E: EntityTrait,
    E::Model: Sync + Send,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id).one(&self.db).await.map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        let result = query.all(&self.db).await.map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

/// Fail with `NotFound` unless a row with this id exists.
pub(crate) async fn ensure_exists<E>(
    db: &DbConn,
    entity_type: &'static str,
    id: i32,
) -> Result<(), RepoError>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    match E::find_by_id(id).one(db).await.map_err(map_db_err)? {
        Some(_) => Ok(()),
        None => Err(RepoError::not_found(entity_type, id)),
    }
}

/// Classify a SeaORM error into the repository taxonomy.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => return RepoError::Uniqueness(detail),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            return RepoError::DanglingReference(detail);
        }
        _ => {}
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}
