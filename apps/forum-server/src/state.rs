//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use forum_core::error::RepoError;
use forum_core::ports::{
    AssociationRepository, CommentRepository, PasswordService, PostRepository, UserRepository,
    VoteRepository,
};
use forum_infra::{Argon2PasswordService, DatabaseConfig, StoreClient, StoreOptions};

/// Shared application state. Every repository is built from the same store client.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub votes: Arc<dyn VoteRepository>,
    pub associations: Arc<dyn AssociationRepository>,
}

impl AppState {
    /// Build the repositories on top of an open store.
    pub fn new(store: &StoreClient, hasher: Arc<dyn PasswordService>) -> Self {
        Self {
            users: Arc::new(store.user_repository(hasher)),
            posts: Arc::new(store.post_repository()),
            comments: Arc::new(store.comment_repository()),
            votes: Arc::new(store.vote_repository()),
            associations: Arc::new(store.association_repository()),
        }
    }

    pub fn with_default_hasher(store: &StoreClient) -> Self {
        Self::new(store, Arc::new(Argon2PasswordService::new()))
    }
}

/// Open the configured store, or an in-memory SQLite store when no
/// `DATABASE_URL` is set.
pub async fn open_store(
    db_config: Option<&DatabaseConfig>,
    options: StoreOptions,
) -> Result<StoreClient, RepoError> {
    match db_config {
        Some(config) => StoreClient::connect(config, options).await,
        None => {
            tracing::warn!("DATABASE_URL not set. Running on an in-memory SQLite store.");
            let store = StoreClient::connect(&in_memory_config(), options).await?;
            store.sync_schema().await?;
            Ok(store)
        }
    }
}

/// An in-memory database lives and dies with its connection, so the pool
/// holds exactly one and never recycles it.
pub fn in_memory_config() -> DatabaseConfig {
    DatabaseConfig {
        max_connections: 1,
        min_connections: 1,
        sqlx_logging: false,
        max_lifetime: Some(Duration::from_secs(100 * 365 * 24 * 60 * 60)),
        ..DatabaseConfig::new("sqlite::memory:")
    }
}
