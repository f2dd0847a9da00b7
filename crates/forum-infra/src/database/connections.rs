use std::sync::Arc;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn};

use forum_core::error::RepoError;
use forum_core::ports::PasswordService;

use super::associations::SeaOrmAssociationRepository;
use super::base::map_db_err;
use super::repository::{
    SeaOrmCommentRepository, SeaOrmPostRepository, SeaOrmUserRepository, SeaOrmVoteRepository,
};
use super::schema;

/// Connection settings for the store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub sqlx_logging: bool,
    /// Recycle pooled connections after this long. `None` keeps the pool default.
    pub max_lifetime: Option<Duration>,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            sqlx_logging: true,
            max_lifetime: None,
        }
    }
}

/// Store behaviour that is configurable per deployment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    /// Reject a second vote by the same user on the same post.
    pub unique_votes: bool,
}

impl StoreOptions {
    /// Load from `VOTE_UNIQUE` (`1`, `true`, `yes` or `on`).
    pub fn from_env() -> Self {
        Self {
            unique_votes: std::env::var("VOTE_UNIQUE")
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Explicitly constructed handle to the store.
///
/// Opened once at process start and handed to every repository; nothing in
/// this crate reaches for a global connection.
///
/// # Example
/// ```ignore
/// let store = StoreClient::connect(&DatabaseConfig::new(url), StoreOptions::default()).await?;
/// let users = store.user_repository(Arc::new(Argon2PasswordService::new()));
/// let user = users.create(NewUser::new("alice", "alice@example.com", "hunter2")).await?;
/// store.close().await?;
/// ```
#[derive(Clone)]
pub struct StoreClient {
    conn: DbConn,
    options: StoreOptions,
}

impl StoreClient {
    /// Open the connection pool.
    pub async fn connect(config: &DatabaseConfig, options: StoreOptions) -> Result<Self, RepoError> {
        tracing::info!("Connecting to the store...");

        let mut opts = ConnectOptions::new(&config.url);
        opts.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(config.sqlx_logging);
        if let Some(lifetime) = config.max_lifetime {
            opts.max_lifetime(lifetime);
        }

        let conn = Database::connect(opts).await.map_err(map_db_err)?;
        tracing::info!(
            pool = config.max_connections,
            unique_votes = options.unique_votes,
            "Store connected"
        );

        Ok(Self { conn, options })
    }

    /// Wrap an already open connection.
    pub fn from_connection(conn: DbConn, options: StoreOptions) -> Self {
        Self { conn, options }
    }

    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Create any missing tables and indexes.
    pub async fn sync_schema(&self) -> Result<(), RepoError> {
        schema::create_schema(&self.conn, self.options)
            .await
            .map_err(map_db_err)
    }

    pub fn user_repository(&self, hasher: Arc<dyn PasswordService>) -> SeaOrmUserRepository {
        SeaOrmUserRepository::new(self.conn.clone(), hasher)
    }

    pub fn post_repository(&self) -> SeaOrmPostRepository {
        SeaOrmPostRepository::new(self.conn.clone())
    }

    pub fn comment_repository(&self) -> SeaOrmCommentRepository {
        SeaOrmCommentRepository::new(self.conn.clone())
    }

    pub fn vote_repository(&self) -> SeaOrmVoteRepository {
        SeaOrmVoteRepository::new(self.conn.clone(), self.options)
    }

    pub fn association_repository(&self) -> SeaOrmAssociationRepository {
        SeaOrmAssociationRepository::new(self.conn.clone())
    }

    /// Close the pool. Repositories created from this client stop working.
    pub async fn close(self) -> Result<(), RepoError> {
        tracing::info!("Closing store connection");
        self.conn.close().await.map_err(map_db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::is_truthy;

    #[test]
    fn test_truthy_flags() {
        for v in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(is_truthy(v), "{v}");
        }
        for v in ["", "0", "false", "off", "nope"] {
            assert!(!is_truthy(v), "{v}");
        }
    }
}
