use std::path::Path;

use async_trait::async_trait;
use burrow_core::error::StorageError;
use burrow_core::repository::{ReadRepository, Repository, Result, UrlRecord};
use burrow_core::shortcode::ShortCode;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

const SCHEMA: &str = include_str!("../ddl/sqlite/urls.sql");

/// SQLite implementation of the repository contract.
///
/// Mappings live in a single `urls` table with no uniqueness constraint on
/// `shortened_url`. Lookups return the earliest row (by `rowid`) when a code
/// was issued more than once.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Creates a repository from an existing SQLite connection pool.
    ///
    /// The schema is not applied; see [`SqliteRepository::ensure_schema`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database file at `path` and applies
    /// the schema.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        let repository = Self::new(pool);
        repository.ensure_schema().await?;
        info!(path = %path.display(), "opened sqlite store");
        Ok(repository)
    }

    /// Opens a private in-memory database with the schema applied.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(SqliteConnectOptions::new())
            .await
            .map_err(map_sqlx_error)?;

        let repository = Self::new(pool);
        repository.ensure_schema().await?;
        Ok(repository)
    }

    /// Creates the `urls` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Runs a script of one or more SQL statements against the store.
    ///
    /// Used to load seed data at startup.
    pub async fn execute_script(&self, sql: &str) -> Result<u64> {
        let result = sqlx::raw_sql(sql)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        debug!(rows_affected = result.rows_affected(), "executed sql script");
        Ok(result.rows_affected())
    }

    /// Closes every connection of the pool. Later operations fail with
    /// [`StorageError::Unavailable`].
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Configuration(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        sqlx::Error::Database(_) => StorageError::Query(message),
        _ => StorageError::Operation(message),
    }
}

#[async_trait]
impl ReadRepository for SqliteRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        let row = sqlx::query(
            r#"
            SELECT original_url
            FROM urls
            WHERE shortened_url = ?
            ORDER BY rowid
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let original_url: String = row.try_get("original_url").map_err(map_sqlx_error)?;

        Ok(Some(UrlRecord { original_url }))
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn insert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO urls (original_url, shortened_url)
            VALUES (?, ?)
            "#,
        )
        .bind(record.original_url)
        .bind(code.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}
