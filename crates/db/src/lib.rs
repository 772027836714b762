//! SQLite access layer for Estante: connection factory and migration tooling.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use thiserror::Error;

/// Fault from the underlying row store. Surfaced to handlers as a
/// 500-class failure; never retried or recovered locally.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open connection: {0}")]
    Connect(#[source] sqlx::Error),

    #[error(transparent)]
    Query(#[from] sqlx::Error),
}

/// Schema migration contributed by a module, executed at startup.
#[derive(Debug, Clone)]
pub struct Migration {
    pub id: &'static str,
    pub up: &'static str,
}

/// Connection factory for the file-backed SQLite store.
///
/// Hands out one fresh connection per gateway call; connections are never
/// pooled or shared across requests. The database file is created if absent.
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    /// Create a factory for the store at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self { options }
    }

    /// Open a new connection to the store. The connection is released when
    /// the returned handle is dropped, on every exit path.
    pub async fn connect(&self) -> Result<SqliteConnection, StorageError> {
        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(StorageError::Connect)
    }

    /// Execute module migrations in order. Each statement is idempotent DDL;
    /// a failure here is fatal to startup, the process must not serve
    /// traffic against a missing table.
    pub async fn run_migrations(&self, migrations: &[Migration]) -> Result<(), StorageError> {
        let mut conn = self.connect().await?;

        for migration in migrations {
            tracing::info!(target: "estante-db", id = migration.id, "applying migration");
            sqlx::query(migration.up).execute(&mut conn).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOKS_DDL: Migration = Migration {
        id: "001_books",
        up: "CREATE TABLE IF NOT EXISTS books (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT NOT NULL)",
    };

    #[tokio::test]
    async fn connect_creates_missing_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");

        let db = Database::new(&path);
        let _conn = db.connect().await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("store.db"));

        db.run_migrations(&[BOOKS_DDL]).await.unwrap();
        db.run_migrations(&[BOOKS_DDL]).await.unwrap();

        let mut conn = db.connect().await.unwrap();
        sqlx::query("INSERT INTO books (title) VALUES ('x')")
            .execute(&mut conn)
            .await
            .unwrap();
    }
}
