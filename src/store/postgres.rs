use std::future::Future;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, PgPool, Row};

use crate::model::{generate_id, Id};
use crate::store::traits::{Document, DocumentStore};

/// Document store backed by a single PostgreSQL table of JSONB documents
/// keyed by (collection, id). Every operation runs under a timeout so a
/// stalled database cannot hang a request indefinitely.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
    op_timeout: Duration,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL.
    pub async fn new(database_url: &str, max_connections: u32, op_timeout: Duration) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool, op_timeout })
    }

    /// Create the documents table if it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                PRIMARY KEY (collection, id)
            )",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create documents table")?;
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn with_timeout<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        tokio::time::timeout(self.op_timeout, fut)
            .await
            .map_err(|_| anyhow!("document store operation timed out"))?
    }
}

#[async_trait::async_trait]
impl DocumentStore for PostgresStore {
    async fn create_document(&self, collection: &str, data: Value) -> Result<Id> {
        let id = generate_id();
        self.with_timeout(async {
            sqlx::query("INSERT INTO documents (collection, id, data) VALUES ($1, $2, $3)")
                .bind(collection)
                .bind(&id)
                .bind(&data)
                .execute(&self.pool)
                .await
                .context("Failed to insert document")?;
            Ok(())
        })
        .await?;
        Ok(id)
    }

    async fn get_documents(&self, collection: &str) -> Result<Vec<Document>> {
        self.with_timeout(async {
            let rows = sqlx::query(
                "SELECT id, data FROM documents WHERE collection = $1 ORDER BY created_at",
            )
            .bind(collection)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list documents")?;

            Ok(rows
                .into_iter()
                .map(|row| Document {
                    id: row.get("id"),
                    data: row.get("data"),
                })
                .collect())
        })
        .await
    }

    async fn get_document_by_id(&self, collection: &str, id: &Id) -> Result<Option<Document>> {
        self.with_timeout(async {
            let row = sqlx::query("SELECT id, data FROM documents WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to fetch document")?;

            Ok(row.map(|row| Document {
                id: row.get("id"),
                data: row.get("data"),
            }))
        })
        .await
    }

    async fn update_document(&self, collection: &str, id: &Id, data: Value) -> Result<()> {
        self.with_timeout(async {
            let result = sqlx::query(
                "UPDATE documents SET data = $3, updated_at = now()
                 WHERE collection = $1 AND id = $2",
            )
            .bind(collection)
            .bind(id)
            .bind(&data)
            .execute(&self.pool)
            .await
            .context("Failed to update document")?;

            if result.rows_affected() == 0 {
                return Err(anyhow!("document '{}' does not exist in '{}'", id, collection));
            }
            Ok(())
        })
        .await
    }

    async fn delete_document(&self, collection: &str, id: &Id) -> Result<()> {
        self.with_timeout(async {
            let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .execute(&self.pool)
                .await
                .context("Failed to delete document")?;

            if result.rows_affected() == 0 {
                return Err(anyhow!("document '{}' does not exist in '{}'", id, collection));
            }
            Ok(())
        })
        .await
    }
}
