//! The durable catalog store.
//!
//! A single `products` table over SQLite, shared by the ingestion task and
//! the API handlers through one connection pool. Name uniqueness is enforced
//! by the ingestion path's lookup-before-insert, not by the schema, so it is
//! only as strong as the absence of concurrent writers; `insert` itself never
//! checks for collisions.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::domain::product::{Product, ProductPatch};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("database failure: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct CatalogStore {
    pool: SqlitePool,
}

impl CatalogStore {
    /// Connects to the database, creating the file and the schema if absent.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Self::new_with_pool(pool).await
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                cost INTEGER NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        let record =
            sqlx::query_as::<_, Product>("SELECT id, name, cost FROM products WHERE name = ?1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(record)
    }

    /// Inserts a new record with a fresh id. No uniqueness check.
    pub async fn insert(&self, name: &str, cost: i64) -> Result<Product, StoreError> {
        let result = sqlx::query("INSERT INTO products (name, cost) VALUES (?1, ?2)")
            .bind(name)
            .bind(cost)
            .execute(&self.pool)
            .await?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
            cost,
        })
    }

    /// Inserts only when no record with this name exists yet; returns the new
    /// record, or `None` when the name was already present. Two concurrent
    /// callers can still race past the lookup and both insert.
    pub async fn insert_if_absent(
        &self,
        name: &str,
        cost: i64,
    ) -> Result<Option<Product>, StoreError> {
        if self.find_by_name(name).await?.is_some() {
            return Ok(None);
        }
        self.insert(name, cost).await.map(Some)
    }

    /// Paged read in id order, stable across calls while the data is unchanged.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, StoreError> {
        let records = sqlx::query_as::<_, Product>(
            "SELECT id, name, cost FROM products ORDER BY id LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let record =
            sqlx::query_as::<_, Product>("SELECT id, name, cost FROM products WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(record)
    }

    /// Applies only the fields present in the patch.
    pub async fn update(&self, id: i64, patch: ProductPatch) -> Result<Product, StoreError> {
        let current = self.get(id).await?.ok_or(StoreError::NotFound)?;

        let name = patch.name.unwrap_or(current.name);
        let cost = patch.cost.unwrap_or(current.cost);

        sqlx::query("UPDATE products SET name = ?1, cost = ?2 WHERE id = ?3")
            .bind(&name)
            .bind(cost)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(Product { id, name, cost })
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
