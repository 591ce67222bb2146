//! Persistent key-value storage and loyalty points for the salon client.
//!
//! This crate provides a small key-value store abstraction with an
//! in-memory implementation and a SQLite one (SQLx), plus the per-user
//! loyalty points balance built on top of it.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use loyalty_store::{LoyaltyPoints, SqliteStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let store = SqliteStore::connect("sqlite:salon.db?mode=rwc").await?;
//!     store.migrate().await?;
//!
//!     let mut points = LoyaltyPoints::load(Arc::new(store), Some("customer-42")).await?;
//!     points.add(100).await?;
//!     println!("Balance: {}", points.points());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod kv;
pub mod points;
pub mod store;

pub use error::{Result, StoreError};
pub use points::{points_key, LoyaltyPoints, DEFAULT_POINTS};
pub use store::{KeyValueStore, MemoryStore};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// SQLite-backed key-value store.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Default pool size for store connections.
    const DEFAULT_POOL_SIZE: u32 = 5;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Every pooled connection to `sqlite::memory:` is a separate database;
    /// use [`connect_with_pool_size`](Self::connect_with_pool_size) with a
    /// size of 1 for in-memory stores.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to store: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running store migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
