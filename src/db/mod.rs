use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{config::Config, errors::AppResult};

#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .min_connections(config.db_min_connections)
            .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
            .connect(config.database_url.expose_secret())
            .await?;

        let db = Self { pool };
        db.health_check().await?;

        log::info!(
            "Connected to PostgreSQL (pool max={}, min={})",
            config.db_max_connections,
            config.db_min_connections
        );

        Ok(db)
    }

    /// Wraps an already configured pool, e.g. one handed out by `#[sqlx::test]`.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
