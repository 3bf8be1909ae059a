//! Data access for the `department`, `role` and `employee` tables.
//!
//! Every query method issues a single parameterized statement against the
//! pool and performs no validation of its own: constraint violations come
//! back as [`AppError`](crate::errors::AppError) values untouched.

mod department;
mod employee;
mod role;

use log::info;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::DeletePolicy;
use crate::errors::Result;

/// Owns the one connection an interactive session uses.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
    delete_policy: DeletePolicy,
}

impl Store {
    pub async fn connect(options: PgConnectOptions, delete_policy: DeletePolicy) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        info!("Connected to the database (delete policy: {:?})", delete_policy);
        Ok(Self::from_pool(pool, delete_policy))
    }

    pub fn from_pool(pool: PgPool, delete_policy: DeletePolicy) -> Self {
        Self {
            pool,
            delete_policy,
        }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }
}
