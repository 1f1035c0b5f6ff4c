pub mod config;
pub mod models;
pub mod repositories;
pub mod schema;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub use repositories::session::PgSessionRepository;

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(config: &config::DbConfig) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    Ok(pool)
}
