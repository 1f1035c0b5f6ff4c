use color_eyre::eyre::Result;
use dotenv::dotenv;
use timetable_core::repository::SessionRepository;
use timetable_db::{config::DbConfig, create_pool, schema::initialize_database, PgSessionRepository};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = DbConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Connecting to database...");
    let db_pool = create_pool(&config).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    let sessions = PgSessionRepository::new(db_pool).list_sessions().await?;
    info!("Session store ready with {} scheduled sessions", sessions.len());

    Ok(())
}
