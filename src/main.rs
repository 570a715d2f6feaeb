//! EventEase
//!
//! Main application entry point: prepares the database and reports what the
//! event board currently shows.

use tracing::{error, info};

use eventease::{
    config::Settings,
    database::{connection::DatabaseConfig, create_pool, health_check, run_migrations, DatabaseService},
    utils::logging,
    AppContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file writer on drop
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", eventease::info());

    info!("Connecting to database...");
    let pool = create_pool(&DatabaseConfig::from(&settings.database)).await?;
    run_migrations(&pool).await?;
    health_check(&pool).await?;

    let database = DatabaseService::new(pool.clone());
    let ctx = AppContext::with_database(settings, database);

    match ctx.services.event_service.upcoming_events().await {
        Ok(events) => info!(count = events.len(), "Upcoming events"),
        Err(e) => error!(error = %e, "Failed to list upcoming events"),
    }
    match ctx.services.event_service.past_events().await {
        Ok(events) => info!(count = events.len(), "Past events"),
        Err(e) => error!(error = %e, "Failed to list past events"),
    }

    pool.close().await;
    info!("EventEase has been shut down.");

    Ok(())
}
