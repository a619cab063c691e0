//! Process bootstrap: rebuilds and seeds the database schema.
//!
//! Runs once at startup, before anything else is allowed to touch the
//! database. Any initialization failure is fatal; the process exits rather
//! than continue against a partially-initialized schema. Because the schema
//! rebuild is destructive, this binary doubles as the development reseed
//! tool.

use bistro_core::config::database::DatabaseConfig;
use bistro_core::core::schema;
use bistro_core::errors::Result;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();

    // 3. Resolve the database configuration
    let config = DatabaseConfig::from_env();
    info!("using database {}", config.url());

    // 4. Connect and rebuild the schema; any failure here halts startup
    let db = config
        .connect()
        .await
        .inspect_err(|e| error!("failed to connect to database: {e}"))?;

    schema::initialize(&db)
        .await
        .inspect_err(|e| error!("failed to initialize database schema: {e}"))?;

    info!("database ready for order intake");
    Ok(())
}
