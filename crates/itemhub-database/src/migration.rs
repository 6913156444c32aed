//! Embedded schema migrations.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use itemhub_core::error::{AppError, ErrorKind};

/// Migrations compiled in from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Bring the `items` schema up to date.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    let available = MIGRATOR.iter().count();
    info!(available, "Applying item schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Schema migration failed: {e}"), e)
    })?;

    info!("Item schema is up to date");
    Ok(())
}
