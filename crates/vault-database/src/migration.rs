//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use vault_core::error::{AppError, ErrorKind};
use vault_core::result::AppResult;

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}
