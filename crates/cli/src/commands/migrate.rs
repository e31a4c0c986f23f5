//! Database migration command.
//!
//! Runs the SQL migrations from `crates/server/migrations/` against the
//! configured database. Migrations are only ever run through this command,
//! never automatically at server startup.

use tracing::info;

use super::{CommandError, connect};

/// Run database migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or a migration fails to apply.
pub async fn run() -> Result<(), CommandError> {
    info!("Connecting to database...");
    let pool = connect().await?;

    info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    info!("Migrations complete");
    Ok(())
}
