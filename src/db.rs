use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::auth::password;
use crate::config::AdminSeed;
use crate::errors::AppError;
use crate::models::admin;

pub type DbPool = PgPool;

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DbPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Hash the configured admin password and upsert the admin row.
pub async fn seed_admin(pool: &DbPool, seed: &AdminSeed) -> Result<(), AppError> {
    let hash = password::hash_password(&seed.password)?;
    admin::upsert(pool, &seed.username, &hash).await?;
    log::info!("Admin '{}' seeded", seed.username);
    Ok(())
}
