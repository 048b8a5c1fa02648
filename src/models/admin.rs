use sqlx::PgPool;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Admin {
    pub username: String,
    /// argon2 PHC string
    pub password: String,
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<Admin>, sqlx::Error> {
    sqlx::query_as::<_, Admin>("SELECT username, password FROM admins WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Insert the admin, or replace the stored hash if the username exists.
pub async fn upsert(pool: &PgPool, username: &str, password_hash: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO admins (username, password) VALUES ($1, $2) \
         ON CONFLICT (username) DO UPDATE SET password = EXCLUDED.password",
    )
    .bind(username)
    .bind(password_hash)
    .execute(pool)
    .await?;
    Ok(())
}
