pub mod password;
pub mod rate_limit;

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::admin;

/// Check a username/password pair against the `admins` table.
///
/// Unknown users, wrong passwords and unreadable stored hashes all come back
/// as `Ok(false)` so callers cannot tell them apart. Only storage failures
/// are errors.
pub async fn verify_admin(pool: &PgPool, username: &str, password: &str) -> Result<bool, AppError> {
    let Some(found) = admin::find_by_username(pool, username).await? else {
        return Ok(false);
    };

    match password::check_password(password, &found.password) {
        password::Verdict::Match => Ok(true),
        password::Verdict::Mismatch => Ok(false),
        password::Verdict::Unreadable => {
            log::warn!("Stored password for admin '{}' is not an argon2 hash", found.username);
            Ok(false)
        }
    }
}
