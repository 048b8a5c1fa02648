use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use argon2::Argon2;

use crate::errors::AppError;

/// Result of checking a plaintext password against a stored `admins.password`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch,
    /// The stored value is not an argon2 PHC string (e.g. a legacy plaintext row).
    Unreadable,
}

/// Hash with a fresh random salt, producing a PHC string for the `admins` table.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(|e| AppError::Hash(e.to_string()))
}

pub fn check_password(plain: &str, stored: &str) -> Verdict {
    let Ok(phc) = PasswordHash::new(stored) else {
        return Verdict::Unreadable;
    };
    match Argon2::default().verify_password(plain.as_bytes(), &phc) {
        Ok(()) => Verdict::Match,
        Err(_) => Verdict::Mismatch,
    }
}
