/**
 * Password Hashing
 *
 * bcrypt hashes with a per-hash random salt. Hashing and verification are
 * CPU-bound, so the async helpers move the work onto tokio's blocking pool.
 *
 * bcrypt only reads the first 72 bytes of its input. Longer passwords are
 * refused at hashing time and never match at verification time, so two
 * passwords sharing a 72-byte prefix cannot stand in for each other.
 */

use bcrypt::BcryptError;

use crate::backend::error::AppError;

/// Longest password bcrypt can hash without truncation
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Shown when a password exceeds [`MAX_PASSWORD_BYTES`]
pub const PASSWORD_TOO_LONG: &str = "Password must be at most 72 bytes long";

/// Plaintext behind [`PasswordHasher::dummy_hash`]
const DUMMY_PASSWORD: &str = "dummy-password-for-unknown-users";

/// bcrypt hasher with a configured work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    ///
    /// Passwords over [`MAX_PASSWORD_BYTES`] are a validation error.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::validation(PASSWORD_TOO_LONG));
        }
        Ok(bcrypt::hash(password, self.cost)?)
    }

    /// Check a candidate password against a stored hash
    ///
    /// A malformed stored hash is an error, not a mismatch. A candidate too
    /// long to have been hashed is a mismatch.
    pub fn verify(&self, candidate: &str, stored_hash: &str) -> Result<bool, AppError> {
        if candidate.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }
        Ok(bcrypt::verify(candidate, stored_hash)?)
    }

    /// A hash at this hasher's cost that no login password is expected to match
    ///
    /// Login verifies against it when the username is unknown, so both
    /// outcomes cost one bcrypt verification.
    pub fn dummy_hash(&self) -> Result<String, BcryptError> {
        bcrypt::hash(DUMMY_PASSWORD, self.cost)
    }

    pub async fn hash_async(&self, password: String) -> Result<String, AppError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::unexpected(format!("hashing task failed: {e}")))?
    }

    pub async fn verify_async(&self, candidate: String, stored_hash: String) -> Result<bool, AppError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&candidate, &stored_hash))
            .await
            .map_err(|e| AppError::unexpected(format!("verification task failed: {e}")))?
    }
}
