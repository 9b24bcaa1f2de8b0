//! Password hashing and verification.
//!
//! Only bcrypt hashes are ever persisted; the hash string embeds the salt
//! and cost tag, so no separate columns are needed for either.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::{validation::ValidationError, Error};

/// Well-formed bcrypt hash verified on credential-lookup misses, so a
/// failed check costs one bcrypt round no matter which field was wrong.
/// The comparison result is always discarded.
pub const NO_MATCH_HASH: &str = "$2a$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length; bcrypt truncates input beyond 72 bytes.
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Checks that a password's length is within the bounds bcrypt can hash
/// without truncation.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let length = password.len();
    if length < MIN_PASSWORD_LENGTH || length > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordLength {
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
            actual: length,
        });
    }

    Ok(())
}

/// Hashes a plain password with bcrypt at the default cost.
pub fn hash_password(password: &str) -> Result<String, Error> {
    Ok(hash(password, DEFAULT_COST)?)
}

/// Verifies a plain password against a stored bcrypt hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    Ok(verify(password, password_hash)?)
}
