use std::fmt;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::{Deserialize, Serialize};

/// A salted, memory-hard digest of a user's PIN, stored as a PHC string.
/// The plaintext PIN is consumed at construction and never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinHash(String);

impl PinHash {
    pub fn new(pin: &str) -> Result<Self, PinHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(pin.as_bytes(), &salt)
            .map_err(|_| PinHashError)?;
        Ok(Self(hash.to_string()))
    }

    /// Verify a candidate PIN against the stored digest. The comparison is
    /// constant-time inside the password-hash library.
    pub fn verify(&self, candidate: &str) -> bool {
        PasswordHash::new(&self.0)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(candidate.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinHashError;

impl fmt::Display for PinHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to hash pin")
    }
}

impl std::error::Error for PinHashError {}
