//! Password hashing behind an opaque `hash` / `verify` capability.

use super::AuthError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

/// Password hasher trait.
///
/// Services only ever call [`PasswordHasher::verify`]; digests are never compared directly.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password into a self-describing digest.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Returns `Ok(false)` on mismatch and `Err` only when `digest` cannot be parsed.
    fn verify(&self, password: &str, digest: &str) -> Result<bool, AuthError>;
}

/// Argon2id password hasher.
///
/// ```
/// use voice_orders::auth::{Argon2Hasher, PasswordHasher};
///
/// let hasher = Argon2Hasher::new();
/// let digest = hasher.hash("hunter2").unwrap();
/// assert!(hasher.verify("hunter2", &digest).unwrap());
/// assert!(!hasher.verify("hunter3", &digest).unwrap());
/// ```
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// A hasher with custom cost parameters. Verification reads the parameters stored in
    /// the digest, so digests from differently tuned hashers still verify.
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    fn verify(&self, password: &str, digest: &str) -> Result<bool, AuthError> {
        let parsed = PasswordHash::new(digest).map_err(|e| AuthError::Hashing(e.to_string()))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> Argon2Hasher {
        Argon2Hasher::with_params(Params::new(8, 1, 1, None).unwrap())
    }

    #[test]
    fn digest_never_contains_the_password() {
        let digest = fast().hash("correct horse").unwrap();
        assert!(digest.starts_with("$argon2id$"));
        assert!(!digest.contains("correct horse"));
    }

    #[test]
    fn same_password_gets_a_fresh_salt() {
        let hasher = fast();
        assert_ne!(hasher.hash("pw").unwrap(), hasher.hash("pw").unwrap());
    }

    #[test]
    fn verify_accepts_only_the_original_password() {
        let hasher = fast();
        let digest = hasher.hash("pw").unwrap();
        assert!(hasher.verify("pw", &digest).unwrap());
        assert!(!hasher.verify("PW", &digest).unwrap());
    }

    #[test]
    fn unparseable_digest_is_an_error() {
        assert!(matches!(
            fast().verify("pw", "plaintext"),
            Err(AuthError::Hashing(_))
        ));
    }
}
