//! Argon2 password hashing implementation.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use forum_core::ports::{AuthError, PasswordService};

/// Argon2id password service.
///
/// The cost parameters are pinned here and are not read from configuration.
/// Digests are PHC strings, so verification uses the parameters embedded in
/// the stored hash.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::DEFAULT),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            tracing::debug!("Stored password digest is malformed");
            return false;
        };

        // The verifier compares digests in constant time.
        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let service = Argon2PasswordService::new();
        let password = "secure_password_123";

        let hash = service.hash(password).unwrap();
        assert!(service.verify(password, &hash));
        assert!(!service.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let service = Argon2PasswordService::new();

        let first = service.hash("abcd").unwrap();
        let second = service.hash("abcd").unwrap();

        assert_ne!(first, second);
        assert!(service.verify("abcd", &first));
        assert!(service.verify("abcd", &second));
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let service = Argon2PasswordService::new();

        let hash = service.hash("plaintext-secret").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("plaintext-secret"));
    }

    #[test]
    fn test_malformed_digest_does_not_verify() {
        let service = Argon2PasswordService::new();

        assert!(!service.verify("abcd", ""));
        assert!(!service.verify("abcd", "not-a-phc-string"));
        assert!(!service.verify("abcd", "$argon2id$v=19$m=19456,t=2,p=1$garbage"));
    }
}
