//! User lifecycle hooks.
//!
//! The store calls these explicitly right before writing a user row. Both
//! validate the payload and replace the plaintext password with its digest.

use crate::domain::{NewUser, UserChanges, UserInsert, UserPatch};
use crate::error::DomainError;
use crate::ports::PasswordService;
use crate::validation::{validate_email, validate_password, validate_username};

/// Validate a registration payload and hash its password.
pub fn before_create(
    new_user: NewUser,
    hasher: &dyn PasswordService,
) -> Result<UserInsert, DomainError> {
    validate_username(&new_user.username)?;
    validate_email(&new_user.email)?;
    validate_password(&new_user.password)?;

    let password_hash = hash_password(&new_user.password, hasher)?;

    Ok(UserInsert {
        username: new_user.username,
        email: new_user.email,
        password_hash,
    })
}

/// Validate the fields present in an update and re-hash the password if one
/// was supplied, whether or not it differs from the current one.
pub fn before_update(
    changes: UserChanges,
    hasher: &dyn PasswordService,
) -> Result<UserPatch, DomainError> {
    if let Some(username) = &changes.username {
        validate_username(username)?;
    }
    if let Some(email) = &changes.email {
        validate_email(email)?;
    }

    let password_hash = match &changes.password {
        Some(password) => {
            validate_password(password)?;
            Some(hash_password(password, hasher)?)
        }
        None => None,
    };

    Ok(UserPatch {
        username: changes.username,
        email: changes.email,
        password_hash,
    })
}

fn hash_password(password: &str, hasher: &dyn PasswordService) -> Result<String, DomainError> {
    hasher
        .hash(password)
        .map_err(|e| DomainError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::AuthError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Deterministic stand-in that counts how often it was asked to hash.
    #[derive(Default)]
    struct CountingHasher {
        calls: AtomicUsize,
    }

    impl PasswordService for CountingHasher {
        fn hash(&self, password: &str) -> Result<String, AuthError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("hashed:{n}:{password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> bool {
            hash.ends_with(&format!(":{password}"))
        }
    }

    #[test]
    fn test_before_create_hashes_password() {
        let hasher = CountingHasher::default();
        let insert = before_create(
            NewUser::new("alice", "alice@example.com", "hunter2"),
            &hasher,
        )
        .unwrap();

        assert_ne!(insert.password_hash, "hunter2");
        assert!(hasher.verify("hunter2", &insert.password_hash));
        assert_eq!(hasher.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_before_create_rejects_short_password_without_hashing() {
        let hasher = CountingHasher::default();
        let result = before_create(NewUser::new("alice", "alice@example.com", "abc"), &hasher);

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(hasher.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_before_create_rejects_bad_email() {
        let hasher = CountingHasher::default();
        let result = before_create(NewUser::new("alice", "not-an-email", "abcd"), &hasher);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_before_update_rehashes_when_password_present() {
        let hasher = CountingHasher::default();
        let changes = UserChanges {
            password: Some("same-as-before".to_string()),
            ..Default::default()
        };

        let patch = before_update(changes, &hasher).unwrap();

        assert!(patch.password_hash.is_some());
        assert_eq!(hasher.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_before_update_without_password_skips_hashing() {
        let hasher = CountingHasher::default();
        let changes = UserChanges {
            username: Some("alice2".to_string()),
            ..Default::default()
        };

        let patch = before_update(changes, &hasher).unwrap();

        assert_eq!(patch.username.as_deref(), Some("alice2"));
        assert!(patch.password_hash.is_none());
        assert_eq!(hasher.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_before_update_validates_present_email() {
        let hasher = CountingHasher::default();
        let changes = UserChanges {
            email: Some("nope".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            before_update(changes, &hasher),
            Err(DomainError::Validation(_))
        ));
    }
}
