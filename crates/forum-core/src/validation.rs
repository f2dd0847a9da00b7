//! Input validation rules applied before any write reaches the store.

use crate::error::DomainError;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 4;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Reject an empty or whitespace-only value for a required field.
pub fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), DomainError> {
    require("username", username)
}

pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), DomainError> {
    require("email", email)?;
    if !is_email(email) {
        return Err(DomainError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Syntactic email check: `local@domain.tld`, no whitespace, dotted domain
/// with an alphabetic top-level label.
pub fn is_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    is_local_part(local) && is_domain(domain)
}

fn is_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~.-".contains(c))
}

fn is_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld = labels[labels.len() - 1];
    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "alice@example.com",
            "a.b+tag@mail.example.org",
            "x_y-z@sub-domain.co",
        ] {
            assert!(is_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "alice@",
            "alice@localhost",
            "alice@example.c",
            "alice@exa mple.com",
            "al ice@example.com",
            "alice..b@example.com",
            ".alice@example.com",
            "alice@-example.com",
            "alice@example..com",
            "alice@example.c0m",
        ] {
            assert!(!is_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(validate_password("abc").is_err());
        assert!(validate_password("abcd").is_ok());
        // Counted in characters, not bytes.
        assert!(validate_password("äöü").is_err());
        assert!(validate_password("äöüß").is_ok());
    }

    #[test]
    fn test_require_rejects_blank() {
        assert!(matches!(
            validate_username("   "),
            Err(DomainError::Validation(_))
        ));
        assert!(validate_username("alice").is_ok());
    }
}
