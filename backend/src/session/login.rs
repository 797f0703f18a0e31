use serde::Serialize;

use super::SessionError;

/// Steps of the sign-in modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginStep {
    Email,
    Role,
}

/// Shape check only: one `@`, a non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), SessionError> {
    let email = email.trim();
    let invalid = || SessionError::InvalidEmail(email.to_string());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) {
        return Err(invalid());
    }
    let dotted = domain
        .split('.')
        .collect::<Vec<_>>();
    if dotted.len() < 2 || dotted.iter().any(|part| part.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("anna@example.com").is_ok());
        assert!(validate_email("  ivan.petrov@mail.co.uk ").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "anna", "@example.com", "anna@", "anna@example", "anna@.com", "a@b@c.com", "an na@x.com", "anna@example."] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
    }
}
