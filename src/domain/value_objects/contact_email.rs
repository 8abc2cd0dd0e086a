use email_address::EmailAddress;
use std::str::FromStr;

use crate::domain::errors::{ContactField, FieldViolation, ViolationCode};

/// A syntactically valid email address, kept exactly as submitted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Create a new ContactEmail.
    ///
    /// On top of RFC 5322 address syntax the domain must be a dotted host
    /// name ending in an alphabetic top-level label of two or more letters.
    /// Bare hosts (`jane@localhost`), IP literals and quoted local parts are
    /// rejected, as a browser form would reject them.
    pub fn new(value: String) -> Result<Self, FieldViolation> {
        // Display-name forms like "Jane <jane@example.com>" are not addresses
        if value.contains(['<', '>']) {
            return Err(Self::invalid());
        }

        let parsed = EmailAddress::from_str(&value).map_err(|_| Self::invalid())?;

        if parsed.local_part().contains('"') {
            return Err(Self::invalid());
        }

        let domain = parsed.domain();
        if domain.starts_with('[') || !domain.contains('.') {
            return Err(Self::invalid());
        }

        // Empty labels such as "example..com" or a trailing dot
        if domain.split('.').any(|label| label.is_empty()) {
            return Err(Self::invalid());
        }

        // Rules out dotted IPs like "123.45.67.89"
        let tld = domain.rsplit('.').next().unwrap_or_default();
        if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Self::invalid());
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn invalid() -> FieldViolation {
        FieldViolation::new(
            ContactField::Email,
            ViolationCode::InvalidString,
            "Valid email is required",
        )
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(ContactEmail::new("jane@example.com".to_string()).is_ok());
        assert!(ContactEmail::new("jane.doe+portfolio@mail.example.co.uk".to_string()).is_ok());
        assert!(ContactEmail::new("j_d-99@sub.example.io".to_string()).is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        for bad in [
            "",
            "not-an-email",
            "jane@",
            "@example.com",
            "jane@localhost",
            "jane@@example.com",
            "jane doe@example.com",
            "jane@example..com",
            "jane@[127.0.0.1]",
            "Jane <jane@example.com>",
            "jane@123.45.67.89",
            "\"jane doe\"@example.com",
            "jane@example.c",
            "jane@example.c0m",
        ] {
            let violation = ContactEmail::new(bad.to_string()).unwrap_err();
            assert_eq!(violation.field, ContactField::Email, "accepted {:?}", bad);
            assert_eq!(violation.code, ViolationCode::InvalidString);
        }
    }
}
