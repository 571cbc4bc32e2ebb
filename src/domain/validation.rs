//! Syntactic validation for contact fields.
//!
//! Only format is checked. Whether a mailbox exists or a site is reachable is
//! the remote service's business.

use super::errors::ValidationError;
use email_address::{EmailAddress, Options};
use url::Url;

// Bare mailbox only: no `Name <addr>` wrapper, no `[ip]` literal, and the
// domain must carry a TLD.
const EMAIL_OPTIONS: Options = Options {
    minimum_sub_domains: 2,
    allow_domain_literal: false,
    allow_display_text: false,
};

/// Validate a bare email address (`local@domain.tld`).
///
/// # Errors
///
/// Returns `ValidationError::InvalidEmail` carrying the rejected value.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    EmailAddress::parse_with_options(email, EMAIL_OPTIONS)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidEmail(email.to_string()))
}

/// Validate that `url` is an absolute URL with a host.
///
/// `localhost:3000` parses as scheme `localhost` with no authority, so the
/// host check is what rejects it.
///
/// # Errors
///
/// Returns `ValidationError::InvalidUrl` carrying the rejected value.
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(url).map_err(|_| ValidationError::InvalidUrl(url.to_string()))?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("user.name+tag@example.co.uk").is_ok());

        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@@example.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_validate_email_rejects_wrapped_and_hostless_forms() {
        assert!(validate_email("Jane Doe <jane@example.com>").is_err());
        assert!(validate_email("<jane@example.com>").is_err());
        assert!(validate_email("jane@[127.0.0.1]").is_err());
        assert!(validate_email("user@localhost").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_validate_email_error_carries_value() {
        assert_eq!(
            validate_email("bad"),
            Err(ValidationError::InvalidEmail("bad".to_string()))
        );
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://example.com/path?q=1").is_ok());

        assert!(validate_url("not a url").is_err());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("/relative/path").is_err());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn test_validate_url_requires_host() {
        assert!(validate_url("https://localhost:3000").is_ok());
        assert!(validate_url("ftp://files.example.com/pub").is_ok());

        assert!(validate_url("localhost:3000").is_err());
        assert!(validate_url("example.com:8080").is_err());
        assert!(validate_url("javascript:alert(1)").is_err());
        assert!(validate_url("foo:bar").is_err());
        assert!(validate_url("mailto:jane@example.com").is_err());
        assert!(validate_url("file:///etc/passwd").is_err());
    }
}
