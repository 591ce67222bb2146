//! Email checks used by the sign-in and account forms.

use once_cell::sync::Lazy;
use regex::Regex;

/// Email providers accepted by [`is_plausible_email_domain`] without further checks.
pub const COMMON_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "aol.com",
    "protonmail.com",
    "live.com",
    "msn.com",
];

static EMAIL_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Basic `local@domain.tld` shape check.
///
/// This is a sanity check, not RFC 5322 validation.
pub fn is_valid_email_format(email: &str) -> bool {
    EMAIL_FORMAT.is_match(email)
}

/// Check that the domain part looks like a real mail domain.
///
/// The domain is the text between the first and second `@`. True for a
/// known provider or for any domain containing a dot.
pub fn is_plausible_email_domain(email: &str) -> bool {
    let Some(domain) = email.split('@').nth(1) else {
        return false;
    };
    let domain = domain.to_lowercase();

    COMMON_EMAIL_DOMAINS.contains(&domain.as_str()) || domain.contains('.')
}
