//! Sensitive-header classification.

/// Placeholder written in place of a sensitive header's value.
pub const REDACTED: &str = "[REDACTED]";

/// Header names whose values are never logged.
const SENSITIVE_HEADERS: [&str; 8] = [
    "authorization",
    "cookie",
    "set-cookie",
    "x-api-key",
    "x-auth-token",
    "proxy-authorization",
    "www-authenticate",
    "proxy-authenticate",
];

/// Whether a header's value must be redacted before logging.
///
/// Matching is case-insensitive and exact: `x-api-key-extra` is not
/// sensitive even though it shares a prefix with `x-api-key`.
pub fn is_sensitive(name: &str) -> bool {
    SENSITIVE_HEADERS
        .iter()
        .any(|candidate| name.eq_ignore_ascii_case(candidate))
}
