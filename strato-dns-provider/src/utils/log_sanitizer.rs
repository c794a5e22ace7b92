//! Log sanitization utilities
//!
//! The panel protocol puts the session token into every URL and returns whole HTML
//! pages (including SPF/DKIM values) as bodies. Both end up in debug logs, so they go
//! through these helpers first.

use url::form_urlencoded;

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret that stay visible.
const SECRET_VISIBLE_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` bytes with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret (session token) down to a short recognizable prefix.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= SECRET_VISIBLE_PREFIX {
        return "****".to_string();
    }
    let visible: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
    format!("{visible}****")
}

/// Replace the value of `param` in a serialized URL with its masked form.
///
/// `url` is expected as produced by `Url::as_str`, so the secret is matched in its
/// form-encoded shape.
pub fn redact_query_param(url: &str, param: &str, secret: &str) -> String {
    if secret.is_empty() {
        return url.to_string();
    }
    let encoded: String = form_urlencoded::byte_serialize(secret.as_bytes()).collect();
    let masked: String =
        form_urlencoded::byte_serialize(mask_secret(secret).as_bytes()).collect();
    url.replace(&format!("{param}={encoded}"), &format!("{param}={masked}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "<html></html>";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "ü".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn mask_keeps_prefix_only() {
        assert_eq!(mask_secret("abc123def456"), "abc1****");
        assert_eq!(mask_secret("abc"), "****");
    }

    #[test]
    fn redact_session_in_url() {
        let url = "https://host/x?sessionID=abc123def&cID=42";
        assert_eq!(
            redact_query_param(url, "sessionID", "abc123def"),
            "https://host/x?sessionID=abc1****&cID=42"
        );
    }

    #[test]
    fn redact_encoded_session_in_url() {
        let mut url = url::Url::parse("https://host/x").unwrap();
        url.query_pairs_mut()
            .append_pair("sessionID", "ab+/= cd")
            .append_pair("cID", "42");
        let redacted = redact_query_param(url.as_str(), "sessionID", "ab+/= cd");
        assert_eq!(redacted, "https://host/x?sessionID=ab%2B%2F****&cID=42");
        assert!(!redacted.contains("cd"));
    }

    #[test]
    fn redact_without_secret_is_noop() {
        let url = "https://host/x?cID=0";
        assert_eq!(redact_query_param(url, "sessionID", ""), url);
    }
}
