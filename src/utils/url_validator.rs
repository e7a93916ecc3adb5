//! Destination URL validation.
//!
//! Short links only ever point at absolute HTTP(S) URLs. Anything else is
//! rejected before it reaches storage.

use url::Url;

/// Longest destination URL accepted for storage.
pub const MAX_LONG_URL_LENGTH: usize = 2048;

/// Reasons a destination URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LongUrlError {
    #[error("URL is required")]
    Empty,

    #[error("URL exceeds {MAX_LONG_URL_LENGTH} characters")]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates a caller-supplied destination and returns its canonical form.
///
/// The canonical form is the WHATWG serialization produced by [`Url`]: the
/// host is lowercased, default ports are dropped and non-ASCII characters are
/// percent-encoded, so the stored value is always safe to emit as a
/// `Location` header. Paths, queries and fragments are kept as written.
///
/// # Errors
///
/// Returns a [`LongUrlError`] describing why the input is not an absolute
/// HTTP(S) URL.
pub fn validate_long_url(input: &str) -> Result<String, LongUrlError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(LongUrlError::Empty);
    }

    if input.len() > MAX_LONG_URL_LENGTH {
        return Err(LongUrlError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| LongUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(LongUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(LongUrlError::MissingHost);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_with_path() {
        assert_eq!(
            validate_long_url("https://example.com/page").unwrap(),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_accepts_http() {
        assert_eq!(
            validate_long_url("http://example.com").unwrap(),
            "http://example.com/"
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(
            validate_long_url("  https://example.com/a  ").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_preserves_query_and_fragment() {
        assert_eq!(
            validate_long_url("https://example.com/search?q=rust#results").unwrap(),
            "https://example.com/search?q=rust#results"
        );
    }

    #[test]
    fn test_lowercases_host_and_drops_default_port() {
        assert_eq!(
            validate_long_url("HTTPS://EXAMPLE.COM:443/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_percent_encodes_non_ascii_path() {
        let url = validate_long_url("https://example.com/café").unwrap();
        assert_eq!(url, "https://example.com/caf%C3%A9");
        assert!(url.is_ascii());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_long_url(""), Err(LongUrlError::Empty));
        assert_eq!(validate_long_url("   "), Err(LongUrlError::Empty));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(matches!(
            validate_long_url("/just/a/path"),
            Err(LongUrlError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_long_url("example.com"),
            Err(LongUrlError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        assert_eq!(
            validate_long_url("javascript:alert(1)"),
            Err(LongUrlError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_long_url("data:text/html,hi"),
            Err(LongUrlError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_long_url("ftp://example.com/file"),
            Err(LongUrlError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_LONG_URL_LENGTH));
        assert_eq!(validate_long_url(&long), Err(LongUrlError::TooLong));
    }
}
