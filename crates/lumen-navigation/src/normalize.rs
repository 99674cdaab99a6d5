//! Address input normalization

/// Turn raw address bar input into a loadable URL.
///
/// Input that already carries an explicit `http://` or `https://` scheme is
/// returned unchanged; everything else is prefixed with `https://`. The
/// transform is total over all strings: no host validation, no encoding, no
/// rejection of malformed input. Whether the result actually loads is the
/// page surface's problem.
pub fn normalize(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        return input.to_string();
    }

    format!("https://{input}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_scheme_unchanged() {
        assert_eq!(normalize("https://example.com"), "https://example.com");
        assert_eq!(normalize("http://example.com"), "http://example.com");
        assert_eq!(
            normalize("https://example.com/path?q=1"),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn test_bare_input_gets_https() {
        assert_eq!(normalize("example.com"), "https://example.com");
        assert_eq!(normalize("www.example.com"), "https://www.example.com");
        assert_eq!(normalize("localhost:8080"), "https://localhost:8080");
    }

    #[test]
    fn test_empty_input() {
        // Degenerate but accepted; the surface rejects it downstream.
        assert_eq!(normalize(""), "https://");
    }

    #[test]
    fn test_idempotent() {
        for input in ["example.com", "https://example.com", "http://x y", ""] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_output_always_has_scheme() {
        for input in ["example.com", "www.example.com", "ftp://example.com", "x"] {
            let url = normalize(input);
            assert!(
                url.starts_with("http://") || url.starts_with("https://"),
                "no scheme on {url}"
            );
        }
    }
}
