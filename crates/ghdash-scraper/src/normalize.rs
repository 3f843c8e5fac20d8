//! Post-extraction value cleanup.
//!
//! Card hrefs on the profile page are site-relative (`/owner/repo`); the
//! served record carries absolute URLs, matching what a browser would
//! navigate to.

/// Resolves a card `href` against the origin the page was fetched from.
///
/// Hrefs that already carry a scheme are returned unchanged; anything else is
/// prefixed with `base_origin` (trailing slash stripped). Hrefs on the
/// profile page always start with `/`, so plain concatenation is the whole
/// story.
#[must_use]
pub fn absolutize_href(base_origin: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_owned();
    }
    format!("{}{href}", base_origin.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_href_gets_origin_prefix() {
        assert_eq!(
            absolutize_href("https://github.com", "/octocat/Hello-World"),
            "https://github.com/octocat/Hello-World"
        );
    }

    #[test]
    fn origin_trailing_slash_is_stripped() {
        assert_eq!(
            absolutize_href("https://github.com/", "/octocat/Hello-World"),
            "https://github.com/octocat/Hello-World"
        );
    }

    #[test]
    fn absolute_https_href_is_unchanged() {
        assert_eq!(
            absolutize_href("https://github.com", "https://elsewhere.example/x"),
            "https://elsewhere.example/x"
        );
    }

    #[test]
    fn absolute_http_href_is_unchanged() {
        assert_eq!(
            absolutize_href("https://github.com", "http://elsewhere.example/x"),
            "http://elsewhere.example/x"
        );
    }

    #[test]
    fn works_against_non_default_origin() {
        assert_eq!(
            absolutize_href("http://127.0.0.1:9999", "/u/r"),
            "http://127.0.0.1:9999/u/r"
        );
    }
}
