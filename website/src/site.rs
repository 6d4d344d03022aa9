//! Site-wide settings.
use std::env;

use futuretech_catalog::DEFAULT_RECENT_COUNT;

pub const SITE_NAME: &str = "FutureTech";
pub const TAGLINE: &str = "Pioneering the technologies that shape tomorrow's businesses.";
pub const CONTACT_EMAIL: &str = "hello@futuretech.com";

/// Number of posts in the "latest insights" preview of the home page.
pub const RECENT_POSTS: usize = DEFAULT_RECENT_COUNT;
/// Featured posts shown above the blog grid.
pub const FEATURED_PREVIEW: usize = 2;
/// Query string parameter carrying the search term between the category pages of a section.
pub const SEARCH_QUERY_PARAM: &str = "q";

const BASE_URL_VAR: &str = "FUTURETECH_BASE_URL";
const DEFAULT_BASE_URL: &str = "https://futuretech.com";

/// Entries of the navigation bar, in order.
pub const NAVIGATION: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About", "/about/"),
    ("Features", "/features/"),
    ("Projects", "/projects/"),
    ("Blog", "/blog/"),
    ("Contact", "/contact/"),
];

/// The URL the site is deployed at, without a trailing slash.
///
/// Read from `FUTURETECH_BASE_URL`, e.g. to build previews under another domain.
pub fn base_url() -> String {
    resolve_base_url(env::var(BASE_URL_VAR).ok())
}

fn resolve_base_url(value: Option<String>) -> String {
    value
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_fallback() {
        assert_eq!(resolve_base_url(None), "https://futuretech.com");
        assert_eq!(resolve_base_url(Some("  ".to_string())), "https://futuretech.com");
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        assert_eq!(
            resolve_base_url(Some("https://preview.futuretech.com/".to_string())),
            "https://preview.futuretech.com"
        );
    }
}
