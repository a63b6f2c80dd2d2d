//! Plain-text SEO endpoints

/// Content type served with robots.txt
pub const ROBOTS_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Sitemap index path relative to the site origin
pub const SITEMAP_INDEX_PATH: &str = "/sitemap-index.xml";

/// robots.txt allowing every crawler and pointing at the sitemap index
pub fn robots_txt(base_url: &str) -> String {
    let robots = format!(
        "\nUser-agent: *\nAllow: /\n\nSitemap: {}{}\n",
        base_url.trim_end_matches('/'),
        SITEMAP_INDEX_PATH
    );
    robots.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_txt() {
        assert_eq!(
            robots_txt("https://autosave.sa"),
            "User-agent: *\nAllow: /\n\nSitemap: https://autosave.sa/sitemap-index.xml"
        );
    }

    #[test]
    fn test_robots_txt_trailing_slash() {
        assert!(robots_txt("https://example.com/").ends_with("Sitemap: https://example.com/sitemap-index.xml"));
        assert_eq!(ROBOTS_CONTENT_TYPE, "text/plain; charset=utf-8");
    }
}
