//! URL resolution for extracted links.
//!
//! Links come out of the lexer exactly as written in the markup. Crawlers need
//! them absolute, so this module joins a link against the document's
//! `<base href>` (or the URL the document was fetched from).

use url::Url;

/// Resolve `href` against `base`.
///
/// `href` is returned unchanged when `base` is empty, when `base` is not an
/// absolute URL, or when the join fails. Absolute URLs come back in the
/// `url` crate's serialization, so `http://b.com` becomes `http://b.com/`.
#[must_use]
pub fn resolve_url(href: &str, base: &str) -> String {
    if base.is_empty() {
        return href.to_string();
    }
    Url::parse(base)
        .and_then(|base| base.join(href))
        .map_or_else(|_| href.to_string(), String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_href_is_kept() {
        assert_eq!(
            resolve_url("https://b.com/x", "http://a.com/dir/page.html"),
            "https://b.com/x"
        );
        assert_eq!(resolve_url("mailto:me@a.com", "http://a.com/"), "mailto:me@a.com");
    }

    #[test]
    fn test_empty_base_keeps_href() {
        assert_eq!(resolve_url("page.html", ""), "page.html");
    }

    #[test]
    fn test_scheme_relative() {
        assert_eq!(
            resolve_url("//cdn.com/a.js", "https://a.com/index.html"),
            "https://cdn.com/a.js"
        );
    }

    #[test]
    fn test_origin_relative() {
        assert_eq!(
            resolve_url("/about", "http://a.com/dir/page.html"),
            "http://a.com/about"
        );
        assert_eq!(resolve_url("/about", "http://a.com"), "http://a.com/about");
    }

    #[test]
    fn test_relative_path_with_dot_segments() {
        assert_eq!(
            resolve_url("../img/x.png", "http://a.com/dir/sub/page.html"),
            "http://a.com/dir/img/x.png"
        );
        assert_eq!(
            resolve_url("./next.html", "http://a.com/dir/page.html"),
            "http://a.com/dir/next.html"
        );
        assert_eq!(
            resolve_url("../../../x", "http://a.com/a/b.html"),
            "http://a.com/x"
        );
    }

    #[test]
    fn test_fragment_and_query_only() {
        assert_eq!(
            resolve_url("#top", "http://a.com/p.html#old"),
            "http://a.com/p.html#top"
        );
        assert_eq!(
            resolve_url("?page=2", "http://a.com/list?page=1"),
            "http://a.com/list?page=2"
        );
    }

    #[test]
    fn test_unparseable_base_keeps_href() {
        assert_eq!(resolve_url("x.html", "not a url"), "x.html");
        assert_eq!(resolve_url("x.html", "/relative/base"), "x.html");
    }

    #[test]
    fn test_empty_href_drops_fragment() {
        assert_eq!(resolve_url("", "http://a.com/p.html#old"), "http://a.com/p.html");
    }

    #[test]
    fn test_base_without_path() {
        assert_eq!(resolve_url("x.html", "http://a.com"), "http://a.com/x.html");
    }
}
