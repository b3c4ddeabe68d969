//! Noise detection: dated archives, content sections and bare numeric pages.

use once_cell::sync::Lazy;
use regex::Regex;

/// Which noise rule matched a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseKind {
    /// `2022/01/02`, `2022-1-2`, `22/01/02` anywhere in the string.
    DateLike,
    /// A content section such as `/blog/` or `/news/` followed by more path.
    TopicSection,
    /// Last path segment is only digits (`/item/12345`).
    NumericLeaf,
    /// Last path segment is digits plus an extension (`/feed/2024.xml`).
    NumericFile,
}

impl NoiseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseKind::DateLike => "date-like",
            NoiseKind::TopicSection => "topic-section",
            NoiseKind::NumericLeaf => "numeric-leaf",
            NoiseKind::NumericFile => "numeric-file",
        }
    }
}

/// Section names whose children are templated editorial or catalogue content.
const NOISE_TOPICS: &[&str] = &[
    "blog", "news", "article", "articles", "event", "events", "shop", "product", "products",
    "docs", "support", "pages", "media", "careers", "jobs", "video", "videos", "resource",
    "resources", "category", "tag",
];

/// Which part of the URL a rule looks at.
#[derive(Debug, Clone, Copy)]
enum Scope {
    /// The whole raw string, query and fragment included.
    Whole,
    /// The path only: after the authority, before `?` or `#`.
    Path,
}

/// Splits off an optional `scheme:` and `//authority`; group 1 is the path.
static PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9+.-]*:)?(?://[^/?#]*)?([^?#]*)")
        .expect("path pattern is valid")
});

/// Rules in evaluation order; the first match wins.
static NOISE_RULES: Lazy<Vec<(NoiseKind, Scope, Regex)>> = Lazy::new(|| {
    let topics = NOISE_TOPICS.join("|");
    vec![
        (NoiseKind::DateLike, Scope::Whole, r"\d{2,4}[-/]\d{1,2}[-/]\d{1,2}".to_string()),
        (NoiseKind::TopicSection, Scope::Path, format!(r"(?i)/(?:{topics})/")),
        (NoiseKind::NumericLeaf, Scope::Path, r"/\d+/?$".to_string()),
        (NoiseKind::NumericFile, Scope::Path, r"/\d+\.[A-Za-z0-9]+$".to_string()),
    ]
    .into_iter()
    .map(|(kind, scope, pattern)| {
        let re = Regex::new(&pattern).expect("noise pattern is valid");
        (kind, scope, re)
    })
    .collect()
});

/// Path component of `raw`, without scheme, authority, query or fragment.
fn path_part(raw: &str) -> &str {
    PATH_RE
        .captures(raw)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str())
}

/// Returns the first noise rule that `raw` matches, if any.
pub fn noise_kind(raw: &str) -> Option<NoiseKind> {
    let path = path_part(raw);
    NOISE_RULES
        .iter()
        .find(|(_, scope, re)| match scope {
            Scope::Whole => re.is_match(raw),
            Scope::Path => re.is_match(path),
        })
        .map(|(kind, _, _)| *kind)
}

/// True if `raw` looks like a dated, editorial, catalogue or bare-ID page.
pub fn is_noise_url(raw: &str) -> bool {
    noise_kind(raw).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_anywhere_are_noise() {
        assert_eq!(
            noise_kind("https://e.com/2022/01/02/hello-world"),
            Some(NoiseKind::DateLike)
        );
        assert_eq!(
            noise_kind("https://e.com/archive?d=2022-01-02"),
            Some(NoiseKind::DateLike)
        );
        assert_eq!(noise_kind("https://e.com/22-1-2"), Some(NoiseKind::DateLike));
    }

    #[test]
    fn topic_sections_need_trailing_slash() {
        assert_eq!(
            noise_kind("https://e.com/blog/my-post"),
            Some(NoiseKind::TopicSection)
        );
        assert_eq!(
            noise_kind("https://e.com/en/News/"),
            Some(NoiseKind::TopicSection)
        );
        assert_eq!(noise_kind("https://e.com/blog"), None);
        assert_eq!(noise_kind("https://e.com/blogger/x"), None);
        assert_eq!(noise_kind("https://e.com/myblog/x"), None);
    }

    #[test]
    fn numeric_leaf() {
        assert_eq!(
            noise_kind("https://e.com/item/12345"),
            Some(NoiseKind::NumericLeaf)
        );
        assert_eq!(
            noise_kind("https://e.com/item/12345/"),
            Some(NoiseKind::NumericLeaf)
        );
        assert_eq!(
            noise_kind("https://e.com/item/12345?ref=home"),
            Some(NoiseKind::NumericLeaf)
        );
        assert_eq!(noise_kind("https://e.com/item/12345/edit"), None);
        assert_eq!(noise_kind("https://e.com/v2"), None);
    }

    #[test]
    fn numeric_file() {
        assert_eq!(
            noise_kind("https://e.com/feed/2024.xml"),
            Some(NoiseKind::NumericFile)
        );
        assert_eq!(
            noise_kind("https://e.com/export/991.json?x=1"),
            Some(NoiseKind::NumericFile)
        );
    }

    #[test]
    fn first_rule_wins() {
        assert_eq!(
            noise_kind("https://e.com/news/2021/3/4/77"),
            Some(NoiseKind::DateLike)
        );
        assert_eq!(
            noise_kind("https://e.com/news/77"),
            Some(NoiseKind::TopicSection)
        );
    }

    #[test]
    fn numeric_hosts_are_not_path_segments() {
        assert_eq!(noise_kind("http://163.com"), None);
        assert_eq!(noise_kind("https://360.cn?id=1"), None);
        assert_eq!(noise_kind("http://126.com#top"), None);
        assert_eq!(noise_kind("http://163.com/"), None);
        assert_eq!(noise_kind("http://10.0.0.1/admin"), None);
        assert_eq!(
            noise_kind("http://163.com/item/7"),
            Some(NoiseKind::NumericLeaf)
        );
    }

    #[test]
    fn topic_host_is_not_a_section() {
        assert_eq!(noise_kind("http://news/x"), None);
        assert_eq!(noise_kind("http://news/blog/x"), Some(NoiseKind::TopicSection));
        assert_eq!(noise_kind("https://e.com/login?next=/blog/x"), None);
    }

    #[test]
    fn path_part_strips_authority_and_query() {
        assert_eq!(path_part("https://e.com:8080/a/b?x=1#f"), "/a/b");
        assert_eq!(path_part("http://163.com?a=1"), "");
        assert_eq!(path_part("//cdn.e.com/x/1"), "/x/1");
        assert_eq!(path_part("/relative/2"), "/relative/2");
    }

    #[test]
    fn api_endpoints_are_not_noise() {
        assert!(!is_noise_url("https://api.e.com/v1/users?id=7"));
        assert!(!is_noise_url("https://e.com/login"));
        assert!(!is_noise_url("https://e.com:8443/admin/settings"));
    }
}
