use unicode_width::UnicodeWidthChar;

use crate::PreviewError;
use url::{Host, Url};

/// Safely truncate a string, ensuring it is not truncated in the middle of multi-byte characters
///
/// The output's display width never exceeds `max_width`, ellipsis included.
#[allow(dead_code)]
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(1);

        if current_width + char_width + 3 > max_width {
            break;
        }

        result.push(c);
        current_width += char_width;
    }

    result.push_str("...");
    result
}

pub fn host_from_url(url: &str) -> Result<Host<String>, PreviewError> {
    let parsed_url = Url::parse(url)?;
    parsed_url
        .host()
        .map(|host| host.to_owned())
        .ok_or(PreviewError::UrlParseError(url::ParseError::EmptyHost))
}

/// Short site label for the card's source row, e.g. `www.example.com` → `Example`.
///
/// One label: the whole host. Two labels: the first. More: the second.
/// IP hosts and unparsable URLs have no label.
pub fn source_label(url: &str) -> Option<String> {
    let domain = match host_from_url(url).ok()? {
        Host::Domain(domain) => domain,
        Host::Ipv4(_) | Host::Ipv6(_) => return None,
    };

    // A fully qualified host ends with an empty root label.
    let domain = domain.strip_suffix('.').unwrap_or(&domain);
    let labels: Vec<&str> = domain.split('.').collect();
    let label = match labels.as_slice() {
        [only] => *only,
        [first, _] => *first,
        [_, second, ..] => *second,
        [] => return None,
    };

    capitalize_first(label)
}

fn capitalize_first(label: &str) -> Option<String> {
    let mut chars = label.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Hello, world!", 10), "Hello, ...");
        assert_eq!(truncate_str("你好，世界！", 8), "你好...");
        assert_eq!(truncate_str("Hello 你好！", 10), "Hello ...");
        assert_eq!(truncate_str("Hi!", 10), "Hi!");
    }

    #[test]
    fn test_source_label_by_host_shape() {
        assert_eq!(
            source_label("https://www.example.com/page").as_deref(),
            Some("Example")
        );
        assert_eq!(
            source_label("https://news.example.com/a").as_deref(),
            Some("Example")
        );
        assert_eq!(source_label("https://example.com/").as_deref(), Some("Example"));
        assert_eq!(source_label("http://localhost:3000/").as_deref(), Some("Localhost"));
    }

    #[test]
    fn test_source_label_ignores_trailing_dot() {
        assert_eq!(source_label("https://example.com./a").as_deref(), Some("Example"));
        assert_eq!(
            source_label("https://www.example.com./a").as_deref(),
            Some("Example")
        );
        assert_eq!(source_label("http://localhost./").as_deref(), Some("Localhost"));
    }

    #[test]
    fn test_source_label_is_stable_across_paths() {
        assert_eq!(
            source_label("https://www.example.com/page"),
            source_label("https://www.example.com/other?q=1")
        );
    }

    #[test]
    fn test_source_label_keeps_rest_of_label() {
        assert_eq!(
            source_label("https://www.github.com/rust-lang").as_deref(),
            Some("Github")
        );
        assert_eq!(
            source_label("https://docs.rs-lang.org/").as_deref(),
            Some("Rs-lang")
        );
    }

    #[test]
    fn test_source_label_without_domain() {
        assert_eq!(source_label("http://127.0.0.1:8080/"), None);
        assert_eq!(source_label("http://[::1]/"), None);
        assert_eq!(source_label("not a url"), None);
    }

    #[test]
    fn test_host_from_url_errors() {
        assert!(matches!(
            host_from_url("relative/path"),
            Err(PreviewError::UrlParseError(_))
        ));
        assert!(matches!(
            host_from_url("mailto:someone@example.com"),
            Err(PreviewError::UrlParseError(url::ParseError::EmptyHost))
        ));
    }
}
