//! URL normalization for host-agnostic rewrite maps
//!
//! Turns `http://a.com/x` into `/x` so the generated map matches on the path
//! regardless of which host the request came in on.

use url::{ParseError, Url};

use crate::error;
use crate::rewrite::RedirectPair;
use crate::ui::Reporter;

/// Strips scheme, host and an optional literal from both sides of a pair
#[derive(Debug, Clone, Default)]
pub struct UrlNormalizer {
    strip_domains: bool,
    domain_to_remove: Option<String>,
}

impl UrlNormalizer {
    pub fn new(strip_domains: bool, domain_to_remove: Option<String>) -> Self {
        Self {
            strip_domains,
            domain_to_remove: domain_to_remove.filter(|domain| !domain.is_empty()),
        }
    }

    /// Build a normalizer only when at least one stripping rule is enabled
    pub fn from_flags(strip_domains: bool, domain_to_remove: Option<String>) -> Option<Self> {
        let normalizer = Self::new(strip_domains, domain_to_remove);
        normalizer.is_active().then_some(normalizer)
    }

    pub fn is_active(&self) -> bool {
        self.strip_domains || self.domain_to_remove.is_some()
    }

    pub fn normalize(&self, pair: RedirectPair, reporter: &dyn Reporter) -> RedirectPair {
        RedirectPair {
            from: self.normalize_side(pair.from, reporter),
            to: self.normalize_side(pair.to, reporter),
        }
    }

    fn normalize_side(&self, text: String, reporter: &dyn Reporter) -> String {
        let mut text = text;

        if self.strip_domains {
            match Url::parse(&text) {
                Ok(url) => text = strip_url_prefix(&text, &url),
                // A bare path has no scheme or host to strip
                Err(ParseError::RelativeUrlWithoutBase) => {}
                Err(err) => {
                    reporter.error(&error::parse::url_failed(text.as_str(), &err).to_string());
                }
            }
        }

        if let Some(domain) = &self.domain_to_remove {
            text = text.replace(domain.as_str(), "");
        }

        text
    }
}

/// Remove the authority (userinfo, host and port), then `://` and the scheme.
///
/// The authority goes first: a scheme such as `http` can be a substring of
/// the host (`http://http.example/x`), never the other way round.
fn strip_url_prefix(text: &str, url: &Url) -> String {
    let mut stripped = text.to_string();

    if let (Some(_), Some(index)) = (url.host_str(), find_ignore_case(&stripped, "://")) {
        let start = index + 3;
        let end = stripped[start..]
            .find(['/', '?', '#'])
            .map_or(stripped.len(), |len| start + len);
        stripped.replace_range(start..end, "");
    }

    stripped = remove_first_ignore_case(&stripped, "://");
    remove_first_ignore_case(&stripped, url.scheme())
}

/// The URL parser lowercases scheme and host, so matching against the
/// original text is ASCII case-insensitive. Byte offsets are preserved.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

fn remove_first_ignore_case(haystack: &str, needle: &str) -> String {
    match find_ignore_case(haystack, needle) {
        Some(start) => {
            let end = start + needle.len();
            format!("{}{}", &haystack[..start], &haystack[end..])
        }
        None => haystack.to_string(),
    }
}
