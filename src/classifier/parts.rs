use url::{ParseError, Url};

use crate::normalizer::decode_path;

/// A URL taken apart into the pieces the rules match on.
///
/// Anything that cannot be parsed ends up with an empty domain, so it can only
/// ever be matched by the host-independent rules.
#[derive(Debug, Clone)]
pub struct LinkParts<'a> {
    /// The input with surrounding whitespace removed.
    pub raw: &'a str,
    pub url: Option<Url>,
    /// Lowercased host, empty when absent.
    pub domain: String,
    /// Percent-decoded path, empty when absent.
    pub path: String,
    /// How many AMP unwrapping steps led here.
    pub amp_rewrites: u8,
}

impl<'a> LinkParts<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self::parse_at(raw, 0)
    }

    pub(crate) fn parse_at(raw: &'a str, amp_rewrites: u8) -> Self {
        let raw = raw.trim();
        let (url, path_only) = match Url::parse(raw) {
            Ok(url) => (Some(url), false),
            // Protocol-relative, e.g. `//i.imgur.com/abc.jpg`
            Err(ParseError::RelativeUrlWithoutBase) if raw.starts_with("//") => {
                (Url::parse(&format!("https:{raw}")).ok(), false)
            }
            Err(ParseError::RelativeUrlWithoutBase) => (None, true),
            Err(_) => (None, false),
        };

        let (domain, path) = match &url {
            Some(url) => (
                url.host_str().unwrap_or_default().to_ascii_lowercase(),
                decode_path(url.path()).into_owned(),
            ),
            None if path_only => (String::new(), decode_path(strip_query(raw)).into_owned()),
            None => (String::new(), String::new()),
        };

        Self {
            raw,
            url,
            domain,
            path,
            amp_rewrites,
        }
    }

    /// Scheme of the URL, `https` when there is none.
    pub fn scheme(&self) -> &str {
        self.url.as_ref().map(Url::scheme).unwrap_or("https")
    }

    /// Path exactly as written in the URL, still percent-encoded.
    pub fn raw_path(&self) -> &str {
        self.url.as_ref().map(Url::path).unwrap_or(self.path.as_str())
    }

    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .as_ref()?
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// `true` for the domain itself and any of its subdomains.
    pub fn domain_is(&self, root: &str) -> bool {
        self.domain == root
            || self
                .domain
                .strip_suffix(root)
                .is_some_and(|prefix| prefix.ends_with('.'))
    }
}

fn strip_query(text: &str) -> &str {
    let end = text.find(['?', '#']).unwrap_or(text.len());
    &text[..end]
}
