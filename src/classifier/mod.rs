//! URL classification.
//!
//! [`Classifier::classify`] runs a URL through an ordered list of
//! [`Rule`](rules::Rule)s and returns the first link a rule produces. Links
//! nothing recognizes come back as [`ParsedLink::External`]; classification
//! never fails.
//!
//! ```
//! use redlink::classifier::classify;
//! use redlink::domain::ParsedLink;
//!
//! assert_eq!(
//!     classify("/r/androiddev"),
//!     ParsedLink::Subreddit { name: "androiddev".into() }
//! );
//! ```

pub mod config;
pub mod media;
pub mod parts;
pub mod platform;
pub mod rules;

pub use config::ClassifierConfig;
pub use parts::LinkParts;
pub use rules::{rule_names, Rule, FALLBACK_RULE, RULES};

use tracing::debug;

use crate::domain::{MediaHost, MediaKind, MediaLink, ParsedLink, PostHint, PostMetadata};

/// A link together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub rule: &'static str,
    pub link: ParsedLink,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn classify(&self, url: &str) -> ParsedLink {
        self.classify_traced(url).link
    }

    /// Like [`classify`](Self::classify), but also reports which rule matched.
    pub fn classify_traced(&self, url: &str) -> Classification {
        self.classify_at(url, 0)
    }

    pub(crate) fn classify_at(&self, url: &str, amp_rewrites: u8) -> Classification {
        let parts = LinkParts::parse_at(url, amp_rewrites);

        for rule in RULES {
            if !(rule.applies)(&parts) {
                continue;
            }
            if let Some(link) = (rule.apply)(self, &parts) {
                debug!(rule = rule.name, url, "classified link");
                return Classification {
                    rule: rule.name,
                    link,
                };
            }
        }

        debug!(url, "no rule matched");
        Classification {
            rule: FALLBACK_RULE,
            link: ParsedLink::external(parts.raw),
        }
    }

    /// Classify a post's URL and carry its preview images over to media links.
    ///
    /// The post hint never changes what a rule decided. It only upgrades a
    /// link no rule recognized, on a host that is neither the platform nor a
    /// known media host, and only when [`ClassifierConfig::trust_post_hint`]
    /// is set.
    pub fn classify_post(&self, post: &PostMetadata) -> ParsedLink {
        let Classification { rule, link } = self.classify_traced(&post.url);
        match link {
            ParsedLink::Media(media) => ParsedLink::Media(media.with_previews(post.thumbnails.clone())),
            ParsedLink::External { url }
                if self.config.trust_post_hint
                    && rule == FALLBACK_RULE
                    && !is_known_host(&LinkParts::parse(&url)) =>
            {
                match post.post_hint.and_then(hinted_kind) {
                    Some(kind) => {
                        debug!(url = %url, ?kind, "using post hint for unrecognized link");
                        ParsedLink::Media(
                            MediaLink::new(url, false, kind, MediaHost::Generic)
                                .with_previews(post.thumbnails.clone()),
                        )
                    }
                    None => ParsedLink::External { url },
                }
            }
            link => link,
        }
    }
}

/// Hosts whose links the rules fully understand. A post hint must not
/// second-guess what they decided.
fn is_known_host(parts: &LinkParts<'_>) -> bool {
    platform::is_platform_domain(parts)
        || parts.domain_is(platform::SHORT_LINK_DOMAIN)
        || platform::is_amp_wrapped(parts)
        || media::is_imgur(parts)
        || media::is_gfycat(parts)
        || media::is_giphy(parts)
        || media::is_reddit_upload(parts)
}

fn hinted_kind(hint: PostHint) -> Option<MediaKind> {
    match hint {
        PostHint::Image => Some(MediaKind::ImageOrGif),
        PostHint::HostedVideo => Some(MediaKind::Video),
        PostHint::SelfPost | PostHint::Link | PostHint::RichVideo | PostHint::Unknown => None,
    }
}

/// Classify with the default configuration.
pub fn classify(url: &str) -> ParsedLink {
    Classifier::default().classify(url)
}
