use super::parts::LinkParts;
use super::{media, platform, Classifier};
use crate::domain::ParsedLink;

/// One step of the classification chain.
///
/// `applies` is a cheap check on the host/path. `apply` may still decline by
/// returning `None`, in which case the chain moves on to the next rule.
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&LinkParts<'_>) -> bool,
    pub apply: fn(&Classifier, &LinkParts<'_>) -> Option<ParsedLink>,
}

/// Name reported when no rule produced a link.
pub const FALLBACK_RULE: &str = "external";

/// Tried top to bottom; the first rule that produces a link wins.
pub const RULES: &[Rule] = &[
    Rule {
        name: "submission",
        applies: platform::is_platform_domain,
        apply: platform::submission,
    },
    Rule {
        name: "live_thread",
        applies: platform::is_platform_domain,
        apply: platform::live_thread,
    },
    Rule {
        name: "subreddit",
        applies: platform::is_path_only,
        apply: platform::subreddit,
    },
    Rule {
        name: "user",
        applies: platform::is_path_only,
        apply: platform::user,
    },
    Rule {
        name: "short_link",
        applies: platform::is_short_link,
        apply: platform::short_link,
    },
    Rule {
        name: "google_amp",
        applies: platform::is_amp_wrapped,
        apply: platform::amp_unwrap,
    },
    Rule {
        name: "imgur",
        applies: media::is_imgur,
        apply: media::imgur,
    },
    Rule {
        name: "gfycat",
        applies: media::is_gfycat,
        apply: media::gfycat,
    },
    Rule {
        name: "giphy",
        applies: media::is_giphy,
        apply: media::giphy,
    },
    Rule {
        name: "reddit_uploads",
        applies: media::is_reddit_upload,
        apply: media::reddit_upload,
    },
    Rule {
        name: "image_file",
        applies: media::is_image_file,
        apply: media::image_file,
    },
    Rule {
        name: "video_file",
        applies: media::is_video_file,
        apply: media::video_file,
    },
];

/// Names of all rules in the order they are tried.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|rule| rule.name)
}
