//! Rules for links that point back into the platform itself.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::parts::LinkParts;
use super::Classifier;
use crate::domain::{CommentLink, ParsedLink, SubmissionLink};
use crate::normalizer::is_image_path;

pub(crate) const PLATFORM_DOMAIN: &str = "reddit.com";
pub(crate) const SHORT_LINK_DOMAIN: &str = "redd.it";

const AMP_MARKER: &str = "google";
const AMP_PREFIX: &str = "/amp/s/";
const AMP_PLATFORM_PREFIX: &str = "/amp/s/amp.reddit.com";

/// AMP links are unwrapped at most this many times per classification.
pub(crate) const MAX_AMP_REWRITES: u8 = 1;

/// Submission: `/r/<subreddit>/comments/<post_id>/<post_title>`
/// Comment:    `/r/<subreddit>/comments/<post_id>/<post_title>/<comment_id>`
///
/// The `/r/<subreddit>` prefix and the title may both be missing.
static RE_SUBMISSION_OR_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:/r/([a-zA-Z0-9_.\-]+))?/comments/(\w+)(?:/[^/]*)?(?:/(\w*))?").unwrap()
});
static RE_LIVE_THREAD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/live/\w*/*$").unwrap());
static RE_SUBREDDIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/r/([a-zA-Z0-9_.\-]+)/*$").unwrap());
static RE_USER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:u|user)/([a-zA-Z0-9_.\-]+)/*$").unwrap());

pub(crate) fn is_platform_domain(parts: &LinkParts<'_>) -> bool {
    parts.domain_is(PLATFORM_DOMAIN)
}

pub(crate) fn is_path_only(parts: &LinkParts<'_>) -> bool {
    parts.domain.is_empty()
}

pub(crate) fn is_short_link(parts: &LinkParts<'_>) -> bool {
    parts.domain_is(SHORT_LINK_DOMAIN) && !is_image_path(&parts.path)
}

pub(crate) fn is_amp_wrapped(parts: &LinkParts<'_>) -> bool {
    parts.domain.contains(AMP_MARKER) && parts.path.starts_with(AMP_PLATFORM_PREFIX)
}

pub(crate) fn submission(_: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    let caps = RE_SUBMISSION_OR_COMMENT.captures(&parts.path)?;
    let subreddit = caps.get(1).map(|m| m.as_str().to_string());
    let submission_id = caps.get(2)?.as_str();

    let submission = SubmissionLink::new(parts.raw, submission_id, subreddit);
    let submission = match caps.get(3).map(|m| m.as_str()).filter(|id| !id.is_empty()) {
        Some(comment_id) => submission.with_comment(CommentLink::new(comment_id, context_depth(parts))),
        None => submission,
    };

    Some(ParsedLink::Submission(submission))
}

/// `?context=N`, falling back to 0 when missing or not a non-negative number.
fn context_depth(parts: &LinkParts<'_>) -> u32 {
    parts
        .query_param("context")
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

pub(crate) fn live_thread(_: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    RE_LIVE_THREAD.is_match(&parts.path).then(|| ParsedLink::Unsupported {
        url: parts.raw.to_string(),
    })
}

pub(crate) fn subreddit(_: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    let caps = RE_SUBREDDIT.captures(&parts.path)?;
    Some(ParsedLink::Subreddit {
        name: caps[1].to_string(),
    })
}

pub(crate) fn user(_: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    let caps = RE_USER.captures(&parts.path)?;
    Some(ParsedLink::User {
        name: caps[1].to_string(),
    })
}

/// `https://redd.it/5524cd`. Short links never carry a subreddit.
pub(crate) fn short_link(_: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    let id = parts.path.trim_matches('/');
    if id.is_empty() {
        return None;
    }
    Some(ParsedLink::Submission(SubmissionLink::new(parts.raw, id, None)))
}

/// `https://www.google.com/amp/s/amp.reddit.com/r/...` is classified as the
/// `https://amp.reddit.com/r/...` link it wraps.
pub(crate) fn amp_unwrap(classifier: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    if !classifier.config().follow_amp || parts.amp_rewrites >= MAX_AMP_REWRITES {
        return None;
    }

    let start = parts.raw.find(AMP_PREFIX)? + AMP_PREFIX.len();
    let unwrapped = format!("https://{}", &parts.raw[start..]);
    debug!(from = parts.raw, to = %unwrapped, "unwrapping AMP link");

    Some(classifier.classify_at(&unwrapped, parts.amp_rewrites + 1).link)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        rule: fn(&Classifier, &LinkParts<'_>) -> Option<ParsedLink>,
        url: &str,
    ) -> Option<ParsedLink> {
        rule(&Classifier::default(), &LinkParts::parse(url))
    }

    #[test]
    fn test_submission_without_comment() {
        let url = "https://www.reddit.com/r/test/comments/abc123/title/";
        let expected = SubmissionLink::new(url, "abc123", Some("test".into()));
        assert_eq!(run(submission, url), Some(ParsedLink::Submission(expected)));
    }

    #[test]
    fn test_submission_with_comment_and_context() {
        let url = "https://www.reddit.com/r/test/comments/abc123/title/def456?context=3";
        let link = run(submission, url).unwrap();
        let submission = link.as_submission().unwrap();
        assert_eq!(submission.id, "abc123");
        assert_eq!(submission.subreddit.as_deref(), Some("test"));
        assert_eq!(submission.initial_comment, Some(CommentLink::new("def456", 3)));
    }

    #[test]
    fn test_comment_after_punctuated_title() {
        for url in [
            "https://www.reddit.com/r/test/comments/abc123/title-with-dash/def456?context=3",
            "https://www.reddit.com/r/test/comments/abc123/what's_up,_rust!/def456?context=3",
            "https://www.reddit.com/r/test/comments/abc123/caf%C3%A9/def456/?context=3",
        ] {
            let link = run(submission, url).unwrap();
            let submission = link.as_submission().unwrap();
            assert_eq!(submission.id, "abc123", "{url}");
            assert_eq!(
                submission.initial_comment,
                Some(CommentLink::new("def456", 3)),
                "{url}"
            );
        }
    }

    #[test]
    fn test_comment_context_defaults_to_zero() {
        for url in [
            "https://reddit.com/r/test/comments/abc123/title/def456",
            "https://reddit.com/r/test/comments/abc123/title/def456?context=lots",
            "https://reddit.com/r/test/comments/abc123/title/def456?context=-2",
            "https://reddit.com/r/test/comments/abc123/title/def456?context=",
        ] {
            let link = run(submission, url).unwrap();
            let comment = link.as_submission().unwrap().initial_comment.clone().unwrap();
            assert_eq!(comment.context, 0, "{url}");
        }
    }

    #[test]
    fn test_submission_without_subreddit_or_title() {
        let link = run(submission, "https://www.reddit.com/comments/abc123/").unwrap();
        let submission = link.as_submission().unwrap();
        assert_eq!(submission.id, "abc123");
        assert_eq!(submission.subreddit, None);
        assert_eq!(submission.initial_comment, None);
    }

    #[test]
    fn test_submission_without_trailing_slash() {
        let link = run(submission, "https://old.reddit.com/r/rust/comments/xyz9").unwrap();
        assert_eq!(link.as_submission().unwrap().id, "xyz9");
    }

    #[test]
    fn test_non_submission_paths_do_not_match() {
        assert_eq!(run(submission, "https://www.reddit.com/r/test/"), None);
        assert_eq!(run(submission, "https://www.reddit.com/live/abc"), None);
    }

    #[test]
    fn test_live_thread() {
        let url = "https://www.reddit.com/live/ysrfjcdc2lj1/";
        assert_eq!(
            run(live_thread, url),
            Some(ParsedLink::Unsupported { url: url.into() })
        );
        assert_eq!(run(live_thread, "https://www.reddit.com/live/a/b"), None);
    }

    #[test]
    fn test_subreddit_path() {
        assert_eq!(
            run(subreddit, "/r/androiddev"),
            Some(ParsedLink::Subreddit {
                name: "androiddev".into()
            })
        );
        assert_eq!(
            run(subreddit, "/r/some_sub.name-2//"),
            Some(ParsedLink::Subreddit {
                name: "some_sub.name-2".into()
            })
        );
        assert_eq!(run(subreddit, "/r/androiddev/top"), None);
    }

    #[test]
    fn test_user_path() {
        assert_eq!(
            run(user, "/u/someuser"),
            Some(ParsedLink::User {
                name: "someuser".into()
            })
        );
        assert_eq!(
            run(user, "/user/someuser/"),
            Some(ParsedLink::User {
                name: "someuser".into()
            })
        );
        assert_eq!(run(user, "/r/someuser"), None);
    }

    #[test]
    fn test_short_link() {
        let url = "https://redd.it/5524cd";
        assert_eq!(
            run(short_link, url),
            Some(ParsedLink::Submission(SubmissionLink::new(url, "5524cd", None)))
        );
        assert_eq!(run(short_link, "https://redd.it/"), None);
    }

    #[test]
    fn test_short_link_predicate_skips_images() {
        assert!(is_short_link(&LinkParts::parse("https://redd.it/5524cd")));
        assert!(!is_short_link(&LinkParts::parse("https://i.redd.it/abc.png")));
    }

    #[test]
    fn test_amp_predicate() {
        assert!(is_amp_wrapped(&LinkParts::parse(
            "https://www.google.com/amp/s/amp.reddit.com/r/rust/comments/abc/title/"
        )));
        assert!(!is_amp_wrapped(&LinkParts::parse(
            "https://www.google.com/amp/s/example.com/page"
        )));
    }

    #[test]
    fn test_amp_unwrap() {
        let link = run(
            amp_unwrap,
            "https://www.google.com/amp/s/amp.reddit.com/r/NoStupidQuestions/comments/2qwyo7/what_is_red_velvet_supposed_to_taste_like/",
        )
        .unwrap();
        let submission = link.as_submission().unwrap();
        assert_eq!(submission.id, "2qwyo7");
        assert_eq!(submission.subreddit.as_deref(), Some("NoStupidQuestions"));
        assert!(submission.url.starts_with("https://amp.reddit.com/"));
    }

    #[test]
    fn test_amp_unwrap_stops_after_one_rewrite() {
        let parts = LinkParts::parse_at(
            "https://www.google.com/amp/s/amp.reddit.com/r/rust/comments/abc/t/",
            MAX_AMP_REWRITES,
        );
        assert_eq!(amp_unwrap(&Classifier::default(), &parts), None);
    }

    #[test]
    fn test_amp_unwrap_disabled() {
        let classifier = Classifier::new(crate::classifier::ClassifierConfig::strict());
        let parts = LinkParts::parse("https://www.google.com/amp/s/amp.reddit.com/r/rust/comments/abc/t/");
        assert_eq!(amp_unwrap(&classifier, &parts), None);
    }
}
