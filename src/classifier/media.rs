//! Rules for media hosts outside the platform.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::parts::LinkParts;
use super::Classifier;
use crate::domain::{MediaHost, MediaKind, MediaLink, ParsedLink};
use crate::normalizer::{ends_with_ignore_case, is_image_path, unescape_html};

const IMGUR_DOMAINS: [&str; 2] = ["imgur.com", "bildgur.de"];
const GFYCAT_DOMAIN: &str = "gfycat.com";
const GIPHY_DOMAIN: &str = "giphy.com";
const REDDIT_UPLOADS_DOMAIN: &str = "reddituploads.com";

const GIF_SUFFIXES: [&str; 2] = [".gif", ".gifv"];

/// Everything up to the first `-` or `.`:
///
/// ```text
/// /MessySpryAfricancivet
/// /MessySpryAfricancivet.gif
/// /MessySpryAfricancivet-size_restricted.gif
/// /MessySpryAfricancivet.webm
/// /MessySpryAfricancivet-mobile.mp4
/// ```
static RE_GFYCAT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/([^-.]+)").unwrap());

/// ```text
/// /media/l2JJyLbhqCF4va86c/giphy.mp4
/// /media/l2JJyLbhqCF4va86c/giphy.gif
/// /gifs/l2JJyLbhqCF4va86c/html5
/// /l2JJyLbhqCF4va86c.gif
/// ```
static RE_GIPHY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:(?:media)?(?:gifs)?/)?(\w*)[/.].*$").unwrap());

fn imgur_root(parts: &LinkParts<'_>) -> Option<&'static str> {
    IMGUR_DOMAINS
        .into_iter()
        .find(|domain| parts.domain.contains(domain))
}

pub(crate) fn is_imgur(parts: &LinkParts<'_>) -> bool {
    imgur_root(parts).is_some()
}

pub(crate) fn is_gfycat(parts: &LinkParts<'_>) -> bool {
    parts.domain.contains(GFYCAT_DOMAIN)
}

pub(crate) fn is_giphy(parts: &LinkParts<'_>) -> bool {
    parts.domain.contains(GIPHY_DOMAIN)
}

pub(crate) fn is_reddit_upload(parts: &LinkParts<'_>) -> bool {
    parts.domain.contains(REDDIT_UPLOADS_DOMAIN)
}

pub(crate) fn is_image_file(parts: &LinkParts<'_>) -> bool {
    is_image_path(&parts.path)
}

pub(crate) fn is_video_file(parts: &LinkParts<'_>) -> bool {
    ends_with_ignore_case(&parts.path, ".mp4")
}

/// GIFs become MP4s, which are a fraction of the size. Bare share links like
/// `https://imgur.com/djP1IZC` are guessed to be `https://i.imgur.com/djP1IZC.jpg`.
pub(crate) fn imgur(_: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    let root = imgur_root(parts)?;
    let mut url = parts.url.clone()?;

    let mp4_path = GIF_SUFFIXES.iter().find_map(|suffix| {
        let path = url.path();
        ends_with_ignore_case(path, suffix).then(|| format!("{}.mp4", &path[..path.len() - suffix.len()]))
    });
    let rewritten = match &mp4_path {
        Some(path) => {
            url.set_path(path);
            url.to_string()
        }
        None => parts.raw.to_string(),
    };

    let path = url.path();
    // The platform's own resized previews are only a faithful copy of still
    // images, never of a GIF or video.
    let host_supplied_direct = is_image_path(path);

    let link = if host_supplied_direct {
        MediaLink::new(rewritten, true, MediaKind::ImageOrGif, MediaHost::Imgur)
    } else if ends_with_ignore_case(path, ".mp4") {
        MediaLink::new(rewritten, false, MediaKind::Video, MediaHost::Imgur)
    } else {
        let id_path = path.trim_end_matches('/');
        if id_path.is_empty() {
            return Some(ParsedLink::external(parts.raw));
        }
        let guessed = format!("{}://i.{root}{id_path}.jpg", url.scheme());
        debug!(from = parts.raw, to = %guessed, "guessing direct imgur link");
        MediaLink::new(guessed, false, MediaKind::ImageOrGif, MediaHost::Imgur)
    };

    Some(ParsedLink::Media(link))
}

/// All gfycat variants collapse to `https://gfycat.com/<id>`.
pub(crate) fn gfycat(_: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    let id = RE_GFYCAT_ID
        .captures(parts.raw_path())
        .map(|caps| caps[1].trim_end_matches('/').to_string())
        .filter(|id| !id.is_empty());

    let link = match id {
        Some(id) => MediaLink::new(
            format!("{}://{GFYCAT_DOMAIN}/{id}", parts.scheme()),
            false,
            MediaKind::Video,
            MediaHost::Gfycat,
        ),
        None => {
            warn!(url = parts.raw, "couldn't find gfycat id");
            MediaLink::new(parts.raw, false, MediaKind::Video, MediaHost::Gfycat)
        }
    };

    Some(ParsedLink::Media(link))
}

/// Giphy links point at `https://i.giphy.com/<id>.mp4`. Unknown shapes stay external.
pub(crate) fn giphy(_: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    let id = RE_GIPHY_ID
        .captures(parts.raw_path())
        .map(|caps| caps[1].to_string())
        // A slugged `/gifs/funny-cat-<id>` backtracks into capturing "gifs".
        .filter(|id| !id.is_empty() && id != "gifs" && id != "media");

    let link = match id {
        Some(id) => ParsedLink::Media(MediaLink::new(
            format!("{}://i.{GIPHY_DOMAIN}/{id}.mp4", parts.scheme()),
            false,
            MediaKind::Video,
            MediaHost::Giphy,
        )),
        None => ParsedLink::external(parts.raw),
    };

    Some(link)
}

/// These URLs arrive HTML-escaped (`&amp;` in the query string).
pub(crate) fn reddit_upload(_: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    Some(ParsedLink::Media(MediaLink::new(
        unescape_html(parts.raw),
        true,
        MediaKind::ImageOrGif,
        MediaHost::RedditUploads,
    )))
}

pub(crate) fn image_file(_: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    Some(ParsedLink::Media(MediaLink::new(
        parts.raw,
        true,
        MediaKind::ImageOrGif,
        MediaHost::Generic,
    )))
}

pub(crate) fn video_file(_: &Classifier, parts: &LinkParts<'_>) -> Option<ParsedLink> {
    Some(ParsedLink::Media(MediaLink::new(
        parts.raw,
        true,
        MediaKind::Video,
        MediaHost::Generic,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(
        rule: fn(&Classifier, &LinkParts<'_>) -> Option<ParsedLink>,
        url: &str,
    ) -> MediaLink {
        match rule(&Classifier::default(), &LinkParts::parse(url)) {
            Some(ParsedLink::Media(media)) => media,
            other => panic!("expected media for {url}, got {other:?}"),
        }
    }

    #[test]
    fn test_imgur_gif_becomes_mp4() {
        let link = media(imgur, "https://i.imgur.com/abcd123.gif");
        assert_eq!(link.url, "https://i.imgur.com/abcd123.mp4");
        assert_eq!(link.kind, MediaKind::Video);
        assert!(!link.host_supplied_direct);

        let link = media(imgur, "https://i.imgur.com/abcd123.gifv");
        assert_eq!(link.url, "https://i.imgur.com/abcd123.mp4");
    }

    #[test]
    fn test_imgur_share_link_is_guessed() {
        let link = media(imgur, "https://imgur.com/djP1IZC");
        assert_eq!(link.url, "https://i.imgur.com/djP1IZC.jpg");
        assert_eq!(link.kind, MediaKind::ImageOrGif);
        assert!(!link.host_supplied_direct);

        let link = media(imgur, "http://imgur.com/djP1IZC/");
        assert_eq!(link.url, "http://i.imgur.com/djP1IZC.jpg");
    }

    #[test]
    fn test_imgur_direct_image_kept() {
        let url = "https://i.imgur.com/djP1IZC.png";
        let link = media(imgur, url);
        assert_eq!(link.url, url);
        assert_eq!(link.kind, MediaKind::ImageOrGif);
        assert!(link.host_supplied_direct);
    }

    #[test]
    fn test_imgur_mirror_domain() {
        let link = media(imgur, "https://bildgur.de/djP1IZC");
        assert_eq!(link.url, "https://i.bildgur.de/djP1IZC.jpg");
    }

    #[test]
    fn test_imgur_rewrite_keeps_query() {
        let link = media(imgur, "https://i.imgur.com/abc.gifv?1");
        assert_eq!(link.url, "https://i.imgur.com/abc.mp4?1");
    }

    #[test]
    fn test_imgur_homepage_is_external() {
        assert_eq!(
            imgur(&Classifier::default(), &LinkParts::parse("https://imgur.com/")),
            Some(ParsedLink::external("https://imgur.com/"))
        );
    }

    #[test]
    fn test_gfycat_variants_collapse() {
        for url in [
            "https://gfycat.com/MessySpryAfricancivet",
            "https://giant.gfycat.com/MessySpryAfricancivet.gif",
            "https://thumbs.gfycat.com/MessySpryAfricancivet-size_restricted.gif",
            "https://zippy.gfycat.com/MessySpryAfricancivet.webm",
            "https://thumbs.gfycat.com/MessySpryAfricancivet-mobile.mp4",
        ] {
            let link = media(gfycat, url);
            assert_eq!(link.url, "https://gfycat.com/MessySpryAfricancivet", "{url}");
            assert_eq!(link.kind, MediaKind::Video);
            assert!(!link.host_supplied_direct);
        }
    }

    #[test]
    fn test_gfycat_id_with_digits_and_dashes() {
        let link = media(gfycat, "https://thumbs.gfycat.com/Abc123Def--mobile.mp4");
        assert_eq!(link.url, "https://gfycat.com/Abc123Def");
    }

    #[test]
    fn test_gfycat_without_id_falls_back() {
        let url = "https://gfycat.com/";
        let link = media(gfycat, url);
        assert_eq!(link.url, url);
        assert!(!link.host_supplied_direct);

        let url = "https://gfycat.com/-weird.gif";
        assert_eq!(media(gfycat, url).url, url);
    }

    #[test]
    fn test_giphy_variants() {
        for url in [
            "https://giphy.com/media/l2JJyLbhqCF4va86c/giphy.gif",
            "https://media.giphy.com/media/l2JJyLbhqCF4va86c/giphy.mp4",
            "https://giphy.com/gifs/l2JJyLbhqCF4va86c/html5",
            "https://i.giphy.com/l2JJyLbhqCF4va86c.gif",
        ] {
            let link = media(giphy, url);
            assert_eq!(link.url, "https://i.giphy.com/l2JJyLbhqCF4va86c.mp4", "{url}");
            assert_eq!(link.kind, MediaKind::Video);
            assert!(!link.host_supplied_direct);
        }
    }

    #[test]
    fn test_giphy_unknown_shape_is_external() {
        for url in [
            "https://giphy.com/",
            "https://giphy.com/l2JJyLbhqCF4va86c",
            "https://giphy.com/gifs/funny-cat-l2JJyLbhqCF4va86c",
        ] {
            assert_eq!(
                giphy(&Classifier::default(), &LinkParts::parse(url)),
                Some(ParsedLink::external(url)),
                "{url}"
            );
        }
    }

    #[test]
    fn test_reddit_upload_unescaped() {
        let link = media(
            reddit_upload,
            "https://i.reddituploads.com/e5bb4d?fit=max&amp;h=1536&amp;w=1536&amp;s=7a1",
        );
        assert_eq!(link.url, "https://i.reddituploads.com/e5bb4d?fit=max&h=1536&w=1536&s=7a1");
        assert!(link.host_supplied_direct);
        assert_eq!(link.host, MediaHost::RedditUploads);
    }

    #[test]
    fn test_file_predicates() {
        assert!(is_image_file(&LinkParts::parse("https://example.com/cat.JPEG?x=1")));
        assert!(!is_image_file(&LinkParts::parse("https://example.com/cat")));
        assert!(is_video_file(&LinkParts::parse("https://example.com/clip.mp4")));
        assert!(!is_video_file(&LinkParts::parse("https://example.com/clip.webm")));
    }

    #[test]
    fn test_host_predicates() {
        assert!(is_imgur(&LinkParts::parse("https://m.imgur.com/abc")));
        assert!(is_gfycat(&LinkParts::parse("https://thumbs.gfycat.com/abc")));
        assert!(is_giphy(&LinkParts::parse("https://media.giphy.com/abc")));
        assert!(is_reddit_upload(&LinkParts::parse("https://i.reddituploads.com/abc")));
        assert!(!is_imgur(&LinkParts::parse("https://example.com/imgur.com")));
    }
}
