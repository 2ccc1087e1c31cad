use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{LinkType, Thumbnails};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    ImageOrGif,
    Video,
}

/// Which media host produced the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaHost {
    Imgur,
    Gfycat,
    Giphy,
    RedditUploads,
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaLink {
    pub url: String,
    /// True when `url` is known to be a ready asset rather than a guess. Only then
    /// are the platform's own preview sizes safe to show in its place.
    pub host_supplied_direct: bool,
    pub kind: MediaKind,
    pub host: MediaHost,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previews: Option<Thumbnails>,
}

impl MediaLink {
    pub fn new(url: impl Into<String>, host_supplied_direct: bool, kind: MediaKind, host: MediaHost) -> Self {
        Self {
            url: url.into(),
            host_supplied_direct,
            kind,
            host,
            previews: None,
        }
    }

    pub fn with_previews(mut self, previews: Option<Thumbnails>) -> Self {
        self.previews = previews;
        self
    }

    /// Preview images are only a faithful stand-in for genuine images.
    pub fn usable_previews(&self) -> Option<&Thumbnails> {
        if self.host_supplied_direct && self.kind == MediaKind::ImageOrGif {
            self.previews.as_ref()
        } else {
            None
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MediaKind::ImageOrGif => "image",
            MediaKind::Video => "video",
        })
    }
}

impl fmt::Display for MediaHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MediaHost::Imgur => "imgur",
            MediaHost::Gfycat => "gfycat",
            MediaHost::Giphy => "giphy",
            MediaHost::RedditUploads => "reddituploads",
            MediaHost::Generic => "generic",
        })
    }
}

impl From<MediaKind> for LinkType {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::ImageOrGif => LinkType::ImageOrGif,
            MediaKind::Video => LinkType::Video,
        }
    }
}
