use serde::{Deserialize, Serialize};

/// What the platform guessed a post links to. Often wrong, so it only ever
/// breaks ties for links the rule chain could not place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostHint {
    #[serde(alias = "self")]
    SelfPost,
    Link,
    Image,
    HostedVideo,
    RichVideo,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl Thumbnail {
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }
}

/// Preview images the platform generated for a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnails {
    pub source: Option<Thumbnail>,
    #[serde(default)]
    pub variations: Vec<Thumbnail>,
}

/// The parts of a post the classifier cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub url: String,
    #[serde(default)]
    pub post_hint: Option<PostHint>,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
}
