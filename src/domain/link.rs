use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::MediaLink;

/// A classified URL. Exactly one variant is produced for every input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParsedLink {
    /// A post, optionally scoped to a starting comment.
    Submission(SubmissionLink),
    /// A subreddit referenced by a path such as `/r/rust`.
    Subreddit { name: String },
    /// A user referenced by a path such as `/u/spez`.
    User { name: String },
    /// A platform page we recognize but cannot open natively (live threads).
    Unsupported { url: String },
    /// A direct image or video URL.
    Media(MediaLink),
    /// Anything else.
    External { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionLink {
    pub url: String,
    pub id: String,
    /// `None` for short links and for `/comments/<id>` paths without an `/r/<name>` prefix.
    pub subreddit: Option<String>,
    pub initial_comment: Option<CommentLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentLink {
    pub id: String,
    /// Number of parent comments to show above this one.
    pub context: u32,
}

/// Coarse category that callers use to pick a screen or player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    RedditPage,
    ImageOrGif,
    Video,
    External,
}

impl SubmissionLink {
    pub fn new(url: impl Into<String>, id: impl Into<String>, subreddit: Option<String>) -> Self {
        Self {
            url: url.into(),
            id: id.into(),
            subreddit,
            initial_comment: None,
        }
    }

    pub fn with_comment(mut self, comment: CommentLink) -> Self {
        self.initial_comment = Some(comment);
        self
    }
}

impl CommentLink {
    pub fn new(id: impl Into<String>, context: u32) -> Self {
        Self {
            id: id.into(),
            context,
        }
    }
}

impl ParsedLink {
    pub fn external(url: impl Into<String>) -> Self {
        Self::External { url: url.into() }
    }

    pub fn link_type(&self) -> LinkType {
        match self {
            ParsedLink::Submission(_)
            | ParsedLink::Subreddit { .. }
            | ParsedLink::User { .. }
            | ParsedLink::Unsupported { .. } => LinkType::RedditPage,
            ParsedLink::Media(media) => media.kind.into(),
            ParsedLink::External { .. } => LinkType::External,
        }
    }

    /// The URL carried by this link, if the variant has one.
    pub fn url(&self) -> Option<&str> {
        match self {
            ParsedLink::Submission(submission) => Some(&submission.url),
            ParsedLink::Unsupported { url } | ParsedLink::External { url } => Some(url),
            ParsedLink::Media(media) => Some(&media.url),
            ParsedLink::Subreddit { .. } | ParsedLink::User { .. } => None,
        }
    }

    pub fn as_media(&self) -> Option<&MediaLink> {
        match self {
            ParsedLink::Media(media) => Some(media),
            _ => None,
        }
    }

    pub fn as_submission(&self) -> Option<&SubmissionLink> {
        match self {
            ParsedLink::Submission(submission) => Some(submission),
            _ => None,
        }
    }
}

impl fmt::Display for ParsedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedLink::Submission(submission) => {
                write!(f, "submission {}", submission.id)?;
                if let Some(subreddit) = &submission.subreddit {
                    write!(f, " in r/{subreddit}")?;
                }
                if let Some(comment) = &submission.initial_comment {
                    write!(f, ", comment {} (context {})", comment.id, comment.context)?;
                }
                Ok(())
            }
            ParsedLink::Subreddit { name } => write!(f, "subreddit r/{name}"),
            ParsedLink::User { name } => write!(f, "user u/{name}"),
            ParsedLink::Unsupported { url } => write!(f, "unsupported {url}"),
            ParsedLink::Media(media) => write!(
                f,
                "{} {} ({}, {})",
                media.kind,
                media.url,
                media.host,
                if media.host_supplied_direct { "direct" } else { "derived" }
            ),
            ParsedLink::External { url } => write!(f, "external {url}"),
        }
    }
}
