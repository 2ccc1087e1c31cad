pub mod link;
pub mod media;
pub mod post;

pub use link::{CommentLink, LinkType, ParsedLink, SubmissionLink};
pub use media::{MediaHost, MediaKind, MediaLink};
pub use post::{PostHint, PostMetadata, Thumbnail, Thumbnails};
