//! # redlink
//!
//! Classifies URLs found in reddit posts, comments and self-text.
//!
//! Every URL is sorted into exactly one [`ParsedLink`](domain::ParsedLink):
//! a submission (optionally pointing at a comment), a subreddit, a user, a
//! platform page we cannot show natively, a direct media link, or an
//! external page. Share links of known media hosts are rewritten into URLs
//! that can be fetched directly, e.g. `https://imgur.com/djP1IZC` becomes
//! `https://i.imgur.com/djP1IZC.jpg`.
//!
//! ## Quick Start
//!
//! ```bash
//! redlink classify https://redd.it/5524cd /r/androiddev
//! redlink --format json batch links.txt
//! redlink post posts.json
//! ```
//!
//! ## Modules
//!
//! - [`app`]: Application context and error types
//! - [`classifier`]: The ordered rule chain
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Config file handling
//! - [`domain`]: Result types (ParsedLink, MediaLink, PostMetadata)
//! - [`normalizer`]: Text decoding helpers

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the configuration into a
/// [`Classifier`](classifier::Classifier).
pub mod app;

/// URL classification.
///
/// - [`classify`](classifier::classify): classify with default settings
/// - [`Classifier`](classifier::Classifier): configured classifier, also
///   handles post metadata
/// - [`RULES`](classifier::RULES): the rule chain, in precedence order
pub mod classifier;

/// Command-line interface using clap.
///
/// - `classify <url>...` - Classify URLs given as arguments
/// - `batch [path]` - Classify URLs from a file or stdin
/// - `post <path>` - Classify posts from a JSON file
/// - `config` - Show effective configuration
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/redlink/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`ParsedLink`](domain::ParsedLink): The classification result
/// - [`MediaLink`](domain::MediaLink): Direct image/video links
/// - [`PostMetadata`](domain::PostMetadata): URL plus hint and previews of a post
pub mod domain;

/// HTML unescaping and percent-decoding.
pub mod normalizer;

pub use classifier::{classify, Classifier};
pub use domain::ParsedLink;
