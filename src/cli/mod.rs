pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "redlink")]
#[command(about = "Classify reddit and media-host URLs", long_about = None)]
pub struct Cli {
    /// Output format, overriding the config file
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Also print the rule that matched each link
    #[arg(short, long, global = true)]
    pub explain: bool,

    /// Log which rules fire (same as RUST_LOG=redlink=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify the given URLs
    Classify {
        /// URLs or paths such as /r/rust
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Classify newline-separated URLs from a file
    Batch {
        /// File to read; stdin when omitted
        path: Option<PathBuf>,
    },
    /// Classify posts from a JSON array of {url, post_hint, thumbnails}
    Post {
        /// Path to the JSON file
        path: PathBuf,
    },
    /// Show the config file location and effective settings
    Config,
}
