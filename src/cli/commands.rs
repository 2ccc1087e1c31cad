use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::app::{AppContext, RedlinkError, Result};
use crate::classifier::Classification;
use crate::config::{Config, OutputFormat};
use crate::domain::{ParsedLink, PostMetadata};

#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<&'a str>,
    link: &'a ParsedLink,
}

fn write_record(ctx: &AppContext, out: &mut impl Write, record: &Record<'_>) -> Result<()> {
    match ctx.config.output.format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, record)?;
            writeln!(out)?;
        }
        OutputFormat::Text => match record.rule {
            Some(rule) => writeln!(out, "{}\t{}\t[{}]", record.input, record.link, rule)?,
            None => writeln!(out, "{}\t{}", record.input, record.link)?,
        },
    }
    Ok(())
}

fn write_classification(
    ctx: &AppContext,
    out: &mut impl Write,
    input: &str,
    classification: &Classification,
) -> Result<()> {
    let record = Record {
        input,
        rule: ctx.config.output.explain.then_some(classification.rule),
        link: &classification.link,
    };
    write_record(ctx, out, &record)
}

pub fn classify_urls(ctx: &AppContext, urls: &[String], out: &mut impl Write) -> Result<()> {
    for url in urls {
        let classification = ctx.classifier.classify_traced(url);
        write_classification(ctx, out, url, &classification)?;
    }
    Ok(())
}

/// Classify one URL per line, skipping blank lines and `#` comments.
/// Returns the number of URLs classified.
pub fn classify_batch(ctx: &AppContext, input: impl BufRead, out: &mut impl Write) -> Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        let url = line.trim();
        if url.is_empty() || url.starts_with('#') {
            continue;
        }
        let classification = ctx.classifier.classify_traced(url);
        write_classification(ctx, out, url, &classification)?;
        count += 1;
    }
    info!(count, "classified batch");
    Ok(count)
}

/// Classify posts from a JSON array of post metadata.
/// Returns the number of posts classified.
pub fn classify_posts(ctx: &AppContext, path: &Path, out: &mut impl Write) -> Result<usize> {
    let content = fs::read_to_string(path)?;
    let posts: Vec<PostMetadata> = serde_json::from_str(&content).map_err(|e| RedlinkError::Input {
        source_name: path.display().to_string(),
        line: e.line(),
        message: e.to_string(),
    })?;

    if posts.is_empty() {
        warn!(path = %path.display(), "no posts in file");
    }

    for post in &posts {
        let link = ctx.classifier.classify_post(post);
        let record = Record {
            input: &post.url,
            rule: None,
            link: &link,
        };
        write_record(ctx, out, &record)?;
    }
    Ok(posts.len())
}

pub fn show_config(ctx: &AppContext, out: &mut impl Write) -> Result<()> {
    match Config::default_config_path() {
        Ok(path) => writeln!(out, "# {}", path.display())?,
        Err(e) => writeln!(out, "# {e}")?,
    }
    let rendered = toml::to_string_pretty(&ctx.config).map_err(|e| RedlinkError::Other(e.to_string()))?;
    write!(out, "{rendered}")?;
    Ok(())
}
