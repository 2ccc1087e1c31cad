use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use redlink::app::AppContext;
use redlink::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("redlink=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let mut ctx = AppContext::new()?;
    if let Some(format) = cli.format {
        ctx.config.output.format = format;
    }
    if cli.explain {
        ctx.config.output.explain = true;
    }

    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Classify { urls } => {
            commands::classify_urls(&ctx, &urls, &mut out)?;
        }
        Commands::Batch { path } => {
            match path {
                Some(path) => {
                    let file = File::open(&path)?;
                    commands::classify_batch(&ctx, BufReader::new(file), &mut out)?;
                }
                None => {
                    commands::classify_batch(&ctx, io::stdin().lock(), &mut out)?;
                }
            }
        }
        Commands::Post { path } => {
            commands::classify_posts(&ctx, &path, &mut out)?;
        }
        Commands::Config => {
            commands::show_config(&ctx, &mut out)?;
        }
    }

    Ok(())
}
