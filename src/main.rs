use anyhow::{Context, Result};
use clap::Parser;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use syndicate::config::Config;
use syndicate::feed::Feed;
use syndicate::rss::to_document;
use syndicate::xml::write_document;

#[derive(Parser, Debug)]
#[command(name = "syndicate", about = "Render a JSON feed description as RSS 2.0")]
struct Args {
    /// Feed description in JSON, or `-` for stdin
    #[arg(value_name = "FEED")]
    input: PathBuf,

    /// Config file (defaults to ./syndicate.toml)
    #[arg(long, value_name = "FILE", default_value = "syndicate.toml")]
    config: PathBuf,

    /// Render on a single line
    #[arg(long)]
    compact: bool,

    /// Print the translated RSS structure as JSON instead of XML
    #[arg(long)]
    shape: bool,
}

fn read_feed(input: &Path) -> Result<Feed> {
    let mut raw = String::new();
    if input.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read feed from stdin")?;
    } else {
        raw = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read feed file: {}", input.display()))?;
    }

    serde_json::from_str(&raw).context("Feed is not valid JSON for the feed model")
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the document
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load(&args.config)
        .with_context(|| format!("Failed to load config: {}", args.config.display()))?;
    if args.compact {
        config.render.indent = 0;
    }

    let feed = read_feed(&args.input)?;
    let mut document = to_document(&feed);
    document.channel.apply_defaults(&config.channel);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.shape {
        serde_json::to_writer_pretty(&mut out, &document)
            .context("Failed to write RSS structure")?;
    } else {
        write_document(&document, &mut out, &config.render).context("Failed to render RSS")?;
    }
    writeln!(out)?;

    tracing::debug!(items = document.channel.items.len(), "Rendered feed");
    Ok(())
}
