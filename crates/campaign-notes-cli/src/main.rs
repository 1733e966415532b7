//! Campaign Notes CLI
//!
//! Renders campaign notes into a static card page.
//!
//! ## Usage
//!
//! ```bash
//! # Render a JSON array of {"markdown": "..."} records to stdout
//! campaign-notes render notes.json
//!
//! # Render a directory of markdown notes into a file
//! campaign-notes render session-notes/ -o index.html
//!
//! # Use a page config and emit only the card fragment
//! campaign-notes render notes.json -c page.json --fragment
//!
//! # Print the default page config
//! campaign-notes config
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use campaign_notes_core::{load_entries, Document, PageConfig, PageRenderer, CONTENT_ID};
use clap::{Parser, Subcommand};

/// Campaign Notes - markdown session notes as a card page
#[derive(Parser)]
#[command(name = "campaign-notes")]
#[command(version = "0.1.0")]
#[command(about = "Campaign Notes - render markdown notes as a card page")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render notes into an HTML page
    Render {
        /// JSON file of entries, or a directory of .md notes
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Page config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit only the rendered cards, without the surrounding document
        #[arg(long)]
        fragment: bool,
    },

    /// Print the default page config as JSON
    Config,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> Result<PageConfig> {
    match path {
        Some(path) => PageConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(PageConfig::default()),
    }
}

fn render_page(input: &Path, config: &PageConfig, fragment: bool) -> Result<String> {
    let entries = load_entries(input, config.malformed_entries)
        .with_context(|| format!("Failed to load entries from {}", input.display()))?;

    let mut doc = Document::new(config.title.as_str());
    let content = doc.container_mut(CONTENT_ID)?;
    PageRenderer::from_config(config).render(content, &entries)?;

    if fragment {
        Ok(doc.container(CONTENT_ID)?.to_fragment())
    } else {
        Ok(doc.to_html())
    }
}

fn write_output(output: Option<&Path>, html: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
            fragment,
        } => {
            let config = load_config(config.as_deref())?;
            let html = render_page(&input, &config, fragment)?;
            write_output(output.as_deref(), &html)?;
        }
        Commands::Config => {
            println!("{}", PageConfig::default().to_json_pretty()?);
        }
    }

    Ok(())
}
