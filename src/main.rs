use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};

use category_fetch::placeholders;
use category_fetch::utils::http::{HttpFetcher, HttpOptions};
use category_fetch::{fetch_all, logging, FetchOptions, ImageSource, SourceKind};

/// Fetch category images from stock-photo services
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download one image per category from a source
    Fetch {
        /// Image source to download from
        #[arg(value_enum)]
        source: SourceKind,

        /// Directory where the images are saved
        #[arg(short, long, default_value = "public/categories")]
        path: PathBuf,

        /// Pause between downloads in milliseconds (defaults to the source's own pause)
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Skip TLS certificate verification for this run
        #[arg(long, default_value_t = false)]
        insecure: bool,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,

        /// Override the source's browser user agent
        #[arg(long)]
        user_agent: Option<String>,

        /// Print the run summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Disable the progress bar
        #[arg(long, default_value_t = false)]
        no_progress: bool,
    },
    /// Show the categories and URLs of a source
    List {
        #[arg(value_enum)]
        source: SourceKind,
    },
    /// Generate gradient placeholder images for every category
    Placeholders {
        /// Directory where the images are saved
        #[arg(short, long, default_value = "public/categories")]
        path: PathBuf,

        /// Only fill in categories that have no image yet
        #[arg(long, default_value_t = false)]
        missing_only: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let args = Args::parse();

    match args.command {
        Commands::Fetch {
            source,
            path,
            delay_ms,
            insecure,
            timeout_secs,
            user_agent,
            json,
            no_progress,
        } => {
            let source = ImageSource::builtin(source);

            if !json {
                println!("Source: {} ({})", source.kind, source.strategy);
                println!("Path: {}", path.display());
            }

            let http = HttpOptions {
                verify_certificates: !insecure,
                user_agent: user_agent.unwrap_or_else(|| source.user_agent.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            };
            let fetcher = HttpFetcher::new(&http).context("could not set up HTTP client")?;

            let options = FetchOptions {
                strategy: source.strategy,
                delay: delay_ms
                    .map(Duration::from_millis)
                    .unwrap_or(source.default_delay),
                show_progress: !no_progress,
                quiet: json,
            };

            let summary = fetch_all(&fetcher, &source.entries, &path, &options).await;

            if json {
                let rendered = serde_json::to_string_pretty(&summary)
                    .context("could not serialize summary")?;
                println!("{}", rendered);
            }
        }
        Commands::List { source } => {
            let source = ImageSource::builtin(source);
            println!(
                "{} ({}, {} categories)",
                source.kind,
                source.strategy,
                source.entries.len()
            );
            for entry in &source.entries {
                println!("  {:<12} {}", entry.name, entry.source_url);
            }
        }
        Commands::Placeholders { path, missing_only } => {
            let report = placeholders::write_placeholders(&path, missing_only)
                .with_context(|| format!("could not write placeholders to {}", path.display()))?;

            if report.skipped_existing > 0 {
                println!("Kept {} existing images", report.skipped_existing);
            }
            println!("\nDone! Generated {} placeholders", report.written);
        }
    }

    Ok(())
}
