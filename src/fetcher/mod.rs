mod summary;

#[cfg(test)]
mod mock_fetcher;

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::error::FetchError;
use crate::sources::{CategoryEntry, Strategy};
use crate::utils::files::{destination_path, ensure_directory, write_image};
use crate::utils::http::Fetcher;

pub use summary::{DownloadOutcome, FetchSummary, ItemReport};

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub strategy: Strategy,
    /// Pause between two consecutive downloads.
    pub delay: Duration,
    pub show_progress: bool,
    /// Suppress console lines, e.g. when stdout carries the JSON summary.
    pub quiet: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Direct,
            delay: Duration::ZERO,
            show_progress: false,
            quiet: false,
        }
    }
}

/// Download a single entry to `destination` using `strategy`.
pub async fn fetch_entry<F: Fetcher + ?Sized>(
    fetcher: &F,
    entry: &CategoryEntry,
    strategy: Strategy,
    destination: &Path,
) -> Result<u64, FetchError> {
    let bytes = match strategy {
        Strategy::Direct => fetcher.fetch(&entry.source_url).await?,
        Strategy::ResolveRedirect => {
            let real_url = fetcher.resolve(&entry.source_url).await?;
            fetcher.fetch(&real_url).await?
        }
    };

    write_image(destination, &bytes).await
}

/// Download every entry, in order, into `target_dir`.
///
/// Individual failures never stop the run; they end up in the returned
/// summary. Entries whose name was already seen earlier in the list are
/// reported as duplicates and not downloaded.
pub async fn fetch_all<F: Fetcher + ?Sized>(
    fetcher: &F,
    entries: &[CategoryEntry],
    target_dir: &Path,
    options: &FetchOptions,
) -> FetchSummary {
    let created_dir = match ensure_directory(target_dir) {
        Ok(created) => created,
        Err(e) => {
            warn!(error = %e, "could not prepare output directory");
            false
        }
    };

    let pb = progress_bar(entries.len(), options.show_progress && !options.quiet);
    let report = |line: String| {
        if !options.quiet {
            print_line(&pb, line);
        }
    };
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(entries.len());
    let mut attempted = false;

    for entry in entries {
        if !seen.insert(entry.name.as_str()) {
            let reason = FetchError::DuplicateCategory(entry.name.clone());
            warn!(category = %entry.name, "{}", reason);
            let outcome = DownloadOutcome::Failure { reason };
            report(item_line(&entry.name, &outcome));
            items.push(ItemReport {
                name: entry.name.clone(),
                source_url: entry.source_url.clone(),
                outcome,
            });
            pb.inc(1);
            continue;
        }

        if attempted && !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }
        attempted = true;

        pb.set_message(entry.name.clone());
        let destination = destination_path(target_dir, &entry.name);

        let outcome = match fetch_entry(fetcher, entry, options.strategy, &destination).await {
            Ok(bytes_written) => {
                info!(category = %entry.name, bytes_written, "saved {}", destination.display());
                DownloadOutcome::Success {
                    bytes_written,
                    path: destination,
                }
            }
            Err(reason) => {
                warn!(category = %entry.name, url = %entry.source_url, error = %reason, "download failed");
                DownloadOutcome::Failure { reason }
            }
        };
        report(item_line(&entry.name, &outcome));

        items.push(ItemReport {
            name: entry.name.clone(),
            source_url: entry.source_url.clone(),
            outcome,
        });
        pb.inc(1);
    }

    pb.finish_and_clear();

    let summary = FetchSummary {
        target_dir: target_dir.to_path_buf(),
        created_dir,
        strategy: options.strategy,
        items,
    };

    // stdout may be carrying JSON, so a quiet run reports completion on stderr.
    if options.quiet {
        eprintln!("{}", done_line(&summary));
    } else {
        println!("\n{}", done_line(&summary));
        if summary.failed() > 0 {
            eprintln!("Warning: {} downloads failed", summary.failed());
        }
    }

    summary
}

/// Console line for one finished entry.
pub fn item_line(name: &str, outcome: &DownloadOutcome) -> String {
    match outcome {
        DownloadOutcome::Success { bytes_written, .. } => {
            format!("Downloading {}... OK ({} bytes)", name, bytes_written)
        }
        DownloadOutcome::Failure { reason } => {
            format!("Downloading {}... ERROR: {}", name, reason)
        }
    }
}

/// Final line of a run, printed however many entries failed.
pub fn done_line(summary: &FetchSummary) -> String {
    format!(
        "Done! {}/{} downloaded to {} ({} bytes)",
        summary.succeeded(),
        summary.total(),
        summary.target_dir.display(),
        summary.bytes_written()
    )
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

// Hidden bars swallow println, so fall back to stdout.
fn print_line(pb: &ProgressBar, line: String) {
    if pb.is_hidden() {
        println!("{}", line);
    } else {
        pb.println(line);
    }
}
