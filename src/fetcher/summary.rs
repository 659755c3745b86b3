use std::path::PathBuf;

use serde::Serialize;

use crate::error::FetchError;
use crate::sources::Strategy;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DownloadOutcome {
    Success { bytes_written: u64, path: PathBuf },
    Failure { reason: FetchError },
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadOutcome::Success { .. })
    }
}

#[derive(Debug, Serialize)]
pub struct ItemReport {
    pub name: String,
    pub source_url: String,
    #[serde(flatten)]
    pub outcome: DownloadOutcome,
}

/// Result of a whole run, one report per entry in list order.
#[derive(Debug, Serialize)]
pub struct FetchSummary {
    pub target_dir: PathBuf,
    pub created_dir: bool,
    pub strategy: Strategy,
    pub items: Vec<ItemReport>,
}

impl FetchSummary {
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn bytes_written(&self) -> u64 {
        self.items
            .iter()
            .map(|i| match &i.outcome {
                DownloadOutcome::Success { bytes_written, .. } => *bytes_written,
                DownloadOutcome::Failure { .. } => 0,
            })
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &FetchError)> {
        self.items.iter().filter_map(|i| match &i.outcome {
            DownloadOutcome::Failure { reason } => Some((i.name.as_str(), reason)),
            DownloadOutcome::Success { .. } => None,
        })
    }
}
