use std::io;
use std::path::PathBuf;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Everything that can go wrong while fetching a single category image.
///
/// None of these abort a run: the fetcher records them per item and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} for URL: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("duplicate category '{0}', skipped to keep the earlier image")]
    DuplicateCategory(String),
}

impl FetchError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable tag, used in the JSON summary.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Client(_) => "client",
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::Filesystem { .. } => "filesystem",
            Self::DuplicateCategory(_) => "duplicate",
        }
    }
}

impl Serialize for FetchError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("FetchError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_error_mentions_path() {
        let err = FetchError::filesystem(
            "/tmp/nowhere/pets.jpg",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        let message = err.to_string();
        assert!(message.contains("/tmp/nowhere/pets.jpg"));
        assert!(message.contains("denied"));
        assert_eq!(err.kind(), "filesystem");
    }

    #[test]
    fn serializes_kind_and_message() {
        let err = FetchError::DuplicateCategory("pets".to_string());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["kind"], "duplicate");
        assert!(json["message"].as_str().unwrap().contains("pets"));
    }
}
