use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::FetchError;

/// Ensure the output directory exists. Returns `true` if it had to be created.
pub fn ensure_directory(dir: &Path) -> Result<bool, FetchError> {
    if dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(dir).map_err(|e| FetchError::filesystem(dir, e))?;
    info!("created directory {}", dir.display());
    Ok(true)
}

/// `<dir>/<name>.jpg`
pub fn destination_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.jpg", name))
}

/// Write `bytes` to `path`, replacing whatever was there.
pub async fn write_image(path: &Path, bytes: &[u8]) -> Result<u64, FetchError> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| FetchError::filesystem(path, e))?;
    Ok(bytes.len() as u64)
}
