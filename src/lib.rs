//! Downloads classified-ads category images from stock-photo services.

pub mod error;
pub mod fetcher;
pub mod logging;
pub mod placeholders;
pub mod sources;
pub mod utils;

pub use error::FetchError;
pub use fetcher::{fetch_all, FetchOptions, FetchSummary};
pub use sources::{CategoryEntry, ImageSource, SourceKind, Strategy};
