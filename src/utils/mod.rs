//! Utility modules for category-fetch
//!
//! - `files`: output directory and image file handling
//! - `http`: HTTP client construction and the `Fetcher` seam

pub mod files;
pub mod http;
