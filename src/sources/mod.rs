use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

// Re-export source-specific catalogs
pub mod loremflickr;
pub mod picsum;
pub mod unsplash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Curated Unsplash photos
    Unsplash,
    /// Random LoremFlickr images, resolved through a redirect
    Loremflickr,
    /// Picsum photos by numeric ID
    Picsum,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Unsplash => "unsplash",
            SourceKind::Loremflickr => "loremflickr",
            SourceKind::Picsum => "picsum",
        };
        f.write_str(name)
    }
}

/// How the bytes for an entry are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Single GET, redirects followed transparently.
    Direct,
    /// First GET only resolves the final image URL, second GET downloads it.
    ResolveRedirect,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Direct => f.write_str("direct"),
            Strategy::ResolveRedirect => f.write_str("resolve-redirect"),
        }
    }
}

/// A category name paired with the URL its image is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    pub source_url: String,
}

impl CategoryEntry {
    pub fn new(name: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_url: source_url.into(),
        }
    }
}

/// Everything needed to run one source: its entries plus how to talk to it.
#[derive(Debug, Clone)]
pub struct ImageSource {
    pub kind: SourceKind,
    pub entries: Vec<CategoryEntry>,
    pub strategy: Strategy,
    pub default_delay: Duration,
    pub user_agent: &'static str,
}

impl ImageSource {
    pub fn builtin(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Unsplash => Self {
                kind,
                entries: unsplash::entries(),
                strategy: unsplash::UnsplashApi::strategy(),
                default_delay: unsplash::UnsplashApi::delay(),
                user_agent: unsplash::UnsplashApi::user_agent(),
            },
            SourceKind::Loremflickr => Self {
                kind,
                entries: loremflickr::entries(),
                strategy: loremflickr::LoremFlickrApi::strategy(),
                default_delay: loremflickr::LoremFlickrApi::delay(),
                user_agent: loremflickr::LoremFlickrApi::user_agent(),
            },
            SourceKind::Picsum => Self {
                kind,
                entries: picsum::entries(),
                strategy: picsum::PicsumApi::strategy(),
                default_delay: picsum::PicsumApi::delay(),
                user_agent: picsum::PicsumApi::user_agent(),
            },
        }
    }
}

pub(crate) fn to_entries(pairs: &[(&str, &str)]) -> Vec<CategoryEntry> {
    pairs
        .iter()
        .map(|(name, url)| CategoryEntry::new(*name, *url))
        .collect()
}
