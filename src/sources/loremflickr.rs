use std::time::Duration;

use super::{to_entries, CategoryEntry, Strategy};

// LoremFlickr picks a random image per keyword and redirects to it.
const CATALOG: [(&str, &str); 12] = [
    ("transport", "https://loremflickr.com/400/400/transport"),
    ("real-estate", "https://loremflickr.com/400/400/house"),
    ("jobs", "https://loremflickr.com/400/400/office"),
    ("services", "https://loremflickr.com/400/400/tools"),
    ("electronics", "https://loremflickr.com/400/400/electronics"),
    ("home", "https://loremflickr.com/400/400/furniture"),
    ("clothing", "https://loremflickr.com/400/400/clothes"),
    ("parts", "https://loremflickr.com/400/400/gears"),
    ("hobby", "https://loremflickr.com/400/400/camera"),
    ("pets", "https://loremflickr.com/400/400/dog"),
    ("beauty", "https://loremflickr.com/400/400/makeup"),
    ("kids", "https://loremflickr.com/400/400/toys"),
];

pub struct LoremFlickrApi;

impl LoremFlickrApi {
    pub fn strategy() -> Strategy {
        Strategy::ResolveRedirect
    }

    pub fn delay() -> Duration {
        Duration::from_secs(1)
    }

    pub fn user_agent() -> &'static str {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
    }
}

pub fn entries() -> Vec<CategoryEntry> {
    to_entries(&CATALOG)
}
