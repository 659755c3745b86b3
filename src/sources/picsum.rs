use std::time::Duration;

use super::{to_entries, CategoryEntry, Strategy};

const CATALOG: [(&str, &str); 12] = [
    ("transport", "https://picsum.photos/id/1071/400/400"),
    ("real-estate", "https://picsum.photos/id/1031/400/400"),
    ("jobs", "https://picsum.photos/id/1/400/400"),
    ("services", "https://picsum.photos/id/1070/400/400"),
    ("electronics", "https://picsum.photos/id/367/400/400"),
    ("home", "https://picsum.photos/id/1062/400/400"),
    ("clothing", "https://picsum.photos/id/1059/400/400"),
    ("parts", "https://picsum.photos/id/252/400/400"),
    ("hobby", "https://picsum.photos/id/96/400/400"),
    ("pets", "https://picsum.photos/id/237/400/400"),
    ("beauty", "https://picsum.photos/id/360/400/400"),
    ("kids", "https://picsum.photos/id/1084/400/400"),
];

pub struct PicsumApi;

impl PicsumApi {
    pub fn strategy() -> Strategy {
        Strategy::Direct
    }

    pub fn delay() -> Duration {
        Duration::from_millis(500)
    }

    pub fn user_agent() -> &'static str {
        "Mozilla/5.0"
    }
}

pub fn entries() -> Vec<CategoryEntry> {
    to_entries(&CATALOG)
}
