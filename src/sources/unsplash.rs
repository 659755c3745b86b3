use std::time::Duration;

use super::{to_entries, CategoryEntry, Strategy};

const CATALOG: [(&str, &str); 12] = [
    ("transport", "https://images.unsplash.com/photo-1549317661-bd32c8ce0db2?q=80&w=400&auto=format&fit=crop"),
    ("real-estate", "https://images.unsplash.com/photo-1560518883-ce09059eeffa?q=80&w=400&auto=format&fit=crop"),
    ("jobs", "https://images.unsplash.com/photo-1521737711867-e3b97375f902?q=80&w=400&auto=format&fit=crop"),
    ("services", "https://images.unsplash.com/photo-1621905252507-b354bcadcabc?q=80&w=400&auto=format&fit=crop"),
    ("electronics", "https://images.unsplash.com/photo-1498049794561-7780e7231661?q=80&w=400&auto=format&fit=crop"),
    ("home", "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?q=80&w=400&auto=format&fit=crop"),
    ("clothing", "https://images.unsplash.com/photo-1489987707025-afc232f7ea0f?q=80&w=400&auto=format&fit=crop"),
    ("parts", "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?q=80&w=400&auto=format&fit=crop"),
    ("hobby", "https://images.unsplash.com/photo-1502444330042-d1a1ddf9bb5b?q=80&w=400&auto=format&fit=crop"),
    ("pets", "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?q=80&w=400&auto=format&fit=crop"),
    ("beauty", "https://images.unsplash.com/photo-1596462502278-27bfdc4033c8?q=80&w=400&auto=format&fit=crop"),
    ("kids", "https://images.unsplash.com/photo-1515488442805-d37197004f1e?q=80&w=400&auto=format&fit=crop"),
];

pub struct UnsplashApi;

impl UnsplashApi {
    pub fn strategy() -> Strategy {
        Strategy::Direct
    }

    pub fn delay() -> Duration {
        Duration::ZERO
    }

    pub fn user_agent() -> &'static str {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"
    }
}

pub fn entries() -> Vec<CategoryEntry> {
    to_entries(&CATALOG)
}
