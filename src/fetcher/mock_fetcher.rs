use std::collections::HashMap;
use std::sync::Mutex;

use futures::future::{self, BoxFuture};
use futures::FutureExt;

use crate::error::FetchError;
use crate::utils::http::Fetcher;

#[derive(Debug, Clone)]
pub enum MockResponse {
    Body(Vec<u8>),
    Redirect(String),
    Status(u16),
}

/// Canned responses keyed by URL. Unknown URLs answer 404.
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, MockResponse>,
    calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn follow(&self, url: &str) -> Result<(String, Vec<u8>), FetchError> {
        let mut current = url.to_string();
        loop {
            match self.responses.get(&current) {
                Some(MockResponse::Redirect(next)) => current = next.clone(),
                Some(MockResponse::Body(body)) => return Ok((current, body.clone())),
                Some(MockResponse::Status(code)) => {
                    return Err(status_error(*code, &current));
                }
                None => return Err(status_error(404, &current)),
            }
        }
    }
}

fn status_error(code: u16, url: &str) -> FetchError {
    FetchError::Status {
        status: reqwest::StatusCode::from_u16(code).unwrap(),
        url: url.to_string(),
    }
}

impl Fetcher for MockFetcher {
    fn resolve<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>> {
        self.record(format!("resolve {}", url));
        future::ready(self.follow(url).map(|(final_url, _)| final_url)).boxed()
    }

    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>, FetchError>> {
        self.record(format!("fetch {}", url));
        future::ready(self.follow(url).map(|(_, body)| body)).boxed()
    }
}
