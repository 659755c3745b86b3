use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::debug;

use crate::error::FetchError;

/// Per-client HTTP settings. Certificate verification is a property of the
/// client built from these options, never of the process.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub verify_certificates: bool,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            verify_certificates: true,
            user_agent: get_user_agent().to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Get the fallback browser-like user agent string
pub fn get_user_agent() -> &'static str {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"
}

pub fn build_client(options: &HttpOptions) -> Result<reqwest::Client, FetchError> {
    if !options.verify_certificates {
        debug!("TLS certificate verification disabled for this client");
    }

    reqwest::Client::builder()
        .user_agent(options.user_agent.as_str())
        .timeout(options.timeout)
        .danger_accept_invalid_certs(!options.verify_certificates)
        .build()
        .map_err(FetchError::Client)
}

/// The network seam of the fetcher.
pub trait Fetcher {
    /// Follow redirects from `url` and return the final URL.
    fn resolve<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>>;

    /// Download the body at `url`. Non-2xx responses are errors.
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>, FetchError>>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(options: &HttpOptions) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(options)?,
        })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
                url: response.url().to_string(),
            });
        }

        Ok(response)
    }
}

impl Fetcher for HttpFetcher {
    fn resolve<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>> {
        async move {
            let response = self.get(url).await?;
            let final_url = response.url().to_string();
            debug!(from = url, to = %final_url, "resolved redirect");
            Ok::<_, FetchError>(final_url)
        }
        .boxed()
    }

    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Vec<u8>, FetchError>> {
        async move {
            let response = self.get(url).await?;
            let bytes = response.bytes().await?;
            Ok::<_, FetchError>(bytes.to_vec())
        }
        .boxed()
    }
}
