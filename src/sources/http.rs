use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::Config;
use crate::errors::{TedditError, TedditResult};
use crate::sources::traits::{FeedClient, QueryParams};

pub struct HttpFeedClient {
    client: Client,
}

impl HttpFeedClient {
    pub fn new(timeout: Duration, user_agent: &str) -> TedditResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| TedditError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    pub fn from_config(config: &Config) -> TedditResult<Self> {
        Self::new(config.timeout, &config.user_agent)
    }

    /// Append query parameters to the URL, keeping any already present
    fn build_url(url: &str, params: &QueryParams) -> TedditResult<Url> {
        let mut parsed =
            Url::parse(url).map_err(|e| TedditError::InvalidUrl(format!("{}: {}", url, e)))?;

        // query_pairs_mut always leaves a '?' behind, even with nothing to add
        if !params.is_empty() {
            parsed.query_pairs_mut().extend_pairs(params.iter());
        }

        Ok(parsed)
    }
}

impl FeedClient for HttpFeedClient {
    fn fetch(&self, url: &str, params: &QueryParams) -> TedditResult<String> {
        let request_url = Self::build_url(url, params)?;

        tracing::debug!(url = %request_url, "fetching feed");

        let response = self
            .client
            .get(request_url.clone())
            .send()
            .map_err(|e| TedditError::network(request_url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TedditError::network(
                request_url.as_str(),
                format!("HTTP status {}", status),
            ));
        }

        response
            .text()
            .map_err(|e| TedditError::network(request_url.as_str(), e))
    }
}
