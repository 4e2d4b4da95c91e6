//! HTTP transport layer for CoinGecko API requests

use cg_core::{Config, Envelope, Error, RequestOptions, Result};
use reqwest::Client;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// HTTP transport layer for making requests to the CoinGecko API
///
/// Holds a connection-pooling `reqwest::Client`; no per-call state is kept,
/// so one instance is shared by every endpoint namespace.
pub struct Transport {
  client: Client,
  base_url: Url,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .user_agent(config.user_agent.as_str())
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Self::with_client(config, client)
  }

  /// Create a transport around an existing HTTP client
  pub fn with_client(config: &Config, client: Client) -> Result<Self> {
    let base_url = config.parse_base_url()?;
    Ok(Self { client, base_url })
  }

  /// Issue a GET for `options` and normalize the response into an [`Envelope`]
  ///
  /// HTTP-level failures come back as `Ok` with `success == false`. Only
  /// connection/read failures, HTML error pages and unparseable bodies are
  /// returned as errors.
  #[instrument(skip(self, options), fields(path = %options.path))]
  pub async fn get(&self, options: &RequestOptions) -> Result<Envelope> {
    let url = self.build_url(options)?;
    debug!("Making request to: {}", url);

    let response = self.client.get(url).send().await.map_err(|e| {
      error!("Request failed: {}", e);
      Error::Http(format!("Request failed: {}", e))
    })?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response status: {}, body length: {} bytes", status, text.len());
    if !status.is_success() {
      warn!("CoinGecko answered {} for {}", status, options.path);
    }

    Envelope::from_response(status.as_u16(), status.canonical_reason().unwrap_or(""), &text)
  }

  /// Build the full URL for an API request
  fn build_url(&self, options: &RequestOptions) -> Result<Url> {
    self
      .base_url
      .join(&options.path)
      .map_err(|e| Error::Http(format!("Invalid request path {}: {}", options.path, e)))
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    self.base_url.as_str()
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport").field("base_url", &self.base_url.as_str()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cg_core::QueryParams;

  #[test]
  fn test_build_url() {
    let transport = Transport::new(&Config::default()).unwrap();
    let mut params = QueryParams::new();
    params.push("ids", "bitcoin,ethereum").push("vs_currency", "usd");

    let url = transport.build_url(&RequestOptions::get_with("/coins/markets", &params)).unwrap();

    assert_eq!(
      url.as_str(),
      "https://api.coingecko.com/api/v3/coins/markets?ids=bitcoin%2Cethereum&vs_currency=usd"
    );
  }

  #[test]
  fn test_build_url_against_override() {
    let config = Config::with_base_url("http://127.0.0.1:9999").unwrap();
    let transport = Transport::new(&config).unwrap();

    let url = transport.build_url(&RequestOptions::get("/ping")).unwrap();

    assert_eq!(url.as_str(), "http://127.0.0.1:9999/api/v3/ping");
  }

  #[test]
  fn test_base_url_with_path_is_rejected() {
    let config = Config { base_url: "http://127.0.0.1:9999/proxy".to_string(), ..Config::default() };
    assert!(matches!(Transport::new(&config), Err(Error::Config(_))));
  }
}
