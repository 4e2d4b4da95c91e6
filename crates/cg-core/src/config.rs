//! Configuration management for the CoinGecko client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the CoinGecko client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
  /// Scheme and authority requests are sent to. Production traffic always
  /// targets `https://api.coingecko.com`; overriding is meant for mock servers.
  pub base_url: String,

  /// User-Agent header sent with every request
  pub user_agent: String,
}

impl Default for Config {
  fn default() -> Self {
    Config { base_url: crate::COINGECKO_BASE_URL.to_string(), user_agent: default_user_agent() }
  }
}

impl Config {
  /// Load configuration from environment variables
  ///
  /// Reads `COINGECKO_BASE_URL` and `COINGECKO_USER_AGENT`, falling back to
  /// the defaults when unset. A `.env` file is honoured if present.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let base_url =
      env::var("COINGECKO_BASE_URL").unwrap_or_else(|_| crate::COINGECKO_BASE_URL.to_string());
    let base_url = validate_base_url(&base_url)?;

    let user_agent = match env::var("COINGECKO_USER_AGENT") {
      Ok(agent) if !agent.trim().is_empty() => agent,
      Ok(_) => return Err(Error::Config("COINGECKO_USER_AGENT is empty".to_string())),
      Err(env::VarError::NotPresent) => default_user_agent(),
      Err(e) => return Err(e.into()),
    };

    Ok(Config { base_url, user_agent })
  }

  /// Create a config pointing at a different base URL (mock servers in tests)
  pub fn with_base_url(base_url: &str) -> Result<Self> {
    Ok(Config { base_url: validate_base_url(base_url)?, ..Config::default() })
  }

  /// Parse `base_url`, applying the same rules as [`Config::with_base_url`]
  ///
  /// The fields are public, so a hand-built config is checked again here
  /// before a transport relies on it.
  pub fn parse_base_url(&self) -> Result<Url> {
    let validated = validate_base_url(&self.base_url)?;
    Url::parse(&validated)
      .map_err(|e| Error::Config(format!("Invalid COINGECKO_BASE_URL '{}': {}", self.base_url, e)))
  }
}

fn default_user_agent() -> String {
  format!("cg-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Request paths are absolute, so only a scheme and authority survive the
/// join. A path, query or fragment on the base URL is rejected rather than
/// silently dropped.
fn validate_base_url(raw: &str) -> Result<String> {
  let parsed = Url::parse(raw)
    .map_err(|e| Error::Config(format!("Invalid COINGECKO_BASE_URL '{}': {}", raw, e)))?;

  match parsed.scheme() {
    "http" | "https" => {},
    other => return Err(Error::Config(format!("Unsupported scheme '{}' in base URL", other))),
  }

  if parsed.path() != "/" || parsed.query().is_some() || parsed.fragment().is_some() {
    return Err(Error::Config(format!(
      "Base URL must be a scheme and authority only (e.g. https://api.coingecko.com), got '{}'",
      raw
    )));
  }

  Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Mutex;

  #[test]
  fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.base_url, "https://api.coingecko.com");
    assert!(config.user_agent.starts_with("cg-client/"));
  }

  #[test]
  fn test_with_base_url_strips_trailing_slash() {
    let config = Config::with_base_url("http://127.0.0.1:8080/").unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:8080");
  }

  #[test]
  fn test_with_base_url_rejects_garbage() {
    assert!(matches!(Config::with_base_url("not a url"), Err(Error::Config(_))));
    assert!(matches!(Config::with_base_url("ftp://example.com"), Err(Error::Config(_))));
  }

  #[test]
  fn test_with_base_url_rejects_path_query_and_fragment() {
    for raw in [
      "http://127.0.0.1:8080/proxy",
      "http://127.0.0.1:8080/proxy/",
      "http://127.0.0.1:8080/?key=1",
      "http://127.0.0.1:8080/#top",
    ] {
      assert!(matches!(Config::with_base_url(raw), Err(Error::Config(_))), "{} should be rejected", raw);
    }
  }

  #[test]
  fn test_parse_base_url_checks_hand_built_config() {
    let config = Config::default();
    assert_eq!(config.parse_base_url().unwrap().as_str(), "https://api.coingecko.com/");

    let config = Config { base_url: "http://localhost/proxy".to_string(), ..Config::default() };
    assert!(matches!(config.parse_base_url(), Err(Error::Config(_))));
  }

  // Environment variables are process-wide; tests touching them take this lock.
  static ENV_LOCK: Mutex<()> = Mutex::new(());

  fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], test: F) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    for (key, value) in vars {
      match value {
        Some(value) => env::set_var(key, value),
        None => env::remove_var(key),
      }
    }
    test();
    for (key, _) in vars {
      env::remove_var(key);
    }
  }

  #[test]
  fn test_config_from_env_defaults() {
    with_env(&[("COINGECKO_BASE_URL", None), ("COINGECKO_USER_AGENT", None)], || {
      let config = Config::from_env().unwrap();
      assert_eq!(config, Config::default());
    });
  }

  #[test]
  fn test_config_from_env_overrides() {
    with_env(
      &[("COINGECKO_BASE_URL", Some("http://127.0.0.1:4010/")), ("COINGECKO_USER_AGENT", Some("tracker/2.0"))],
      || {
        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:4010");
        assert_eq!(config.user_agent, "tracker/2.0");
      },
    );
  }

  #[test]
  fn test_config_from_env_rejects_empty_user_agent() {
    with_env(&[("COINGECKO_BASE_URL", None), ("COINGECKO_USER_AGENT", Some("  "))], || {
      assert!(matches!(Config::from_env(), Err(Error::Config(_))));
    });
  }

  #[test]
  fn test_config_from_env_rejects_bad_base_url() {
    with_env(&[("COINGECKO_BASE_URL", Some("http://127.0.0.1:4010/proxy")), ("COINGECKO_USER_AGENT", None)], || {
      assert!(matches!(Config::from_env(), Err(Error::Config(_))));
    });
  }
}
