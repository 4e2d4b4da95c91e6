//! # cg-core
//!
//! I/O-free building blocks of the CoinGecko client: constants, parameter
//! enumerations, the error type, configuration, request option building and
//! response normalization.

pub mod config;
pub mod envelope;
pub mod error;
pub mod request;
pub mod types;

pub use config::Config;
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use request::{QueryParams, RequestOptions};
pub use types::{Days, EventType, HttpMethod, IdList, Order, StatusUpdateCategory, StatusUpdateProjectType};

/// API version segment
pub const API_VERSION: &str = "v3";

/// Prefix prepended to every endpoint path
pub const API_PATH_PREFIX: &str = "/api/v3";

/// Fixed API host
pub const HOST: &str = "api.coingecko.com";

/// HTTPS port
pub const PORT: u16 = 443;

/// Default base URL for the CoinGecko API
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com";

/// Documented request ceiling of the public API. Not enforced by the client;
/// callers are expected to throttle themselves.
pub const REQUESTS_PER_SECOND: u32 = 10;

/// Methods the client issues
pub const ACCEPTED_METHODS: &[HttpMethod] = HttpMethod::ALL;

/// Fallback for `vs_currency`/`vs_currencies`
pub const DEFAULT_VS_CURRENCY: &str = "usd";

/// Fallback for `days` on market chart endpoints
pub const DEFAULT_DAYS: u32 = 1;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_prefix_matches_version() {
    assert_eq!(API_PATH_PREFIX, format!("/api/{}", API_VERSION));
    assert_eq!(COINGECKO_BASE_URL, format!("https://{}", HOST));
    assert_eq!(ACCEPTED_METHODS, &[HttpMethod::Get]);
  }
}
