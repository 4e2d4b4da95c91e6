//! # cg-client
//!
//! An async CoinGecko API client for Rust.
//!
//! ## Features
//!
//! - **Flat namespaces**: `coins()`, `exchanges()`, `events()`, `simple()`,
//!   `onchain()` and friends, one method per remote endpoint
//! - **Typed parameters**: every endpoint takes a parameter record with
//!   documented defaults instead of an untyped map
//! - **Uniform results**: every completed round-trip yields an
//!   [`Envelope`] `{ success, message, code, data }`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cg_client::{CoinGeckoClient, Config};
//! use cg_client::endpoints::coins::MarketsParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGeckoClient::new(Config::default())?;
//!
//!     let markets = client.coins().markets(&MarketsParams::default()).await?;
//!     if markets.success {
//!         println!("{}", markets.data[0]["current_price"]);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Rate Limiting
//!
//! The public API allows about [`REQUESTS_PER_SECOND`] requests per second.
//! The client does not throttle; callers are responsible for pacing.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, cg_core::Error>`:
//! - `InvalidParameter`/`MissingParameter` come from parameter validation and
//!   are raised before any request is sent
//! - `Http` is a transport failure
//! - `InvalidRequest` (HTML error page) and `Parse` (non-JSON body) come from
//!   response normalization
//!
//! A 4xx/5xx answer with a JSON body is not an error: it is returned as an
//! envelope with `success == false`.

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use cg_core::{
  Config, Days, Envelope, Error, EventType, IdList, Order, RequestOptions, Result, StatusUpdateCategory,
  StatusUpdateProjectType, ACCEPTED_METHODS, API_VERSION, REQUESTS_PER_SECOND,
};
pub use client::CoinGeckoClient;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  coins::CoinsEndpoints, events::EventsEndpoints, exchange_rates::ExchangeRatesEndpoints,
  exchanges::ExchangesEndpoints, global::GlobalEndpoints, onchain::OnchainEndpoints,
  simple::SimpleEndpoints, status_updates::StatusUpdatesEndpoints, EndpointBase,
};
