/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use crate::endpoints::{
  coins::CoinsEndpoints, events::EventsEndpoints, exchange_rates::ExchangeRatesEndpoints,
  exchanges::ExchangesEndpoints, global::GlobalEndpoints, onchain::OnchainEndpoints,
  simple::SimpleEndpoints, status_updates::StatusUpdatesEndpoints,
};

use crate::transport::Transport;
use cg_core::{Config, Envelope, Result};
use std::sync::Arc;

/// Main CoinGecko API client
///
/// Provides access to all CoinGecko API endpoints through organized endpoint
/// namespaces. The client is stateless apart from its pooled HTTP
/// connections; clone it freely and share it across tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use cg_client::{CoinGeckoClient, Config};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinGeckoClient::new(Config::from_env()?)?;
///
///     let ping = client.ping().await?;
///     println!("{} {}: {}", ping.code, ping.message, ping.data);
///
///     let exchanges = client.exchanges().list().await?;
///     println!("{} exchanges", exchanges.data.as_array().map_or(0, |a| a.len()));
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
  transport: Arc<Transport>,
}

impl CoinGeckoClient {
  /// Create a new CoinGecko API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created or the configured
  /// base URL does not parse.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Create a client around a caller-built `reqwest::Client`
  pub fn with_http_client(config: Config, client: reqwest::Client) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::with_client(&config, client)?) })
  }

  /// Check API server status (`/ping`)
  pub async fn ping(&self) -> Result<Envelope> {
    self.global_endpoints().ping().await
  }

  /// Global cryptocurrency market data (`/global`)
  pub async fn global(&self) -> Result<Envelope> {
    self.global_endpoints().global().await
  }

  /// Global DeFi market data (`/global/decentralized_finance_defi`)
  pub async fn global_defi(&self) -> Result<Envelope> {
    self.global_endpoints().decentralized_finance().await
  }

  /// Heartbeat and global aggregate endpoints
  pub fn global_endpoints(&self) -> GlobalEndpoints {
    GlobalEndpoints::new(self.transport.clone())
  }

  /// Get access to coin endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let markets = client.coins().markets(&MarketsParams::default()).await?;
  /// let btc = client.coins().fetch("bitcoin", &CoinParams::default()).await?;
  /// ```
  pub fn coins(&self) -> CoinsEndpoints {
    CoinsEndpoints::new(self.transport.clone())
  }

  /// Get access to exchange endpoints
  pub fn exchanges(&self) -> ExchangesEndpoints {
    ExchangesEndpoints::new(self.transport.clone())
  }

  /// Get access to the global status update feed
  pub fn status_updates(&self) -> StatusUpdatesEndpoints {
    StatusUpdatesEndpoints::new(self.transport.clone())
  }

  /// Get access to event endpoints
  pub fn events(&self) -> EventsEndpoints {
    EventsEndpoints::new(self.transport.clone())
  }

  /// Get access to BTC exchange rates
  pub fn exchange_rates(&self) -> ExchangeRatesEndpoints {
    ExchangeRatesEndpoints::new(self.transport.clone())
  }

  /// Get access to simple price lookups
  pub fn simple(&self) -> SimpleEndpoints {
    SimpleEndpoints::new(self.transport.clone())
  }

  /// Get access to on-chain DEX endpoints
  pub fn onchain(&self) -> OnchainEndpoints {
    OnchainEndpoints::new(self.transport.clone())
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}
