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

//! On-chain DEX data endpoints
//!
//! Networks, DEXes, token prices and trending pools, served under
//! `/onchain`.

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use cg_core::request::require_segment;
use cg_core::{Envelope, Error, IdList, QueryParams, RequestOptions, Result};
use std::sync::Arc;
use tracing::instrument;

/// Paging for network and DEX listings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageParams {
  pub page: Option<u32>,
}

/// Query parameters for trending pool lookups
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendingPoolsParams {
  /// Related resources to include: `base_token`, `quote_token`, `dex`, `network`
  pub include: Option<IdList>,
  pub page: Option<u32>,
  /// Trending window: `5m`, `1h`, `6h` or `24h`
  pub duration: Option<String>,
}

impl TrendingPoolsParams {
  fn to_query(&self) -> QueryParams {
    let mut query = QueryParams::new();
    query
      .push_ids("include", self.include.as_ref())
      .push_opt("page", self.page)
      .push_opt("duration", self.duration.as_deref());
    query
  }
}

/// On-chain endpoints
pub struct OnchainEndpoints {
  transport: Arc<Transport>,
}

impl OnchainEndpoints {
  /// Build the request for `/onchain/networks`
  pub fn networks_request(params: &PageParams) -> Result<RequestOptions> {
    let mut query = QueryParams::new();
    query.push_opt("page", params.page);
    Ok(RequestOptions::get_with("/onchain/networks", &query))
  }

  /// List supported networks
  #[instrument(skip(self))]
  pub async fn networks(&self, params: &PageParams) -> Result<Envelope> {
    let options = Self::networks_request(params)?;
    self.send(options).await
  }

  /// Build the request for `/onchain/networks/{network}/dexes`
  pub fn dexes_request(network: &str, params: &PageParams) -> Result<RequestOptions> {
    let network = require_segment("network", network)?;
    let mut query = QueryParams::new();
    query.push_opt("page", params.page);
    Ok(RequestOptions::get_with(&format!("/onchain/networks/{}/dexes", network), &query))
  }

  /// List DEXes on a network
  #[instrument(skip(self, params))]
  pub async fn dexes(&self, network: &str, params: &PageParams) -> Result<Envelope> {
    let options = Self::dexes_request(network, params)?;
    self.send(options).await
  }

  /// Build the request for `/onchain/simple/networks/{network}/token_price/{addresses}`
  ///
  /// The addresses form a path segment, comma-joined and left unencoded.
  pub fn token_price_request(network: &str, addresses: &IdList) -> Result<RequestOptions> {
    let network = require_segment("network", network)?;
    if addresses.is_empty() {
      return Err(Error::InvalidParameter("`addresses` must contain at least one address".to_string()));
    }
    let joined = addresses.joined();
    let addresses = require_segment("addresses", &joined)?;
    Ok(RequestOptions::get(&format!("/onchain/simple/networks/{}/token_price/{}", network, addresses)))
  }

  /// Token prices in USD by contract address
  ///
  /// # Arguments
  ///
  /// * `network` - Network id (e.g., "eth")
  /// * `addresses` - One or more token addresses
  #[instrument(skip(self))]
  pub async fn token_price(&self, network: &str, addresses: &IdList) -> Result<Envelope> {
    let options = Self::token_price_request(network, addresses)?;
    self.send(options).await
  }

  /// Build the request for `/onchain/networks/trending_pools`
  pub fn trending_pools_request(params: &TrendingPoolsParams) -> Result<RequestOptions> {
    Ok(RequestOptions::get_with("/onchain/networks/trending_pools", &params.to_query()))
  }

  /// Trending pools across all networks
  #[instrument(skip(self))]
  pub async fn trending_pools(&self, params: &TrendingPoolsParams) -> Result<Envelope> {
    let options = Self::trending_pools_request(params)?;
    self.send(options).await
  }

  /// Build the request for `/onchain/networks/{network}/trending_pools`
  pub fn network_trending_pools_request(network: &str, params: &TrendingPoolsParams) -> Result<RequestOptions> {
    let network = require_segment("network", network)?;
    Ok(RequestOptions::get_with(&format!("/onchain/networks/{}/trending_pools", network), &params.to_query()))
  }

  /// Trending pools on one network
  #[instrument(skip(self, params))]
  pub async fn network_trending_pools(&self, network: &str, params: &TrendingPoolsParams) -> Result<Envelope> {
    let options = Self::network_trending_pools_request(network, params)?;
    self.send(options).await
  }
}

impl_endpoint_base!(OnchainEndpoints);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_networks_and_dexes() {
    assert_eq!(OnchainEndpoints::networks_request(&PageParams::default()).unwrap().path, "/api/v3/onchain/networks");
    let opts = OnchainEndpoints::dexes_request("eth", &PageParams { page: Some(2) }).unwrap();
    assert_eq!(opts.path, "/api/v3/onchain/networks/eth/dexes?page=2");
    assert!(matches!(OnchainEndpoints::dexes_request("", &PageParams::default()), Err(Error::InvalidParameter(_))));
  }

  #[test]
  fn test_token_price_joins_addresses_in_path() {
    let addresses = IdList::from(["0xaaa", "0xbbb"]);
    let opts = OnchainEndpoints::token_price_request("eth", &addresses).unwrap();
    assert_eq!(opts.path, "/api/v3/onchain/simple/networks/eth/token_price/0xaaa,0xbbb");

    let opts = OnchainEndpoints::token_price_request("eth", &IdList::from(vec!["0xaaa", ""])).unwrap();
    assert_eq!(opts.path, "/api/v3/onchain/simple/networks/eth/token_price/0xaaa");
  }

  #[test]
  fn test_token_price_requires_addresses() {
    let err = OnchainEndpoints::token_price_request("eth", &IdList::from(Vec::<String>::new())).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
  }

  #[test]
  fn test_trending_pools() {
    let params = TrendingPoolsParams {
      include: Some(["base_token", "dex"].into()),
      duration: Some("24h".to_string()),
      ..Default::default()
    };
    let opts = OnchainEndpoints::trending_pools_request(&params).unwrap();
    assert_eq!(opts.path, "/api/v3/onchain/networks/trending_pools?include=base_token%2Cdex&duration=24h");

    let opts = OnchainEndpoints::network_trending_pools_request("solana", &TrendingPoolsParams::default()).unwrap();
    assert_eq!(opts.path, "/api/v3/onchain/networks/solana/trending_pools");
  }
}
