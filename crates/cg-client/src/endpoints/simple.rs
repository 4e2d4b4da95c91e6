//! Simple price lookups
//!
//! Lightweight price queries by coin id or by token contract address.

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use cg_core::request::{require_ids, require_segment};
use cg_core::{Envelope, IdList, QueryParams, RequestOptions, Result, DEFAULT_VS_CURRENCY};
use std::sync::Arc;
use tracing::instrument;

/// Optional extras shared by both price lookups
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceExtras {
  pub include_market_cap: Option<bool>,
  pub include_24hr_vol: Option<bool>,
  pub include_24hr_change: Option<bool>,
  pub include_last_updated_at: Option<bool>,
  /// Decimal places, or `full`
  pub precision: Option<String>,
}

impl PriceExtras {
  fn append_to(&self, query: &mut QueryParams) {
    query
      .push_opt("include_market_cap", self.include_market_cap)
      .push_opt("include_24hr_vol", self.include_24hr_vol)
      .push_opt("include_24hr_change", self.include_24hr_change)
      .push_opt("include_last_updated_at", self.include_last_updated_at)
      .push_opt("precision", self.precision.as_deref());
  }
}

/// Query parameters for `/simple/price`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimplePriceParams {
  /// Coin ids. Required.
  pub ids: Option<IdList>,
  /// Target currencies, defaults to `usd`
  pub vs_currencies: Option<IdList>,
  pub extras: PriceExtras,
}

/// Query parameters for `/simple/token_price/{platform}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenPriceParams {
  /// Token contract addresses. Required.
  pub contract_addresses: Option<IdList>,
  /// Target currencies, defaults to `usd`
  pub vs_currencies: Option<IdList>,
  pub extras: PriceExtras,
}

fn vs_currencies_or_default(value: Option<&IdList>) -> String {
  match value {
    Some(list) if !list.is_empty() => list.joined(),
    _ => DEFAULT_VS_CURRENCY.to_string(),
  }
}

/// Simple price endpoints
pub struct SimpleEndpoints {
  transport: Arc<Transport>,
}

impl SimpleEndpoints {
  /// Build the request for `/simple/price`
  pub fn price_request(params: &SimplePriceParams) -> Result<RequestOptions> {
    let ids = require_ids("ids", params.ids.as_ref())?;
    let mut query = QueryParams::new();
    query.push("ids", ids).push("vs_currencies", vs_currencies_or_default(params.vs_currencies.as_ref()));
    params.extras.append_to(&mut query);
    Ok(RequestOptions::get_with("/simple/price", &query))
  }

  /// Current price of coins in any supported currency
  ///
  /// # Arguments
  ///
  /// * `params` - Coin ids (required), target currencies and extras
  #[instrument(skip(self))]
  pub async fn price(&self, params: &SimplePriceParams) -> Result<Envelope> {
    let options = Self::price_request(params)?;
    self.send(options).await
  }

  pub fn supported_vs_currencies_request() -> Result<RequestOptions> {
    Ok(RequestOptions::get("/simple/supported_vs_currencies"))
  }

  /// Currencies accepted as `vs_currency`
  #[instrument(skip(self))]
  pub async fn supported_vs_currencies(&self) -> Result<Envelope> {
    let options = Self::supported_vs_currencies_request()?;
    self.send(options).await
  }

  /// Build the request for `/simple/token_price/{platform}`
  pub fn token_price_request(asset_platform: &str, params: &TokenPriceParams) -> Result<RequestOptions> {
    let platform = require_segment("asset_platform", asset_platform)?;
    let addresses = require_ids("contract_addresses", params.contract_addresses.as_ref())?;
    let mut query = QueryParams::new();
    query
      .push("contract_addresses", addresses)
      .push("vs_currencies", vs_currencies_or_default(params.vs_currencies.as_ref()));
    params.extras.append_to(&mut query);
    Ok(RequestOptions::get_with(&format!("/simple/token_price/{}", platform), &query))
  }

  /// Current price of tokens by contract address
  #[instrument(skip(self, params))]
  pub async fn token_price(&self, asset_platform: &str, params: &TokenPriceParams) -> Result<Envelope> {
    let options = Self::token_price_request(asset_platform, params)?;
    self.send(options).await
  }
}

impl_endpoint_base!(SimpleEndpoints);
