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

use super::status_updates::StatusUpdatesParams;
use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use cg_core::request::require_segment;
use cg_core::{Days, Envelope, IdList, Order, QueryParams, RequestOptions, Result};
use std::sync::Arc;
use tracing::instrument;

/// Query parameters for `/exchanges`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangesParams {
  pub per_page: Option<u32>,
  pub page: Option<u32>,
}

/// Query parameters for `/exchanges/{id}/tickers`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeTickersParams {
  /// Restrict to tickers of these coins
  pub coin_ids: Option<IdList>,
  pub include_exchange_logo: Option<bool>,
  pub page: Option<u32>,
  pub depth: Option<bool>,
  pub order: Option<Order>,
}

/// Query parameters for `/exchanges/{id}/volume_chart`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolumeChartParams {
  /// Window length, defaults to 1 day
  pub days: Option<Days>,
}

/// Exchange endpoints
pub struct ExchangesEndpoints {
  transport: Arc<Transport>,
}

impl ExchangesEndpoints {
  /// Build the request for `/exchanges`
  pub fn all_request(params: &ExchangesParams) -> Result<RequestOptions> {
    let mut query = QueryParams::new();
    query.push_opt("per_page", params.per_page).push_opt("page", params.page);
    Ok(RequestOptions::get_with("/exchanges", &query))
  }

  /// List exchanges with data, ordered by trust score
  #[instrument(skip(self))]
  pub async fn all(&self, params: &ExchangesParams) -> Result<Envelope> {
    let options = Self::all_request(params)?;
    self.send(options).await
  }

  /// Build the request for `/exchanges/list`
  pub fn list_request() -> Result<RequestOptions> {
    Ok(RequestOptions::get("/exchanges/list"))
  }

  /// List every exchange id and name
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Envelope> {
    let options = Self::list_request()?;
    self.send(options).await
  }

  /// Build the request for `/exchanges/{id}`
  pub fn fetch_request(exchange_id: &str) -> Result<RequestOptions> {
    let exchange_id = require_segment("exchange_id", exchange_id)?;
    Ok(RequestOptions::get(&format!("/exchanges/{}", exchange_id)))
  }

  /// Get exchange volume in BTC and its top 100 tickers
  ///
  /// # Arguments
  ///
  /// * `exchange_id` - CoinGecko exchange id (e.g., "binance"); must not be empty
  #[instrument(skip(self))]
  pub async fn fetch(&self, exchange_id: &str) -> Result<Envelope> {
    let options = Self::fetch_request(exchange_id)?;
    self.send(options).await
  }

  /// Build the request for `/exchanges/{id}/tickers`
  pub fn fetch_tickers_request(exchange_id: &str, params: &ExchangeTickersParams) -> Result<RequestOptions> {
    let exchange_id = require_segment("exchange_id", exchange_id)?;
    let mut query = QueryParams::new();
    query
      .push_ids("coin_ids", params.coin_ids.as_ref())
      .push_opt("include_exchange_logo", params.include_exchange_logo)
      .push_opt("page", params.page)
      .push_opt("depth", params.depth)
      .push_opt("order", params.order);
    Ok(RequestOptions::get_with(&format!("/exchanges/{}/tickers", exchange_id), &query))
  }

  /// Get an exchange's tickers, paginated to 100 items
  #[instrument(skip(self, params))]
  pub async fn fetch_tickers(&self, exchange_id: &str, params: &ExchangeTickersParams) -> Result<Envelope> {
    let options = Self::fetch_tickers_request(exchange_id, params)?;
    self.send(options).await
  }

  /// Build the request for `/exchanges/{id}/status_updates`
  pub fn fetch_status_updates_request(
    exchange_id: &str,
    params: &StatusUpdatesParams,
  ) -> Result<RequestOptions> {
    let exchange_id = require_segment("exchange_id", exchange_id)?;
    Ok(RequestOptions::get_with(
      &format!("/exchanges/{}/status_updates", exchange_id),
      &params.to_query(),
    ))
  }

  /// Get status updates posted by an exchange
  #[instrument(skip(self, params))]
  pub async fn fetch_status_updates(
    &self,
    exchange_id: &str,
    params: &StatusUpdatesParams,
  ) -> Result<Envelope> {
    let options = Self::fetch_status_updates_request(exchange_id, params)?;
    self.send(options).await
  }

  /// Build the request for `/exchanges/{id}/volume_chart`
  pub fn fetch_volume_chart_request(exchange_id: &str, params: &VolumeChartParams) -> Result<RequestOptions> {
    let exchange_id = require_segment("exchange_id", exchange_id)?;
    let mut query = QueryParams::new();
    query.push("days", params.days.unwrap_or_default());
    Ok(RequestOptions::get_with(&format!("/exchanges/{}/volume_chart", exchange_id), &query))
  }

  /// Get an exchange's historical volume in BTC
  #[instrument(skip(self, params))]
  pub async fn fetch_volume_chart(&self, exchange_id: &str, params: &VolumeChartParams) -> Result<Envelope> {
    let options = Self::fetch_volume_chart_request(exchange_id, params)?;
    self.send(options).await
  }
}

impl_endpoint_base!(ExchangesEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use cg_core::Error;

  #[test]
  fn test_all_without_paging() {
    let opts = ExchangesEndpoints::all_request(&ExchangesParams::default()).unwrap();
    assert_eq!(opts.path, "/api/v3/exchanges");
    assert_eq!(ExchangesEndpoints::list_request().unwrap().path, "/api/v3/exchanges/list");
  }

  #[test]
  fn test_fetch_rejects_empty_id() {
    assert!(matches!(ExchangesEndpoints::fetch_request(""), Err(Error::InvalidParameter(_))));
    assert_eq!(ExchangesEndpoints::fetch_request("binance").unwrap().path, "/api/v3/exchanges/binance");
  }

  #[test]
  fn test_tickers_join_coin_ids() {
    let params = ExchangeTickersParams {
      coin_ids: Some(["bitcoin", "ripple"].into()),
      order: Some(Order::TrustScoreDesc),
      ..Default::default()
    };
    let opts = ExchangesEndpoints::fetch_tickers_request("gdax", &params).unwrap();
    assert_eq!(
      opts.path,
      "/api/v3/exchanges/gdax/tickers?coin_ids=bitcoin%2Cripple&order=trust_score_desc"
    );
  }

  #[test]
  fn test_status_updates() {
    let opts =
      ExchangesEndpoints::fetch_status_updates_request("kraken", &StatusUpdatesParams::default()).unwrap();
    assert_eq!(opts.path, "/api/v3/exchanges/kraken/status_updates");
    assert!(ExchangesEndpoints::fetch_status_updates_request(" ", &StatusUpdatesParams::default()).is_err());
  }

  #[test]
  fn test_volume_chart_defaults_to_one_day() {
    let opts = ExchangesEndpoints::fetch_volume_chart_request("binance", &VolumeChartParams::default()).unwrap();
    assert_eq!(opts.path, "/api/v3/exchanges/binance/volume_chart?days=1");

    let opts =
      ExchangesEndpoints::fetch_volume_chart_request("binance", &VolumeChartParams { days: Some(30.into()) })
        .unwrap();
    assert_eq!(opts.query(), Some("days=30"));
  }
}
