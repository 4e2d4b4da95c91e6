//! Coin endpoints
//!
//! This module covers everything under `/coins`:
//! - Coin listings, with and without market data
//! - Coin detail, tickers and historical snapshots
//! - Market charts by coin id or by token contract
//! - Project status updates

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use super::status_updates::StatusUpdatesParams;
use cg_core::request::{currency_or_default, require_field, require_segment, require_value};
use cg_core::{Days, Envelope, IdList, Order, QueryParams, RequestOptions, Result};
use chrono::{DateTime, NaiveDate, TimeZone};
use std::sync::Arc;
use tracing::instrument;

/// Query parameters for `/coins`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinsAllParams {
  pub order: Option<Order>,
  pub per_page: Option<u32>,
  pub page: Option<u32>,
  /// Include localized names (API default `true`)
  pub localization: Option<bool>,
  /// Include 7-day sparkline (API default `false`)
  pub sparkline: Option<bool>,
}

/// Query parameters for `/coins/list`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinsListParams {
  /// Include platform contract addresses
  pub include_platform: Option<bool>,
}

/// Query parameters for `/coins/markets`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketsParams {
  /// Target currency, defaults to `usd`
  pub vs_currency: Option<String>,
  /// Restrict to these coin ids
  pub ids: Option<IdList>,
  pub category: Option<String>,
  pub order: Option<Order>,
  pub per_page: Option<u32>,
  pub page: Option<u32>,
  pub sparkline: Option<bool>,
  /// Comma-separated windows, e.g. `1h,24h,7d`
  pub price_change_percentage: Option<String>,
}

/// Query parameters for `/coins/{id}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinParams {
  pub localization: Option<bool>,
  pub tickers: Option<bool>,
  pub market_data: Option<bool>,
  pub community_data: Option<bool>,
  pub developer_data: Option<bool>,
  pub sparkline: Option<bool>,
}

/// Query parameters for `/coins/{id}/tickers`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinTickersParams {
  pub exchange_ids: Option<IdList>,
  pub include_exchange_logo: Option<bool>,
  pub page: Option<u32>,
  /// `trust_score_desc` or `volume_desc`
  pub order: Option<Order>,
  /// Include 2% orderbook depth
  pub depth: Option<bool>,
}

/// Query parameters for `/coins/{id}/history`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryParams {
  /// Snapshot date as `dd-mm-yyyy`. Required.
  pub date: Option<String>,
  pub localization: Option<bool>,
}

impl HistoryParams {
  /// Snapshot for a calendar date
  pub fn on(date: NaiveDate) -> Self {
    HistoryParams { date: Some(date.format("%d-%m-%Y").to_string()), localization: None }
  }
}

/// Query parameters for market chart endpoints
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketChartParams {
  /// Target currency, defaults to `usd`
  pub vs_currency: Option<String>,
  /// Window length, defaults to 1 day
  pub days: Option<Days>,
  /// Data granularity, e.g. `daily`
  pub interval: Option<String>,
  pub precision: Option<String>,
}

/// Query parameters for `/coins/{id}/market_chart/range`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketChartRangeParams {
  /// Target currency, defaults to `usd`
  pub vs_currency: Option<String>,
  /// UNIX timestamp (seconds). Required.
  pub from: Option<i64>,
  /// UNIX timestamp (seconds). Required.
  pub to: Option<i64>,
  pub precision: Option<String>,
}

impl MarketChartRangeParams {
  /// Range between two instants
  pub fn between<Tz: TimeZone>(from: DateTime<Tz>, to: DateTime<Tz>) -> Self {
    MarketChartRangeParams {
      from: Some(from.timestamp()),
      to: Some(to.timestamp()),
      ..Default::default()
    }
  }
}

impl MarketChartParams {
  fn to_query(&self) -> QueryParams {
    let mut query = QueryParams::new();
    query
      .push("vs_currency", currency_or_default(self.vs_currency.as_deref()))
      .push("days", self.days.unwrap_or_default())
      .push_opt("interval", self.interval.as_deref())
      .push_opt("precision", self.precision.as_deref());
    query
  }
}

/// Coin endpoints
pub struct CoinsEndpoints {
  transport: Arc<Transport>,
}

impl CoinsEndpoints {
  /// Build the request for `/coins`
  pub fn all_request(params: &CoinsAllParams) -> Result<RequestOptions> {
    let mut query = QueryParams::new();
    query
      .push_opt("order", params.order)
      .push_opt("per_page", params.per_page)
      .push_opt("page", params.page)
      .push_opt("localization", params.localization)
      .push_opt("sparkline", params.sparkline);
    Ok(RequestOptions::get_with("/coins", &query))
  }

  /// List all coins with market data
  #[instrument(skip(self))]
  pub async fn all(&self, params: &CoinsAllParams) -> Result<Envelope> {
    let options = Self::all_request(params)?;
    self.send(options).await
  }

  /// Build the request for `/coins/list`
  pub fn list_request(params: &CoinsListParams) -> Result<RequestOptions> {
    let mut query = QueryParams::new();
    query.push_opt("include_platform", params.include_platform);
    Ok(RequestOptions::get_with("/coins/list", &query))
  }

  /// List every supported coin id, name and symbol
  #[instrument(skip(self))]
  pub async fn list(&self, params: &CoinsListParams) -> Result<Envelope> {
    let options = Self::list_request(params)?;
    self.send(options).await
  }

  /// Build the request for `/coins/markets`
  ///
  /// `vs_currency` falls back to `usd`; `ids` given as a sequence is joined
  /// with commas and then encoded, so `["bitcoin", "ethereum"]` is sent as
  /// `ids=bitcoin%2Cethereum`.
  pub fn markets_request(params: &MarketsParams) -> Result<RequestOptions> {
    let mut query = QueryParams::new();
    query
      .push("vs_currency", currency_or_default(params.vs_currency.as_deref()))
      .push_ids("ids", params.ids.as_ref())
      .push_opt("category", params.category.as_deref())
      .push_opt("order", params.order)
      .push_opt("per_page", params.per_page)
      .push_opt("page", params.page)
      .push_opt("sparkline", params.sparkline)
      .push_opt("price_change_percentage", params.price_change_percentage.as_deref());
    Ok(RequestOptions::get_with("/coins/markets", &query))
  }

  /// Get prices, market caps and volumes for coins
  ///
  /// # Arguments
  ///
  /// * `params` - Currency, id filter, ordering and paging
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cg_client::{CoinGeckoClient, Config};
  /// # use cg_client::endpoints::coins::MarketsParams;
  /// # async fn run() -> cg_client::Result<()> {
  /// let client = CoinGeckoClient::new(Config::default())?;
  /// let params = MarketsParams { ids: Some(vec!["bitcoin", "ethereum"].into()), ..Default::default() };
  /// let markets = client.coins().markets(&params).await?;
  /// if markets.success {
  ///     println!("{}", markets.data);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn markets(&self, params: &MarketsParams) -> Result<Envelope> {
    let options = Self::markets_request(params)?;
    self.send(options).await
  }

  /// Build the request for `/coins/{id}`
  pub fn fetch_request(coin_id: &str, params: &CoinParams) -> Result<RequestOptions> {
    let coin_id = require_segment("coin_id", coin_id)?;
    let mut query = QueryParams::new();
    query
      .push_opt("localization", params.localization)
      .push_opt("tickers", params.tickers)
      .push_opt("market_data", params.market_data)
      .push_opt("community_data", params.community_data)
      .push_opt("developer_data", params.developer_data)
      .push_opt("sparkline", params.sparkline);
    Ok(RequestOptions::get_with(&format!("/coins/{}", coin_id), &query))
  }

  /// Get current data for a coin
  ///
  /// # Arguments
  ///
  /// * `coin_id` - CoinGecko coin id (e.g., "bitcoin"); must not be empty
  /// * `params` - Sections of the payload to include
  #[instrument(skip(self, params))]
  pub async fn fetch(&self, coin_id: &str, params: &CoinParams) -> Result<Envelope> {
    let options = Self::fetch_request(coin_id, params)?;
    self.send(options).await
  }

  /// Build the request for `/coins/{id}/tickers`
  pub fn fetch_tickers_request(coin_id: &str, params: &CoinTickersParams) -> Result<RequestOptions> {
    let coin_id = require_segment("coin_id", coin_id)?;
    let mut query = QueryParams::new();
    query
      .push_ids("exchange_ids", params.exchange_ids.as_ref())
      .push_opt("include_exchange_logo", params.include_exchange_logo)
      .push_opt("page", params.page)
      .push_opt("order", params.order)
      .push_opt("depth", params.depth);
    Ok(RequestOptions::get_with(&format!("/coins/{}/tickers", coin_id), &query))
  }

  /// Get a coin's tickers across exchanges, paginated to 100 items
  #[instrument(skip(self, params))]
  pub async fn fetch_tickers(&self, coin_id: &str, params: &CoinTickersParams) -> Result<Envelope> {
    let options = Self::fetch_tickers_request(coin_id, params)?;
    self.send(options).await
  }

  /// Build the request for `/coins/{id}/history`
  ///
  /// Fails with `MissingParameter` when no `date` is set.
  pub fn fetch_history_request(coin_id: &str, params: &HistoryParams) -> Result<RequestOptions> {
    let coin_id = require_segment("coin_id", coin_id)?;
    let date = require_field("date", params.date.as_deref())?;
    let mut query = QueryParams::new();
    query.push("date", date).push_opt("localization", params.localization);
    Ok(RequestOptions::get_with(&format!("/coins/{}/history", coin_id), &query))
  }

  /// Get a coin's price, market cap and volume snapshot at a given date
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cg_client::{CoinGeckoClient, Config};
  /// # use cg_client::endpoints::coins::HistoryParams;
  /// # use chrono::NaiveDate;
  /// # async fn run() -> cg_client::Result<()> {
  /// let client = CoinGeckoClient::new(Config::default())?;
  /// let day = NaiveDate::from_ymd_opt(2017, 12, 30).unwrap();
  /// let snapshot = client.coins().fetch_history("bitcoin", &HistoryParams::on(day)).await?;
  /// println!("{}", snapshot.data["market_data"]["current_price"]["usd"]);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, params))]
  pub async fn fetch_history(&self, coin_id: &str, params: &HistoryParams) -> Result<Envelope> {
    let options = Self::fetch_history_request(coin_id, params)?;
    self.send(options).await
  }

  /// Build the request for `/coins/{id}/market_chart`
  pub fn fetch_market_chart_request(coin_id: &str, params: &MarketChartParams) -> Result<RequestOptions> {
    let coin_id = require_segment("coin_id", coin_id)?;
    Ok(RequestOptions::get_with(&format!("/coins/{}/market_chart", coin_id), &params.to_query()))
  }

  /// Get historical prices, market caps and volumes
  ///
  /// `vs_currency` defaults to `usd` and `days` to 1.
  #[instrument(skip(self, params))]
  pub async fn fetch_market_chart(&self, coin_id: &str, params: &MarketChartParams) -> Result<Envelope> {
    let options = Self::fetch_market_chart_request(coin_id, params)?;
    self.send(options).await
  }

  /// Build the request for `/coins/{id}/market_chart/range`
  pub fn fetch_market_chart_range_request(
    coin_id: &str,
    params: &MarketChartRangeParams,
  ) -> Result<RequestOptions> {
    let coin_id = require_segment("coin_id", coin_id)?;
    let from = require_value("from", params.from)?;
    let to = require_value("to", params.to)?;

    let mut query = QueryParams::new();
    query
      .push("vs_currency", currency_or_default(params.vs_currency.as_deref()))
      .push("from", from)
      .push("to", to)
      .push_opt("precision", params.precision.as_deref());
    Ok(RequestOptions::get_with(&format!("/coins/{}/market_chart/range", coin_id), &query))
  }

  /// Get historical market data within a UNIX timestamp range
  #[instrument(skip(self, params))]
  pub async fn fetch_market_chart_range(
    &self,
    coin_id: &str,
    params: &MarketChartRangeParams,
  ) -> Result<Envelope> {
    let options = Self::fetch_market_chart_range_request(coin_id, params)?;
    self.send(options).await
  }

  /// Build the request for `/coins/{id}/status_updates`
  pub fn fetch_status_updates_request(coin_id: &str, params: &StatusUpdatesParams) -> Result<RequestOptions> {
    let coin_id = require_segment("coin_id", coin_id)?;
    Ok(RequestOptions::get_with(&format!("/coins/{}/status_updates", coin_id), &params.to_query()))
  }

  /// Get status updates posted by a coin's project team
  #[instrument(skip(self, params))]
  pub async fn fetch_status_updates(&self, coin_id: &str, params: &StatusUpdatesParams) -> Result<Envelope> {
    let options = Self::fetch_status_updates_request(coin_id, params)?;
    self.send(options).await
  }

  /// Build the request for `/coins/{platform}/contract/{address}`
  pub fn fetch_contract_info_request(asset_platform: &str, contract_address: &str) -> Result<RequestOptions> {
    let platform = require_segment("asset_platform", asset_platform)?;
    let address = require_segment("contract_address", contract_address)?;
    Ok(RequestOptions::get(&format!("/coins/{}/contract/{}", platform, address)))
  }

  /// Get coin info by token contract address
  ///
  /// # Arguments
  ///
  /// * `asset_platform` - Platform id (e.g., "ethereum")
  /// * `contract_address` - Token contract address
  #[instrument(skip(self))]
  pub async fn fetch_contract_info(&self, asset_platform: &str, contract_address: &str) -> Result<Envelope> {
    let options = Self::fetch_contract_info_request(asset_platform, contract_address)?;
    self.send(options).await
  }

  /// Build the request for `/coins/{platform}/contract/{address}/market_chart`
  pub fn fetch_contract_market_chart_request(
    asset_platform: &str,
    contract_address: &str,
    params: &MarketChartParams,
  ) -> Result<RequestOptions> {
    let platform = require_segment("asset_platform", asset_platform)?;
    let address = require_segment("contract_address", contract_address)?;
    Ok(RequestOptions::get_with(
      &format!("/coins/{}/contract/{}/market_chart", platform, address),
      &params.to_query(),
    ))
  }

  /// Get historical market data for a token contract
  #[instrument(skip(self, params))]
  pub async fn fetch_contract_market_chart(
    &self,
    asset_platform: &str,
    contract_address: &str,
    params: &MarketChartParams,
  ) -> Result<Envelope> {
    let options = Self::fetch_contract_market_chart_request(asset_platform, contract_address, params)?;
    self.send(options).await
  }
}

impl_endpoint_base!(CoinsEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use cg_core::Error;

  #[test]
  fn test_markets_defaults_vs_currency() {
    let opts = CoinsEndpoints::markets_request(&MarketsParams::default()).unwrap();
    assert_eq!(opts.path, "/api/v3/coins/markets?vs_currency=usd");
  }

  #[test]
  fn test_markets_blank_currency_falls_back() {
    let params = MarketsParams { vs_currency: Some(String::new()), ..Default::default() };
    let opts = CoinsEndpoints::markets_request(&params).unwrap();
    assert_eq!(opts.query(), Some("vs_currency=usd"));
  }

  #[test]
  fn test_markets_joins_and_encodes_ids() {
    let params = MarketsParams {
      vs_currency: Some("eur".to_string()),
      ids: Some(vec!["bitcoin", "ethereum"].into()),
      order: Some(Order::MarketCapDesc),
      per_page: Some(50),
      ..Default::default()
    };
    let opts = CoinsEndpoints::markets_request(&params).unwrap();
    assert_eq!(
      opts.query(),
      Some("vs_currency=eur&ids=bitcoin%2Cethereum&order=market_cap_desc&per_page=50")
    );
  }

  #[test]
  fn test_fetch_rejects_empty_coin_id() {
    let err = CoinsEndpoints::fetch_request("", &CoinParams::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
    assert!(err.is_validation());
  }

  #[test]
  fn test_fetch_builds_detail_path() {
    let params = CoinParams { tickers: Some(false), market_data: Some(true), ..Default::default() };
    let opts = CoinsEndpoints::fetch_request("bitcoin", &params).unwrap();
    assert_eq!(opts.path, "/api/v3/coins/bitcoin?tickers=false&market_data=true");
  }

  #[test]
  fn test_history_requires_date() {
    let err = CoinsEndpoints::fetch_history_request("bitcoin", &HistoryParams::default()).unwrap_err();
    assert!(matches!(err, Error::MissingParameter(_)));

    let blank = HistoryParams { date: Some("  ".to_string()), ..Default::default() };
    let err = CoinsEndpoints::fetch_history_request("bitcoin", &blank).unwrap_err();
    assert!(matches!(err, Error::MissingParameter(_)));
  }

  #[test]
  fn test_history_with_date() {
    let day = NaiveDate::from_ymd_opt(2017, 12, 30).unwrap();
    let opts = CoinsEndpoints::fetch_history_request("bitcoin", &HistoryParams::on(day)).unwrap();
    assert_eq!(opts.path, "/api/v3/coins/bitcoin/history?date=30-12-2017");
  }

  #[test]
  fn test_market_chart_defaults() {
    let opts = CoinsEndpoints::fetch_market_chart_request("ethereum", &MarketChartParams::default()).unwrap();
    assert_eq!(opts.path, "/api/v3/coins/ethereum/market_chart?vs_currency=usd&days=1");
  }

  #[test]
  fn test_market_chart_max_days() {
    let params = MarketChartParams { days: Some(Days::Max), interval: Some("daily".into()), ..Default::default() };
    let opts = CoinsEndpoints::fetch_market_chart_request("ethereum", &params).unwrap();
    assert_eq!(opts.query(), Some("vs_currency=usd&days=max&interval=daily"));
  }

  #[test]
  fn test_market_chart_range_requires_bounds() {
    let params = MarketChartRangeParams { from: Some(1_392_577_232), ..Default::default() };
    let err = CoinsEndpoints::fetch_market_chart_range_request("bitcoin", &params).unwrap_err();
    assert!(matches!(err, Error::MissingParameter(ref m) if m.contains("to")));
  }

  #[test]
  fn test_market_chart_range_between() {
    use chrono::Utc;
    let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let to = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let opts = CoinsEndpoints::fetch_market_chart_range_request(
      "bitcoin",
      &MarketChartRangeParams::between(from, to),
    )
    .unwrap();
    assert_eq!(
      opts.path,
      "/api/v3/coins/bitcoin/market_chart/range?vs_currency=usd&from=1704067200&to=1704153600"
    );
  }

  #[test]
  fn test_status_updates_paging() {
    let params = StatusUpdatesParams { per_page: Some(10), page: Some(2) };
    let opts = CoinsEndpoints::fetch_status_updates_request("litecoin", &params).unwrap();
    assert_eq!(opts.path, "/api/v3/coins/litecoin/status_updates?per_page=10&page=2");
  }

  #[test]
  fn test_contract_endpoints() {
    let address = "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984";
    let opts = CoinsEndpoints::fetch_contract_info_request("ethereum", address).unwrap();
    assert_eq!(opts.path, format!("/api/v3/coins/ethereum/contract/{}", address));

    let opts =
      CoinsEndpoints::fetch_contract_market_chart_request("ethereum", address, &MarketChartParams::default())
        .unwrap();
    assert_eq!(
      opts.path,
      format!("/api/v3/coins/ethereum/contract/{}/market_chart?vs_currency=usd&days=1", address)
    );

    assert!(CoinsEndpoints::fetch_contract_info_request("", address).is_err());
    assert!(CoinsEndpoints::fetch_contract_info_request("ethereum", " ").is_err());
  }

  #[test]
  fn test_all_and_list() {
    let opts = CoinsEndpoints::all_request(&CoinsAllParams::default()).unwrap();
    assert_eq!(opts.path, "/api/v3/coins");

    let opts =
      CoinsEndpoints::list_request(&CoinsListParams { include_platform: Some(true) }).unwrap();
    assert_eq!(opts.path, "/api/v3/coins/list?include_platform=true");
  }
}
