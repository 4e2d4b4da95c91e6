//! Print the top coins by market cap and the BTC/USD exchange rate.
//!
//! ```text
//! RUST_LOG=cg_client=debug cargo run -p cg-client --example market_snapshot
//! ```

use cg_client::endpoints::coins::MarketsParams;
use cg_client::{CoinGeckoClient, Config, Order};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let client = CoinGeckoClient::new(Config::from_env()?)?;

  let ping = client.ping().await?;
  info!("ping: {} {} {}", ping.code, ping.message, ping.data);

  let params = MarketsParams { order: Some(Order::MarketCapDesc), per_page: Some(10), ..Default::default() };
  let markets = client.coins().markets(&params).await?;
  if !markets.success {
    warn!("markets request failed: {} {}", markets.code, markets.data);
    return Ok(());
  }

  for coin in markets.data.as_array().into_iter().flatten() {
    println!(
      "{:>4}  {:<12} {:>14}",
      coin["market_cap_rank"], coin["symbol"].as_str().unwrap_or("?"), coin["current_price"]
    );
  }

  let rates = client.exchange_rates().all().await?;
  println!("BTC/USD: {}", rates.data["rates"]["usd"]["value"]);

  Ok(())
}
