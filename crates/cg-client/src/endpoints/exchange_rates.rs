use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use cg_core::{Envelope, RequestOptions, Result};
use std::sync::Arc;
use tracing::instrument;

/// BTC-to-currency exchange rates
pub struct ExchangeRatesEndpoints {
  transport: Arc<Transport>,
}

impl ExchangeRatesEndpoints {
  /// Build the request for `/exchange_rates`
  pub fn all_request() -> Result<RequestOptions> {
    Ok(RequestOptions::get("/exchange_rates"))
  }

  /// Snapshot of BTC exchange rates against fiat and crypto currencies
  #[instrument(skip(self))]
  pub async fn all(&self) -> Result<Envelope> {
    let options = Self::all_request()?;
    self.send(options).await
  }
}

impl_endpoint_base!(ExchangeRatesEndpoints);
