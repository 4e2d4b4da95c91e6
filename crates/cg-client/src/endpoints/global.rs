use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use cg_core::{Envelope, RequestOptions, Result};
use std::sync::Arc;
use tracing::instrument;

/// Service heartbeat and global aggregates
pub struct GlobalEndpoints {
  transport: Arc<Transport>,
}

impl GlobalEndpoints {
  pub fn ping_request() -> Result<RequestOptions> {
    Ok(RequestOptions::get("/ping"))
  }

  /// Check API server status
  #[instrument(skip(self))]
  pub async fn ping(&self) -> Result<Envelope> {
    let options = Self::ping_request()?;
    self.send(options).await
  }

  pub fn global_request() -> Result<RequestOptions> {
    Ok(RequestOptions::get("/global"))
  }

  /// Global cryptocurrency market data
  #[instrument(skip(self))]
  pub async fn global(&self) -> Result<Envelope> {
    let options = Self::global_request()?;
    self.send(options).await
  }

  pub fn decentralized_finance_request() -> Result<RequestOptions> {
    Ok(RequestOptions::get("/global/decentralized_finance_defi"))
  }

  /// Global DeFi market data
  #[instrument(skip(self))]
  pub async fn decentralized_finance(&self) -> Result<Envelope> {
    let options = Self::decentralized_finance_request()?;
    self.send(options).await
  }
}

impl_endpoint_base!(GlobalEndpoints);
