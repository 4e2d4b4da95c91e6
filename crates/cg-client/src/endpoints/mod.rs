pub mod coins;
pub mod events;
pub mod exchange_rates;
pub mod exchanges;
pub mod global;
pub mod onchain;
pub mod simple;
pub mod status_updates;

use crate::transport::Transport;
use cg_core::{Envelope, RequestOptions, Result};
use std::future::Future;
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;

  /// Hand validated request options to the transport
  fn send(&self, options: RequestOptions) -> impl Future<Output = Result<Envelope>> + Send {
    let transport = Arc::clone(self.transport());
    async move { transport.get(&options).await }
  }
}

/// Macro to implement the EndpointBase trait and constructor for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl $struct_name {
      /// Create a new endpoint namespace over a shared transport
      pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
      }
    }

    impl EndpointBase for $struct_name {
      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

#[cfg(test)]
mod tests {
  use super::*;
  use cg_core::Config;

  #[test]
  fn test_endpoint_shares_transport() {
    let transport = Arc::new(Transport::new(&Config::default()).unwrap());

    let coins = coins::CoinsEndpoints::new(Arc::clone(&transport));
    let events = events::EventsEndpoints::new(Arc::clone(&transport));

    assert!(Arc::ptr_eq(coins.transport(), events.transport()));
    assert_eq!(coins.transport().base_url(), "https://api.coingecko.com/");
  }
}
