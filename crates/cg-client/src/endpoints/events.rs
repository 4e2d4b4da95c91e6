//! Event listings (conferences, meetups and other crypto events)

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use cg_core::{Envelope, EventType, QueryParams, RequestOptions, Result};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::instrument;

/// Query parameters for `/events`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsParams {
  /// Two-letter country code, as returned by `fetch_countries`
  pub country_code: Option<String>,
  /// Sent as `type`
  pub event_type: Option<EventType>,
  pub page: Option<u32>,
  pub upcoming_events_only: Option<bool>,
  pub from_date: Option<NaiveDate>,
  pub to_date: Option<NaiveDate>,
}

/// Event endpoints
pub struct EventsEndpoints {
  transport: Arc<Transport>,
}

impl EventsEndpoints {
  /// Build the request for `/events`
  pub fn all_request(params: &EventsParams) -> Result<RequestOptions> {
    let mut query = QueryParams::new();
    query
      .push_opt("country_code", params.country_code.as_deref().filter(|c| !c.is_empty()))
      .push_opt("type", params.event_type)
      .push_opt("page", params.page)
      .push_opt("upcoming_events_only", params.upcoming_events_only)
      .push_opt("from_date", params.from_date.map(|d| d.format("%Y-%m-%d")))
      .push_opt("to_date", params.to_date.map(|d| d.format("%Y-%m-%d")));
    Ok(RequestOptions::get_with("/events", &query))
  }

  /// List events, optionally filtered by country, type and date window
  #[instrument(skip(self))]
  pub async fn all(&self, params: &EventsParams) -> Result<Envelope> {
    let options = Self::all_request(params)?;
    self.send(options).await
  }

  /// Build the request for `/events/countries`
  pub fn fetch_countries_request() -> Result<RequestOptions> {
    Ok(RequestOptions::get("/events/countries"))
  }

  /// List country codes that have events
  #[instrument(skip(self))]
  pub async fn fetch_countries(&self) -> Result<Envelope> {
    let options = Self::fetch_countries_request()?;
    self.send(options).await
  }

  /// Build the request for `/events/types`
  pub fn fetch_types_request() -> Result<RequestOptions> {
    Ok(RequestOptions::get("/events/types"))
  }

  /// List the event types the feed knows about
  #[instrument(skip(self))]
  pub async fn fetch_types(&self) -> Result<Envelope> {
    let options = Self::fetch_types_request()?;
    self.send(options).await
  }
}

impl_endpoint_base!(EventsEndpoints);
