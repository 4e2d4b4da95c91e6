use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use cg_core::{
  Envelope, QueryParams, RequestOptions, Result, StatusUpdateCategory, StatusUpdateProjectType,
};
use std::sync::Arc;
use tracing::instrument;

/// Query parameters for the global `/status_updates` feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusUpdateFeedParams {
  pub category: Option<StatusUpdateCategory>,
  pub project_type: Option<StatusUpdateProjectType>,
  pub per_page: Option<u32>,
  pub page: Option<u32>,
}

/// Query parameters for the per-project status update feeds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusUpdatesParams {
  pub per_page: Option<u32>,
  pub page: Option<u32>,
}

impl StatusUpdatesParams {
  pub(crate) fn to_query(&self) -> QueryParams {
    let mut query = QueryParams::new();
    query.push_opt("per_page", self.per_page).push_opt("page", self.page);
    query
  }
}

/// Global status update feed
pub struct StatusUpdatesEndpoints {
  transport: Arc<Transport>,
}

impl StatusUpdatesEndpoints {
  /// Build the request for `/status_updates`
  pub fn all_request(params: &StatusUpdateFeedParams) -> Result<RequestOptions> {
    let mut query = QueryParams::new();
    query
      .push_opt("category", params.category)
      .push_opt("project_type", params.project_type)
      .push_opt("per_page", params.per_page)
      .push_opt("page", params.page);
    Ok(RequestOptions::get_with("/status_updates", &query))
  }

  /// List status updates across all coins and markets
  #[instrument(skip(self))]
  pub async fn all(&self, params: &StatusUpdateFeedParams) -> Result<Envelope> {
    let options = Self::all_request(params)?;
    self.send(options).await
  }
}

impl_endpoint_base!(StatusUpdatesEndpoints);
