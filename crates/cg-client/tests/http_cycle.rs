use cg_client::endpoints::coins::{CoinParams, CoinTickersParams, HistoryParams, MarketsParams};
use cg_client::endpoints::status_updates::StatusUpdateFeedParams;
use cg_client::{CoinGeckoClient, Config, Error, StatusUpdateCategory};
use serde_json::json;
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> CoinGeckoClient {
  let config = Config::with_base_url(&server.uri()).expect("mock server uri is a valid base url");
  CoinGeckoClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn test_success_resolves_to_envelope() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v3/ping"))
    .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":1}"#))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let envelope = client.ping().await.unwrap();

  assert!(envelope.success);
  assert_eq!(envelope.code, 200);
  assert_eq!(envelope.message, "OK");
  assert_eq!(envelope.data, json!({"a": 1}));
}

#[tokio::test]
async fn test_not_found_resolves_with_failure_flag() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v3/coins/not-a-coin"))
    .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "coin not found"})))
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let envelope = client.coins().fetch("not-a-coin", &CoinParams::default()).await.unwrap();

  assert!(!envelope.success);
  assert_eq!(envelope.code, 404);
  assert_eq!(envelope.message, "Not Found");
  assert_eq!(envelope.data["error"], "coin not found");
}

#[tokio::test]
async fn test_html_gateway_page_is_invalid_request() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v3/global"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_string("<!DOCTYPE html><html><body><h1>Error 1020</h1></body></html>"),
    )
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let err = client.global().await.unwrap_err();

  assert!(matches!(err, Error::InvalidRequest(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
  let server = MockServer::start().await;
  Mock::given(any())
    .respond_with(ResponseTemplate::new(200).set_body_string("gecko says hi"))
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let err = client.exchange_rates().all().await.unwrap_err();

  assert!(matches!(err, Error::Parse(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_markets_sends_default_currency_and_joined_ids() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v3/coins/markets"))
    .and(query_param("vs_currency", "usd"))
    .and(query_param("ids", "bitcoin,ethereum"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "bitcoin"}, {"id": "ethereum"}])))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let params = MarketsParams { ids: Some(vec!["bitcoin", "ethereum"].into()), ..Default::default() };
  let envelope = client.coins().markets(&params).await.unwrap();

  assert!(envelope.success);
  assert_eq!(envelope.data.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_validation_errors_never_reach_the_network() {
  let server = MockServer::start().await;
  Mock::given(any()).respond_with(ResponseTemplate::new(200).set_body_json(json!({}))).expect(0).mount(&server).await;

  let client = client_for(&server).await;

  let err = client.coins().fetch("", &CoinParams::default()).await.unwrap_err();
  assert!(matches!(err, Error::InvalidParameter(_)));

  let err = client.coins().fetch_history("bitcoin", &HistoryParams::default()).await.unwrap_err();
  assert!(matches!(err, Error::MissingParameter(_)));

  let err = client.exchanges().fetch("   ").await.unwrap_err();
  assert!(err.is_validation());
}

#[tokio::test]
async fn test_status_update_feed_filters() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v3/status_updates"))
    .and(query_param("category", "milestone"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status_updates": []})))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let params = StatusUpdateFeedParams { category: Some(StatusUpdateCategory::Milestone), ..Default::default() };
  let envelope = client.status_updates().all(&params).await.unwrap();

  assert!(envelope.success);
  assert_eq!(envelope.data["status_updates"], json!([]));
}

#[tokio::test]
async fn test_server_error_with_json_body_is_returned() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/v3/events/types"))
    .respond_with(ResponseTemplate::new(503).set_body_json(json!({"status": {"error_code": 503}})))
    .mount(&server)
    .await;

  let client = client_for(&server).await;
  let envelope = client.events().fetch_types().await.unwrap();

  assert!(!envelope.success);
  assert_eq!(envelope.code, 503);
  assert_eq!(envelope.message, "Service Unavailable");
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
  // Nothing listens on port 1.
  let config = Config::with_base_url("http://127.0.0.1:1").unwrap();
  let client = CoinGeckoClient::new(config).unwrap();

  let err = client.ping().await.unwrap_err();

  assert!(matches!(err, Error::Http(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_dot_segment_ids_never_reach_the_network() {
  let server = MockServer::start().await;
  Mock::given(any()).respond_with(ResponseTemplate::new(200).set_body_json(json!({}))).expect(0).mount(&server).await;

  let client = client_for(&server).await;

  let err = client.coins().fetch_tickers("..", &CoinTickersParams::default()).await.unwrap_err();
  assert!(matches!(err, Error::InvalidParameter(_)));

  let err = client.coins().fetch("%2e%2e", &CoinParams::default()).await.unwrap_err();
  assert!(matches!(err, Error::InvalidParameter(_)));

  let err = client.exchanges().fetch(".").await.unwrap_err();
  assert!(matches!(err, Error::InvalidParameter(_)));
}

#[tokio::test]
async fn test_base_url_with_path_is_rejected_up_front() {
  let server = MockServer::start().await;
  Mock::given(any()).respond_with(ResponseTemplate::new(418)).expect(0).mount(&server).await;

  let err = Config::with_base_url(&format!("{}/proxy", server.uri())).unwrap_err();
  assert!(matches!(err, Error::Config(_)));

  let config = Config { base_url: format!("{}/proxy", server.uri()), ..Config::default() };
  assert!(matches!(CoinGeckoClient::new(config), Err(Error::Config(_))));
}
