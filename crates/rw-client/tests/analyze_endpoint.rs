use rw_client::{AnalysisClient, AnalysisSession, Error, Outcome, Recommendation, RhymeWatchClient};
use rw_core::{Config, TimeRange};
use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn analysis_body() -> serde_json::Value {
  json!({
    "symbol": "AAPL",
    "days_analyzed": 180,
    "news": [
      {"headline": "Apple beats estimates", "date": "2025-01-05T14:30:00", "sentiment": "positive"},
      {"headline": "Analysts stay cautious", "date": "2025-01-04T09:00:00", "sentiment": "neutral"}
    ],
    "sentimentCounts": {"positive": 5, "neutral": 3, "negative": 2},
    "priceHistory": [100.0, 98.0, 105.0],
    "volumeHistory": [1000, 1100, 1200],
    "nextDayUp": 1,
    "total_headlines": 10
  })
}

fn client_for(server: &MockServer) -> RhymeWatchClient {
  RhymeWatchClient::new(Config::with_base_url(server.uri())).expect("client")
}

#[tokio::test]
async fn test_fetch_sends_symbol_and_days() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/analyze"))
    .and(query_param("symbol", "AAPL"))
    .and(query_param("days", "180"))
    .respond_with(ResponseTemplate::new(200).set_body_json(analysis_body()))
    .expect(1)
    .mount(&server)
    .await;

  let raw = client_for(&server).fetch_analysis(" aapl", 180).await.unwrap();

  assert_eq!(raw.symbol, "AAPL");
  assert_eq!(raw.total_headlines, 10);
  assert_eq!(raw.next_day_up, Some(true));
}

#[tokio::test]
async fn test_view_derives_recommendation_and_prediction() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/analyze"))
    .and(query_param("days", "365"))
    .respond_with(ResponseTemplate::new(200).set_body_json(analysis_body()))
    .mount(&server)
    .await;

  let view = client_for(&server).analysis().view("AAPL", TimeRange::OneYear).await.unwrap();

  assert_eq!(view.recommendation, Some(Recommendation::Buy));
  assert_eq!(view.current_price, 105.0);
  assert!((view.predicted_price.unwrap() - 107.1).abs() < 1e-9);
  assert_eq!(view.confidence, 0.75);
  assert_eq!(view.news[1].summary, "Analysts stay cautious...");
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/analyze"))
    .respond_with(
      ResponseTemplate::new(404)
        .set_body_json(json!({"detail": "No news found for ZZZZ. Try a different stock symbol."})),
    )
    .expect(1)
    .mount(&server)
    .await;

  let err = client_for(&server).fetch_analysis("ZZZZ", 30).await.unwrap_err();

  assert_eq!(err.to_string(), "HTTP 404: Not Found");
  match err {
    Error::Http { status, detail, .. } => {
      assert_eq!(status, 404);
      assert_eq!(detail.as_deref(), Some("No news found for ZZZZ. Try a different stock symbol."));
    }
    other => panic!("Expected Http error, got {other:?}"),
  }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/analyze"))
    .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
    .expect(1)
    .mount(&server)
    .await;

  let err = client_for(&server).fetch_analysis("AAPL", 30).await.unwrap_err();

  assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
  assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/analyze"))
    .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
    .mount(&server)
    .await;

  let err = client_for(&server).fetch_analysis("AAPL", 30).await.unwrap_err();

  assert!(matches!(err, Error::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
  // reserve a free port, then release it so nothing is listening there
  let listener = TcpListener::bind("127.0.0.1:0").unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);

  let client = RhymeWatchClient::new(Config::with_base_url(format!("http://{addr}"))).unwrap();
  let err = client.fetch_analysis("AAPL", 30).await.unwrap_err();

  assert!(matches!(err, Error::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn test_health_and_info() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/health"))
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({"status": "healthy", "service": "RhymeWatch API"})),
    )
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(json!({"message": "RhymeWatch API is running!", "version": "1.0.0"})),
    )
    .mount(&server)
    .await;

  let client = client_for(&server);
  assert!(client.service().health().await.unwrap().is_healthy());
  assert_eq!(client.service().info().await.unwrap().version, "1.0.0");
}

#[tokio::test]
async fn test_session_against_service() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/analyze"))
    .and(query_param("days", "180"))
    .respond_with(ResponseTemplate::new(200).set_body_json(analysis_body()))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/analyze"))
    .and(query_param("days", "1825"))
    .respond_with(ResponseTemplate::new(503))
    .mount(&server)
    .await;

  let session = AnalysisSession::new(client_for(&server), TimeRange::SixMonths);
  assert_eq!(session.analyze_symbol("aapl").await, Outcome::Applied);
  assert!(session.snapshot().await.view.is_some());

  let outcome = session.select_range(TimeRange::FiveYears).await;
  assert_eq!(outcome, Outcome::Failed("HTTP 503: Service Unavailable".to_string()));

  let snapshot = session.snapshot().await;
  assert!(snapshot.view.is_none());
  assert_eq!(snapshot.error.as_deref(), Some("HTTP 503: Service Unavailable"));
}
