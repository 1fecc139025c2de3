//! Integration tests for the HTTP client.
//!
//! These run the real `TmdbClient` against a tiny HTTP server bound to a
//! random local port, so request building, auth headers and error mapping
//! are exercised end to end without touching the network.

use catalog::{
    CatalogError, ClientConfig, DiscoverParams, MonetizationType, SortBy, TimeWindow, TmdbClient,
};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ============================================================================
// Mock Catalog Server
// ============================================================================

/// Raw request heads (request line + headers) seen by the mock server
type RequestLog = Arc<Mutex<Vec<String>>>;

/// Start a mock catalog on a random port.
///
/// `route` maps the request target (path + query) to a status and JSON body.
async fn start_mock_catalog<F>(route: F) -> (String, RequestLog, tokio::task::JoinHandle<()>)
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock catalog");
    let addr = listener.local_addr().expect("Failed to get local address");

    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let route = Arc::new(route);

    let handle = tokio::spawn({
        let log = log.clone();
        async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };

                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }

                let head = String::from_utf8_lossy(&buf).to_string();
                let target = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                log.lock().unwrap().push(head);

                let (status, body) = route(&target);
                let response = format!(
                    "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        }
    });

    (format!("http://{}/3", addr), log, handle)
}

fn client_for(base_url: &str) -> TmdbClient {
    TmdbClient::new(ClientConfig::new("test-token").with_base_url(base_url))
        .expect("Failed to build client")
}

fn page_json(ids: &[u32]) -> String {
    let results = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{"id": {id}, "title": "Movie {id}", "release_date": "1994-06-0{}", "popularity": {id}.0}}"#,
                id % 9 + 1
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(
        r#"{{"page": 1, "results": [{results}], "total_pages": 1, "total_results": {}}}"#,
        ids.len()
    )
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_search_sends_bearer_token_and_query() {
    let (base_url, log, handle) = start_mock_catalog(|_| (200, page_json(&[11, 12]))).await;
    let client = client_for(&base_url);

    let response = client.search_movies("heat", 2).await.expect("search failed");

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].id, 11);

    let requests = log.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let head = requests[0].to_lowercase();
    assert!(head.starts_with("get /3/search/movie?"), "unexpected request: {head}");
    assert!(head.contains("query=heat"));
    assert!(head.contains("page=2"));
    assert!(head.contains("include_adult=false"));
    assert!(head.contains("authorization: bearer test-token"));
    assert!(head.contains("content-type: application/json"));

    handle.abort();
}

#[tokio::test]
async fn test_discover_encodes_filters() {
    let (base_url, log, handle) = start_mock_catalog(|_| (200, page_json(&[1]))).await;
    let client = client_for(&base_url);

    let params = DiscoverParams::new()
        .sort_by(SortBy::PopularityAsc)
        .page(4)
        .release_date_range("1990-01-01", "1999-12-31")
        .watch_providers(&[8, 337], "US", &[MonetizationType::Flatrate]);

    client.discover_movies(&params).await.expect("discover failed");

    let head = log.lock().unwrap()[0].clone();
    let request_line = head.lines().next().unwrap();
    assert!(request_line.contains("/3/discover/movie?"));
    assert!(request_line.contains("sort_by=popularity.asc"));
    assert!(request_line.contains("page=4"));
    assert!(request_line.contains("primary_release_date.gte=1990-01-01"));
    assert!(request_line.contains("primary_release_date.lte=1999-12-31"));
    assert!(request_line.contains("with_watch_providers=8%2C337"));
    assert!(request_line.contains("watch_region=US"));
    assert!(request_line.contains("with_watch_monetization_types=flatrate"));

    handle.abort();
}

#[tokio::test]
async fn test_endpoint_paths() {
    let (base_url, log, handle) = start_mock_catalog(|target| {
        if target.starts_with("/3/genre/movie/list") {
            (200, r#"{"genres": [{"id": 28, "name": "Action"}]}"#.to_string())
        } else if target.starts_with("/3/movie/603/watch/providers") {
            (
                200,
                r#"{"id": 603, "results": {"US": {"flatrate": [{"provider_id": 384, "provider_name": "HBO Max"}]}}}"#
                    .to_string(),
            )
        } else if target.starts_with("/3/movie/603") {
            (200, r#"{"id": 603, "title": "The Matrix", "release_date": "1999-03-30"}"#.to_string())
        } else if target.starts_with("/3/watch/providers/movie") {
            (200, r#"{"results": [{"provider_id": 8, "provider_name": "Netflix"}]}"#.to_string())
        } else {
            (200, page_json(&[5]))
        }
    })
    .await;
    let client = client_for(&base_url);

    let genres = client.genres().await.unwrap();
    assert_eq!(genres.genres[0].name, "Action");

    let providers = client.movie_watch_providers(603).await.unwrap();
    assert_eq!(providers.flatrate_for("US")[0].provider_id, 384);

    let movie = client.movie_details(603).await.unwrap();
    assert_eq!(movie.release_year(), Some(1999));

    let all = client.all_watch_providers("US").await.unwrap();
    assert_eq!(all.results.len(), 1);

    client.popular_movies(3).await.unwrap();
    client.trending_movies(TimeWindow::Day).await.unwrap();

    let targets: Vec<String> = log
        .lock()
        .unwrap()
        .iter()
        .map(|head| head.lines().next().unwrap_or_default().to_string())
        .collect();
    assert!(targets.iter().any(|t| t.contains("/3/watch/providers/movie?watch_region=US")));
    assert!(targets.iter().any(|t| t.contains("/3/movie/popular?page=3")));
    assert!(targets.iter().any(|t| t.contains("/3/trending/movie/day")));

    handle.abort();
}

#[tokio::test]
async fn test_error_status_is_mapped() {
    let (base_url, _log, handle) = start_mock_catalog(|_| {
        (
            401,
            r#"{"status_code": 7, "status_message": "Invalid API key"}"#.to_string(),
        )
    })
    .await;
    let client = client_for(&base_url);

    let err = client.genres().await.expect_err("401 should be an error");
    match err {
        CatalogError::Status { status, body, .. } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("expected status error, got {other:?}"),
    }

    handle.abort();
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (base_url, _log, handle) =
        start_mock_catalog(|_| (200, r#"{"results": "not a list"}"#.to_string())).await;
    let client = client_for(&base_url);

    let err = client.search_movies("x", 1).await.expect_err("bad JSON should fail");
    assert!(matches!(err, CatalogError::Decode { .. }));

    handle.abort();
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}/3", addr));
    let err = client.genres().await.expect_err("nothing is listening");
    assert!(matches!(err, CatalogError::Transport { .. }));
    assert_eq!(err.status(), None);
}
