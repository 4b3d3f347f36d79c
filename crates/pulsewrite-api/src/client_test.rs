use super::*;

fn test_client(base_url: &str) -> BackendClient {
    BackendClient::with_base_url(base_url, Some("test-key"), 30, "pulsewrite-test/0.1")
        .expect("client construction should not fail")
}

#[test]
fn endpoint_appends_segments() {
    let client = test_client("http://localhost:8000");
    let url = client.endpoint(&["api", "campaigns"]);
    assert_eq!(url.as_str(), "http://localhost:8000/api/campaigns");
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let client = test_client("https://example.com/backend/");
    let url = client.endpoint(&["api", "analyze-trends"]);
    assert_eq!(url.as_str(), "https://example.com/backend/api/analyze-trends");
}

#[test]
fn endpoint_encodes_ids() {
    let client = test_client("http://localhost:8000");
    let url = client.endpoint(&["api", "campaigns", "a b/c"]);
    assert_eq!(url.as_str(), "http://localhost:8000/api/campaigns/a%20b%2Fc");
}

#[test]
fn rejects_unparseable_base_url() {
    let result = BackendClient::with_base_url("not a url", None, 30, "ua");
    assert!(matches!(result, Err(ApiError::InvalidBaseUrl { .. })));
}

#[test]
fn set_api_key_enables_header() {
    let mut client = BackendClient::with_base_url("http://localhost:8000", None, 30, "ua")
        .expect("client construction should not fail");
    assert!(!client.has_api_key());
    client.set_api_key("new-key");
    assert!(client.has_api_key());
}
