use std::time::Duration;

use mklookup_client::{
    ClientOptions, GENERATE_PATH, HttpLookupApi, LookupApi, SEARCH_PATH, generate_sap_code, search,
};
use mklookup_testing::{StubResponse, StubServer, fixtures};
use mklookup_types::{Error, SapStatus, SearchQuery};

fn api_for(server: &StubServer) -> HttpLookupApi {
    HttpLookupApi::new(&ClientOptions {
        base_url: server.base_url(),
        timeout: Duration::from_secs(5),
    })
    .expect("client builds")
}

#[test]
fn test_search_posts_query_as_json() {
    let server = StubServer::start().unwrap();
    server.route(SEARCH_PATH, StubResponse::json(200, fixtures::search_found()));
    let api = api_for(&server);

    let response = search(&api, "  18643 ", true).unwrap();
    assert_eq!(response.sap_code(), Some("4000123"));
    assert_eq!(response.status(), SapStatus::Found);

    let requests = server.requests_to(SEARCH_PATH);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({"customer_mk": "18643", "is_corporate": true})
    );
    assert!(
        requests[0]
            .header("content-type")
            .unwrap_or_default()
            .starts_with("application/json")
    );
}

#[test]
fn test_empty_identifier_never_reaches_server() {
    let server = StubServer::start().unwrap();
    server.route(SEARCH_PATH, StubResponse::json(200, fixtures::search_found()));
    let api = api_for(&server);

    let err = search(&api, "   ", false).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(server.requests().is_empty());
}

#[test]
fn test_error_body_with_server_error_status() {
    let server = StubServer::start().unwrap();
    server.route(
        SEARCH_PATH,
        StubResponse::json(500, fixtures::error_body("Failed to retrieve Autoline data")),
    );
    let api = api_for(&server);

    let err = api
        .search(&SearchQuery::new("18643", false).unwrap())
        .unwrap_err();
    assert_eq!(
        err,
        Error::Api("Failed to retrieve Autoline data".to_string())
    );
}

#[test]
fn test_html_error_page_is_parse_error() {
    let server = StubServer::start().unwrap();
    server.route(SEARCH_PATH, StubResponse::text(502, "<h1>Bad Gateway</h1>"));
    let api = api_for(&server);

    let err = search(&api, "18643", false).unwrap_err();
    match err {
        Error::Parse(msg) => assert!(msg.contains("HTTP 502"), "{msg}"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_unreachable_backend_is_network_error() {
    // Bind then drop to get a port nobody listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = HttpLookupApi::new(&ClientOptions {
        base_url: format!("http://127.0.0.1:{}", port),
        timeout: Duration::from_secs(2),
    })
    .unwrap();

    let err = search(&api, "18643", false).unwrap_err();
    assert!(matches!(err, Error::Network(_)), "{err:?}");
}

#[test]
fn test_slow_backend_times_out() {
    let server = StubServer::start().unwrap();
    server.route(
        SEARCH_PATH,
        StubResponse::json(200, fixtures::search_found()).with_delay(Duration::from_millis(1500)),
    );
    let api = HttpLookupApi::new(&ClientOptions {
        base_url: server.base_url(),
        timeout: Duration::from_millis(200),
    })
    .unwrap();

    let err = search(&api, "18643", false).unwrap_err();
    assert!(matches!(err, Error::Network(_)), "{err:?}");
}

#[test]
fn test_generate_posts_identifier_only() {
    let server = StubServer::start().unwrap();
    server.route(GENERATE_PATH, StubResponse::json(200, fixtures::generate_ok()));
    let api = api_for(&server);

    let response = generate_sap_code(&api, " 18643 ").unwrap();
    assert!(response.message.unwrap().contains("Mercedes-Benz"));

    let requests = server.requests_to(GENERATE_PATH);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].json(), serde_json::json!({"customer_mk": "18643"}));
}

#[test]
fn test_generate_error_field() {
    let server = StubServer::start().unwrap();
    server.route(
        GENERATE_PATH,
        StubResponse::json(400, fixtures::error_body("Customer MK is required")),
    );
    let api = api_for(&server);

    let err = generate_sap_code(&api, "18643").unwrap_err();
    assert_eq!(err.to_string(), "Customer MK is required");
}
