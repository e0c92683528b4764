use fxdesk_core::conversion::{Conversion, ConversionGateway};
use fxdesk_infrastructure::{AuthenticatedTransport, HttpConversionGateway, ReqwestTransport};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(
    server: &MockServer,
    credential: Option<&str>,
) -> HttpConversionGateway<AuthenticatedTransport<ReqwestTransport>> {
    let transport =
        AuthenticatedTransport::new(ReqwestTransport::new(), credential.map(str::to_string));
    HttpConversionGateway::new(&server.uri(), transport).expect("valid mock server uri")
}

fn usd() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "US Dollar",
        "short_code": "USD",
        "code": "840",
        "precision": 2,
        "subunit": 100,
        "symbol": "$",
        "symbol_first": true,
        "decimal_mark": ".",
        "thousands_separator": ","
    })
}

#[tokio::test]
async fn test_list_currencies_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"code": 200, "disclaimer": "Usage subject to terms"},
            "response": [usd()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let currencies = gateway(&server, None).list_currencies().await.unwrap();

    assert_eq!(currencies.len(), 1);
    assert_eq!(currencies[0].short_code, "USD");
    assert_eq!(currencies[0].name, "US Dollar");
}

#[tokio::test]
async fn test_list_currencies_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meta": {}, "response": []})))
        .mount(&server)
        .await;

    let currencies = gateway(&server, None).list_currencies().await.unwrap();
    assert!(currencies.is_empty());
}

#[tokio::test]
async fn test_convert_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/convert"))
        .and(query_param("from", "USD"))
        .and(query_param("to", "EUR"))
        .and(query_param("amount", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {},
            "response": {
                "timestamp": 1642780800,
                "date": "2022-01-21",
                "from": "USD",
                "to": "EUR",
                "amount": 100,
                "value": 85.50
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let conversion = gateway(&server, None)
        .convert("USD", "EUR", 100.0)
        .await
        .unwrap();

    assert_eq!(
        conversion,
        Conversion {
            timestamp: 1642780800,
            date: "2022-01-21".to_string(),
            from: "USD".to_string(),
            to: "EUR".to_string(),
            amount: 100.0,
            value: 85.5,
        }
    );
}

#[tokio::test]
async fn test_convert_http_error_propagates_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/convert"))
        .respond_with(ResponseTemplate::new(422).set_body_string("unknown currency XXX"))
        .mount(&server)
        .await;

    let err = gateway(&server, None)
        .convert("XXX", "EUR", 1.0)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(err, fxdesk_core::FxError::http(422, "unknown currency XXX"));
}

#[tokio::test]
async fn test_currencies_server_error_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/currencies"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = gateway(&server, None).list_currencies().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_authorization_header_sent_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/currencies"))
        .and(header("Authorization", "Bearer X"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meta": {}, "response": []})))
        .expect(1)
        .mount(&server)
        .await;

    gateway(&server, Some("Bearer X"))
        .list_currencies()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_authorization_header_omitted_when_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meta": {}, "response": []})))
        .mount(&server)
        .await;

    gateway(&server, Some("")).list_currencies().await.unwrap();
    gateway(&server, None).list_currencies().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert!(!request.headers.contains_key("authorization"));
    }
}

#[tokio::test]
async fn test_unauthorized_is_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/currencies"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let transport = AuthenticatedTransport::new(ReqwestTransport::new(), Some("Bearer stale".into()));
    let classifier = std::sync::Arc::clone(transport.classifier());
    let gateway = HttpConversionGateway::new(&server.uri(), transport).unwrap();

    let err = gateway.list_currencies().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(classifier.unauthorized_count(), 1);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 1 on a test machine.
    let uri = "http://127.0.0.1:1";
    let transport = AuthenticatedTransport::new(ReqwestTransport::new(), None);
    let gateway = HttpConversionGateway::new(uri, transport).unwrap();

    let err = gateway.list_currencies().await.unwrap_err();
    assert!(err.is_transport());
}
