/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the Access client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{mock_client, setup_mock_server, TEST_API_KEY, TEST_MERCHANT_ID, TEST_SESSION};
use kount_access_adapter::{
    AccessClient, AccessError, ClientConfig, InfoDataSet, TrustedState, DEFAULT_API_VERSION,
};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(AccessClient::new(
        "api-sandbox01.kountaccess.com",
        TEST_MERCHANT_ID,
        TEST_API_KEY
    ));
    assert_eq!(client.api_version(), DEFAULT_API_VERSION);
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default();
    let _client = assert_ok!(AccessClient::with_config(
        config,
        "api-sandbox01.kountaccess.com",
        TEST_MERCHANT_ID,
        TEST_API_KEY
    ));
}

#[test]
fn test_client_rejects_invalid_construction() {
    for (host, merchant_id, api_key) in [
        ("", TEST_MERCHANT_ID, TEST_API_KEY),
        ("api.test", 99_999, TEST_API_KEY),
        ("api.test", 1_000_000, TEST_API_KEY),
        ("api.test", TEST_MERCHANT_ID, ""),
        ("api.test", TEST_MERCHANT_ID, "   "),
    ] {
        let err = AccessClient::new(host, merchant_id, api_key).unwrap_err();
        assert!(err.is_invalid_data(), "expected InvalidData for {host:?}/{merchant_id}/{api_key:?}");
    }
}

#[test]
fn test_trusted_state_parsing() {
    assert_eq!("trusted".parse::<TrustedState>().unwrap(), TrustedState::Trusted);
    assert!("blocked".parse::<TrustedState>().unwrap_err().is_invalid_data());
}

#[test]
fn test_info_data_set_builder() {
    let flag = InfoDataSet::new().with_info().with_trusted_device().build();
    assert_eq!(flag, InfoDataSet::INFO | InfoDataSet::TRUSTED);
}

#[tokio::test]
async fn test_device_round_trip() {
    let server = setup_mock_server().await;
    let fingerprint = "75012bd5e5b264c4b324f5c95a769541";

    Mock::given(method("GET"))
        .and(path("/api/device"))
        .and(query_param("v", "0400"))
        .and(query_param("s", TEST_SESSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "device": {
                "id": fingerprint,
                "ipAddress": "64.128.91.251",
                "ipGeo": "US",
                "mobile": 1,
                "proxy": 0,
            },
            "response_id": "bf10cd20cf61286669e87342d029e405",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let doc = assert_ok!(client.get_device(TEST_SESSION, None).await);

    assert_eq!(doc["device"]["id"], fingerprint);
    assert_eq!(doc["device"]["ipAddress"], "64.128.91.251");
    assert_eq!(doc["response_id"], "bf10cd20cf61286669e87342d029e405");
}

#[tokio::test]
async fn test_non_200_yields_network_error_and_no_document() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/device"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.get_device(TEST_SESSION, None).await.unwrap_err();

    match err {
        AccessError::Network { status, message } => {
            assert_eq!(status, Some(404));
            assert!(message.contains("404"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_failures_never_reach_the_server() {
    let server = setup_mock_server().await;
    let client = mock_client(&server);

    assert!(client.get_device("short", None).await.unwrap_err().is_invalid_data());
    assert!(client.get_devices("", None).await.unwrap_err().is_invalid_data());
    assert!(client
        .get_velocity("short", "admin", "password", None)
        .await
        .unwrap_err()
        .is_invalid_data());
    assert!(client
        .get_info(0, TEST_SESSION, None, None, None, None)
        .await
        .unwrap_err()
        .is_invalid_data());
    assert!(client
        .set_behavio_data("h", "e", TEST_SESSION, "not a json", "u", None)
        .await
        .unwrap_err()
        .is_invalid_data());

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_every_request_carries_basic_auth() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/devicetrustbysession"))
        .and(wiremock::matchers::header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    assert_ok!(
        client
            .set_device_trust_by_session(TEST_SESSION, "customer-1234", TrustedState::Trusted, None)
            .await
    );

    let requests = server.received_requests().await.unwrap();
    let auth = requests[0]
        .headers
        .get("authorization")
        .expect("authorization header missing")
        .to_str()
        .unwrap()
        .to_string();
    assert!(auth.starts_with("Basic "));
}
