//! HttpTransport against a mock service

use crate::mock_server::{success_body, MockServerFixture, COORDINATES_PATH, IMAGE_PATH};
use bytes::Bytes;
use flood_risk_client::transport::{HttpTransport, InferenceTransport};
use flood_risk_client::types::{AnalysisRequest, CoordinateRequest, ImageRequest};
use flood_risk_client::{AnalysisError, ServiceConfig};
use mockito::Matcher;

fn coords() -> AnalysisRequest {
    AnalysisRequest::Coordinates(CoordinateRequest {
        latitude: 29.76,
        longitude: -95.37,
    })
}

fn png(file_name: &str) -> AnalysisRequest {
    let bytes = Bytes::from_static(b"not-really-a-png");
    AnalysisRequest::Image(ImageRequest {
        size_bytes: bytes.len() as u64,
        bytes,
        mime_type: "image/png".to_string(),
        file_name: file_name.to_string(),
    })
}

#[tokio::test]
async fn test_coordinates_posted_as_json() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", COORDINATES_PATH)
        .match_header("content-type", "application/json")
        .match_header(
            "x-request-id",
            Matcher::Regex("^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-".to_string()),
        )
        .match_body(Matcher::Json(
            serde_json::json!({"latitude": 29.76, "longitude": -95.37}),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body("Medium"))
        .expect(1)
        .create_async()
        .await;

    let raw = fixture
        .transport()
        .submit(COORDINATES_PATH, &coords())
        .await
        .expect("submit");

    mock.assert_async().await;
    assert_eq!(raw.status, 200);
    assert_eq!(raw.body["risk_level"], "Medium");
}

#[tokio::test]
async fn test_image_posted_as_multipart_file_field() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_image_upload("levee.png", &success_body("High"))
        .await;

    let raw = fixture
        .transport()
        .submit(IMAGE_PATH, &png("levee.png"))
        .await
        .expect("submit");

    mock.assert_async().await;
    assert_eq!(raw.body["risk_level"], "High");
}

#[tokio::test]
async fn test_image_file_name_with_pattern_characters_matches_literally() {
    let mut fixture = MockServerFixture::new().await;
    let name = "levee(1)+[north].png";
    let mock = fixture.mock_image_upload(name, &success_body("Low")).await;

    let raw = fixture
        .transport()
        .submit(IMAGE_PATH, &png(name))
        .await
        .expect("submit");

    mock.assert_async().await;
    assert_eq!(raw.body["risk_level"], "Low");
}

#[tokio::test]
async fn test_non_success_status_is_service_error() {
    for status in [400usize, 404, 500, 503] {
        let mut fixture = MockServerFixture::new().await;
        let _mock = fixture
            .mock_json_response(IMAGE_PATH, status, r#"{"detail":"boom"}"#)
            .await;

        let err = fixture
            .transport()
            .submit(IMAGE_PATH, &png("a.png"))
            .await
            .unwrap_err();
        assert_eq!(err, AnalysisError::service(status as u16));
    }
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on port 1.
    let config = ServiceConfig::default()
        .with_base_url("http://127.0.0.1:1")
        .unwrap();
    let transport = HttpTransport::new(config).unwrap();

    let err = transport
        .submit(COORDINATES_PATH, &coords())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "network");
}

#[tokio::test]
async fn test_non_json_success_is_unexpected() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", COORDINATES_PATH)
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = fixture
        .transport()
        .submit(COORDINATES_PATH, &coords())
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::Unexpected { .. }), "{:?}", err);
}

#[tokio::test]
async fn test_exactly_one_call_per_submit() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", COORDINATES_PATH)
        .with_status(502)
        .expect(1)
        .create_async()
        .await;

    let err = fixture
        .transport()
        .submit(COORDINATES_PATH, &coords())
        .await
        .unwrap_err();

    assert_eq!(err, AnalysisError::service(502));
    mock.assert_async().await;
}
