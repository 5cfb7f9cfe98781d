use std::time::Duration;

use fl_core::ports::{AnalysisError, AnalysisPort};
use fl_core::{AnalysisRequest, ContentLocator, ImageEncoding, ImagePayload};
use fl_infra::HttpAnalysisClient;
use mockito::{Matcher, Server};

fn jpeg_request() -> AnalysisRequest {
    let payload = ImagePayload::new(
        vec![0xFFu8, 0xD8, 0xFF, 0xE0],
        ImageEncoding::Jpeg,
        ContentLocator::new("file:///tmp/meal.jpg"),
    );
    AnalysisRequest::from(&payload)
}

fn client(server: &Server) -> HttpAnalysisClient {
    HttpAnalysisClient::new(format!("{}/api/analyze", server.url()), Duration::from_secs(5))
        .expect("client should build")
}

#[tokio::test]
async fn analyze_posts_inline_image_and_decodes_food_analysis() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/analyze")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "image": { "inlineData": { "data": "/9j/4A==", "mimeType": "image/jpeg" } }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data":{"foodAnalysis":{
                "identifiedFood":"Apple","portionSize":150,"recognizedServingSize":182,
                "nutritionFactsPerPortion":{"calories":78,"protein":0.4},
                "additionalNotes":["Rich in fiber"]}}}"#,
        )
        .create_async()
        .await;

    let result = client(&server)
        .analyze(jpeg_request())
        .await
        .expect("analysis should succeed");

    mock.assert_async().await;
    assert_eq!(result.identified_food, "Apple");
    assert_eq!(result.portion_size, 150.0);
    assert_eq!(result.nutrition_facts_per_portion.calories, 78.0);
    assert_eq!(result.additional_notes, vec!["Rich in fiber"]);
    assert!(result.image.is_none());
}

#[tokio::test]
async fn analyze_maps_non_success_status_with_message_to_service_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/analyze")
        .with_status(422)
        .with_body(r#"{"message":"Image too dark"}"#)
        .create_async()
        .await;

    let error = client(&server).analyze(jpeg_request()).await.unwrap_err();

    assert_eq!(
        error,
        AnalysisError::Service {
            status: 422,
            message: Some("Image too dark".to_string())
        }
    );
}

#[tokio::test]
async fn analyze_maps_non_json_error_body_to_service_error_without_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/analyze")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let error = client(&server).analyze(jpeg_request()).await.unwrap_err();

    assert_eq!(
        error,
        AnalysisError::Service {
            status: 502,
            message: None
        }
    );
}

#[tokio::test]
async fn analyze_maps_success_without_food_analysis_to_not_food() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_body(r#"{"data":{}}"#)
        .create_async()
        .await;

    let error = client(&server).analyze(jpeg_request()).await.unwrap_err();

    assert_eq!(error, AnalysisError::NotFood);
}

#[tokio::test]
async fn analyze_maps_connection_failure_to_transport() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };
    let endpoint = format!("http://127.0.0.1:{port}/api/analyze");

    let client = HttpAnalysisClient::new(endpoint, Duration::from_secs(2)).expect("client");
    let error = client.analyze(jpeg_request()).await.unwrap_err();

    assert!(matches!(error, AnalysisError::Transport(_)), "got {error:?}");
}

#[tokio::test]
async fn analyze_maps_expired_timeout_to_transport() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let endpoint = format!("http://{}/api/analyze", listener.local_addr().expect("addr"));
    let stalled = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.expect("accept");
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let client = HttpAnalysisClient::new(endpoint, Duration::from_millis(300)).expect("client");
    let error = client.analyze(jpeg_request()).await.unwrap_err();
    stalled.abort();

    assert!(
        matches!(error, AnalysisError::Transport(ref detail) if detail.contains("timed out")),
        "got {error:?}"
    );
}

#[tokio::test]
async fn analyze_keeps_result_with_null_nutrients() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/analyze")
        .with_status(200)
        .with_body(
            r#"{"data":{"foodAnalysis":{"identifiedFood":"Apple",
                "nutritionFactsPerPortion":{"calories":78,"cholesterol":null}}}}"#,
        )
        .create_async()
        .await;

    let result = client(&server)
        .analyze(jpeg_request())
        .await
        .expect("null nutrient should not reject the result");

    assert_eq!(result.identified_food, "Apple");
    assert_eq!(result.nutrition_facts_per_portion.cholesterol, 0.0);
}
