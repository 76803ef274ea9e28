mod common;

use common::mock_api::{MockApi, MockResponse};
use common::{test_client, test_config};

use inkpost::config::Session;
use inkpost::net::feed::FetchFeedsRequest;
use inkpost::net::image::UploadImageRequest;
use inkpost::net::profile::{FetchProfileRequest, NicknameAvailabilityRequest, SignUpRequest};
use inkpost::net::{ApiClient, NetworkError};

#[tokio::test]
async fn decodes_typed_response_and_sends_bearer_header() {
    let server = MockApi::start().await;
    server
        .enqueue(MockResponse::json(
            r#"{"id":"u1","nickname":"reader","archiveName":"my archive","profileImageUrl":"https://img/1.png","postCount":3}"#,
        ))
        .await;

    let client = test_client(&server.base_url());
    let profile = client.send(&FetchProfileRequest).await.unwrap();

    assert_eq!(profile.nickname, "reader");
    assert_eq!(profile.archive_name, "my archive");
    assert_eq!(profile.post_count, 3);

    let requests = server.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/profile");
    assert_eq!(requests[0].header("authorization"), Some("Bearer test-token"));
}

#[tokio::test]
async fn availability_check_goes_out_as_query_parameter() {
    let server = MockApi::start().await;
    server
        .enqueue(MockResponse::json(r#"{"available":true}"#))
        .await;

    let client = test_client(&server.base_url());
    let dto = client
        .send(&NicknameAvailabilityRequest {
            nickname: "reader".to_string(),
        })
        .await
        .unwrap();
    assert!(dto.available);

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].path, "/profile/nickname/availability");
    assert_eq!(requests[0].query, "nickname=reader");
}

#[tokio::test]
async fn sign_up_posts_a_camel_case_body() {
    let server = MockApi::start().await;
    server
        .enqueue(MockResponse::json(
            r#"{"id":"u1","nickname":"n","archiveName":"a","profileImageUrl":"u"}"#,
        ))
        .await;

    let client = test_client(&server.base_url());
    client
        .send(&SignUpRequest {
            identifier: "u1".to_string(),
            nickname: "n".to_string(),
            archive_name: "a".to_string(),
            profile_image_url: "u".to_string(),
        })
        .await
        .unwrap();

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    let body = requests[0].json_body();
    assert_eq!(body["identifier"], "u1");
    assert_eq!(body["archiveName"], "a");
    assert_eq!(body["profileImageUrl"], "u");
}

#[tokio::test]
async fn server_error_surfaces_status_and_message() {
    let server = MockApi::start().await;
    server
        .enqueue(MockResponse::error(409, "nickname taken"))
        .await;

    let client = test_client(&server.base_url());
    let err = client.send(&FetchProfileRequest).await.unwrap_err();

    match err {
        NetworkError::Server { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "nickname taken");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockApi::start().await;
    server
        .enqueue(MockResponse::json(r#"{"unexpected":"shape"}"#))
        .await;

    let client = test_client(&server.base_url());
    let err = client.send(&FetchFeedsRequest).await.unwrap_err();
    assert!(matches!(err, NetworkError::Decode { .. }));
}

#[tokio::test]
async fn bearer_request_without_token_fails_before_sending() {
    let server = MockApi::start().await;

    let client = ApiClient::new(test_config(&server.base_url()), Session::new()).unwrap();
    let err = client.send(&FetchProfileRequest).await.unwrap_err();
    assert!(matches!(err, NetworkError::MissingAccessToken));

    assert!(server.captured_requests().await.is_empty());
}

#[tokio::test]
async fn image_upload_uses_client_id_and_base64_payload() {
    let server = MockApi::start().await;
    server
        .enqueue(MockResponse::json(
            r#"{"data":{"link":"https://img.example/42.png"}}"#,
        ))
        .await;

    let client = test_client(&server.base_url());
    let uploaded = client
        .send(&UploadImageRequest {
            bytes: vec![1, 2, 3],
        })
        .await
        .unwrap();
    assert_eq!(uploaded.data.link, "https://img.example/42.png");

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].path, "/image");
    assert_eq!(
        requests[0].header("authorization"),
        Some("Client-ID test-client-id")
    );
    let body = requests[0].json_body();
    assert_eq!(body["image"], "AQID");
    assert_eq!(body["type"], "base64");
}
