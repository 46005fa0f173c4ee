//! Mock API tests for the multipart upload helpers, including the exact
//! wire format of the part headers.

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use httpkit::FormField;

#[tokio::test]
async fn test_post_multipart_form_wire_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains(
            "Content-Disposition: form-data; name=\"f1\"; filename=\"a.txt\"; filelength=2",
        ))
        .and(body_string_contains("Content-Type: text/plain"))
        .and(body_string_contains("hi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("done"))
        .mount(&server)
        .await;

    let fields = [FormField::new("f1", "a.txt", "text/plain", b"hi".to_vec())];
    let response = httpkit::post_multipart_form(&fields, &format!("{}/upload", server.uri()))
        .await
        .unwrap();
    assert_eq!(response, b"done");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
}

#[tokio::test]
async fn test_post_multipart_form_preserves_field_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let fields = [
        FormField::new("first", "", "text/plain", b"1".to_vec()),
        FormField::new("second", "", "text/plain", b"2".to_vec()),
        FormField::new("third", "", "text/plain", b"3".to_vec()),
    ];
    httpkit::post_multipart_form(&fields, &format!("{}/upload", server.uri()))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body).to_string();
    let first = body.find("name=\"first\"").unwrap();
    let second = body.find("name=\"second\"").unwrap();
    let third = body.find("name=\"third\"").unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn test_post_file_uploads_single_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains(
            "name=\"media\"; filename=\"cat.png\"; filelength=4",
        ))
        .and(body_string_contains("Content-Type: image/png"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"media_id\":\"m1\"}"))
        .mount(&server)
        .await;

    let response = httpkit::post_file(
        "media",
        "cat.png",
        "image/png",
        &[1u8, 2, 3, 4],
        &format!("{}/upload", server.uri()),
    )
    .await
    .unwrap();
    assert_eq!(response, b"{\"media_id\":\"m1\"}");
}

#[tokio::test]
async fn test_post_multipart_form_non_200_is_an_error() {
    // A bare server answers 404; the helper must report the status instead
    // of silently returning an empty body.
    let server = MockServer::start().await;
    let fields = [FormField::new("f1", "a.txt", "text/plain", b"hi".to_vec())];

    let err = httpkit::post_multipart_form(&fields, &format!("{}/upload", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}
