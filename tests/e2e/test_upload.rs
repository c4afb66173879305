use crate::e2e::helpers;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use helpers::assertions::assert_upload_response;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_store_uploaded_audio(ctx: &TestContext) {
    let original: Vec<u8> = (0..=255u8).rev().cycle().take(4096).collect();

    let response = ctx
        .client
        .post(
            "/upload",
            &json!({ "audio": STANDARD.encode(&original), "filename": "speech_roundtrip" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_upload_response(
        response.body.as_ref().unwrap(),
        &ctx.config.bucket_name,
        "speech_roundtrip",
    );

    let stored = ctx.storage.object("speech_roundtrip.mp3").unwrap();
    assert_eq!(stored.body, original);
    assert_eq!(stored.content_type, "audio/mpeg");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_build_url_from_bucket_and_filename(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/upload", &json!({ "audio": "SUQz", "filename": "speech_url" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body["file_url"],
        json!("https://test-audio-bucket.s3.amazonaws.com/speech_url.mp3")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_overwrite_existing_object(ctx: &TestContext) {
    for payload in [b"first take".as_slice(), b"second take".as_slice()] {
        ctx.client
            .post(
                "/upload",
                &json!({ "audio": STANDARD.encode(payload), "filename": "speech_again" }),
            )
            .await
            .unwrap()
            .assert_status(StatusCode::OK);
    }

    assert_eq!(ctx.storage.keys(), vec!["speech_again.mp3".to_string()]);
    assert_eq!(
        ctx.storage.object("speech_again.mp3").unwrap().body,
        b"second take".to_vec()
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_500_for_malformed_base64(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/upload", &json!({ "audio": "%%%not-base64%%%", "filename": "speech_bad" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("Encoding error");
    assert!(ctx.storage.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_500_when_storage_fails(ctx: &TestContext) {
    ctx.storage.fail_with("NoSuchBucket: The specified bucket does not exist");

    let response = ctx
        .client
        .post("/upload", &json!({ "audio": "SUQz", "filename": "speech_lost" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("NoSuchBucket");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_missing_fields(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/upload", &json!({ "filename": "speech_no_audio" }))
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("audio");

    let response = ctx
        .client
        .post("/upload", &json!({ "audio": "SUQz" }))
        .await
        .unwrap();
    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("filename");

    assert!(ctx.storage.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_filename(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/upload", &json!({ "audio": "SUQz", "filename": "" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.storage.is_empty());
}
