use crate::e2e::helpers;

use helpers::api_client::FormPart;
use helpers::fixtures::{paper_pdf, pdf_with_lines};
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_extract_text_from_pdf(ctx: &TestContext) {
    let pdf = pdf_with_lines(&["Hello from a generated PDF. ", "Second line of text."]);

    let response = ctx
        .client
        .post_multipart("/upload", &[FormPart::file("file", "hello.pdf", &pdf)])
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let text = response
        .body
        .as_ref()
        .and_then(|b| b.get("text"))
        .and_then(|t| t.as_str())
        .expect("Missing text field");

    assert!(text.contains("Hello from a generated PDF."), "got {:?}", text);
    assert!(text.contains("Second line of text."), "got {:?}", text);
    assert!(!text.contains('\n'));
    assert!(!text.contains("  "));
    assert_eq!(text, text.trim());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_drop_everything_from_references_on(ctx: &TestContext) {
    let pdf = paper_pdf();

    let response = ctx
        .client
        .post_multipart("/upload", &[FormPart::file("file", "paper.pdf", &pdf)])
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let text = response.body.as_ref().unwrap()["text"].as_str().unwrap().to_string();
    assert!(text.contains("Reading aloud made simple."));
    assert!(text.ends_with("continues here."), "got {:?}", text);
    assert!(!text.contains("References"));
    assert!(!text.contains("Somebody"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_upload_without_file_field(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart("/upload", &[FormPart::text("title", "no file here")])
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No file uploaded.");
    assert!(response
        .header("content-type")
        .is_some_and(|ct| ct.starts_with("text/plain")));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_text_field_named_file(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart("/upload", &[FormPart::text("file", "not an upload")])
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No file uploaded.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_file_part_after_text_field_named_file(ctx: &TestContext) {
    let pdf = pdf_with_lines(&["The real upload."]);

    let response = ctx
        .client
        .post_multipart(
            "/upload",
            &[
                FormPart::text("file", "not an upload"),
                FormPart::file("file", "real.pdf", &pdf),
            ],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let text = response.body.as_ref().unwrap()["text"].as_str().unwrap().to_string();
    assert!(text.contains("The real upload."), "got {:?}", text);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_multipart_body(ctx: &TestContext) {
    let response = ctx.client.post_multipart("/upload", &[]).await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No file uploaded.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_non_multipart_request(ctx: &TestContext) {
    let response = ctx
        .client
        .post_raw("/upload", "application/json", br#"{"file":"nope"}"#)
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No file uploaded.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_for_unparseable_pdf(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart(
            "/upload",
            &[FormPart::file("file", "notes.pdf", b"plain text pretending to be a PDF")],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), r#"{"error":"Failed to extract text from PDF"}"#);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_for_empty_file(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart("/upload", &[FormPart::file("file", "empty.pdf", b"")])
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body.as_ref().and_then(|b| b["error"].as_str()),
        Some("Failed to extract text from PDF")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_other_fields(ctx: &TestContext) {
    let pdf = pdf_with_lines(&["Only the file field counts."]);

    let response = ctx
        .client
        .post_multipart(
            "/upload",
            &[
                FormPart::text("comment", "ignored"),
                FormPart::file("file", "doc.pdf", &pdf),
            ],
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let text = response.body.as_ref().unwrap()["text"].as_str().unwrap().to_string();
    assert!(text.contains("Only the file field counts."));
    assert!(!text.contains("ignored"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_oversized_upload(ctx: &TestContext) {
    let oversized = vec![b'x'; ctx.config.max_upload_bytes + 1024];

    let response = ctx
        .client
        .post_multipart("/upload", &[FormPart::file("file", "huge.pdf", &oversized)])
        .await
        .unwrap();

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_concurrent_uploads_independently(ctx: &TestContext) {
    let good = pdf_with_lines(&["Concurrent upload."]);
    let bad = b"broken".to_vec();

    let mut futures = Vec::new();
    for i in 0..8 {
        let client = ctx.client.clone();
        let payload = if i % 2 == 0 { good.clone() } else { bad.clone() };
        futures.push(async move {
            client
                .post_multipart("/upload", &[FormPart::file("file", "doc.pdf", &payload)])
                .await
        });
    }

    let results = futures::future::join_all(futures).await;

    for (i, result) in results.into_iter().enumerate() {
        let response = result.unwrap();
        if i % 2 == 0 {
            response.assert_status(StatusCode::OK);
        } else {
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
