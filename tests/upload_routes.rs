//! HTTP surface: form, upload, report download, health

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;

use common::{pdf_with_annotations, FixtureAnnot, TEXT_RECT};
use highlight_report_server::config::Config;
use highlight_report_server::oracle::TextOracle;
use highlight_report_server::routes::{self, upload::REPORT_ID_HEADER};
use highlight_report_server::state::AppState;

const BOUNDARY: &str = "----highlight-report-boundary";

async fn app(dir: &TempDir) -> Router {
    let mut config = Config::default();
    config.storage.upload_dir = dir.path().join("uploads");
    let state = AppState::with_oracle(config, TextOracle::disabled())
        .await
        .unwrap();
    routes::router(state)
}

/// One multipart part: (field name, optional filename, bytes)
fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match file_name {
            Some(file_name) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/pdf\r\n\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
            }
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_index_serves_upload_form() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir)
        .await
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("action=\"/upload\""));
    assert!(html.contains("name=\"file\""));
}

#[tokio::test]
async fn test_upload_without_file_redirects() {
    let dir = TempDir::new().unwrap();
    let body = multipart_body(&[("comment", None, &b"hello"[..])]);
    let response = app(&dir).await.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_upload_with_empty_filename_redirects() {
    let dir = TempDir::new().unwrap();
    let body = multipart_body(&[("file", Some(""), &b""[..])]);
    let response = app(&dir).await.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_corrupt_pdf_is_unprocessable() {
    let dir = TempDir::new().unwrap();
    let body = multipart_body(&[("file", Some("broken.pdf"), &b"%PDF-1.7\nthis is not really a pdf"[..])]);
    let response = app(&dir).await.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_string(response).await;
    assert!(html.contains("Unreadable PDF"));
    assert!(html.contains("href=\"/\""));
}

#[tokio::test]
async fn test_valid_pdf_returns_report_download() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir).await;
    let pdf = pdf_with_annotations(
        "The quick brown fox",
        vec![FixtureAnnot::new("Highlight", TEXT_RECT).with_note("remember")],
    );
    let body = multipart_body(&[("file", Some("fox.pdf"), pdf.as_slice())]);

    let response = app.clone().oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers().clone();
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains("fox_Report.html"));

    let html = body_string(response).await;
    assert!(html.contains("Source: fox.pdf"));
    assert!(html.contains("PAGE 1"));
    assert!(html.contains("HIGHLIGHT"));
    assert!(html.contains("The quick brown fox"));
    assert!(html.contains("📝 Note: remember"));

    // The same report is downloadable again by id
    let id = headers[REPORT_ID_HEADER].to_str().unwrap().to_string();
    let again = app
        .oneshot(
            Request::get(format!("/reports/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::OK);
    assert_eq!(body_string(again).await, html);

    // Source and report both land in the upload directory
    let names: Vec<String> = std::fs::read_dir(dir.path().join("uploads"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(names.contains(&format!("{}.pdf", id)));
    assert!(names.contains(&format!("{}_Report.html", id)));
}

#[tokio::test]
async fn test_unknown_report_is_not_found() {
    let dir = TempDir::new().unwrap();
    let app = app(&dir).await;

    for uri in ["/reports/not-a-uuid", "/reports/6f1c2b0e-8a47-4c1e-9d7a-2b3c4d5e6f70"] {
        let response = app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn test_health_reports_disabled_oracle() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir)
        .await
        .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["oracle"], "disabled");
}
