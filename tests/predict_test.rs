//! 推論リクエストの結合テスト
//!
//! ローカルに立てたモックバックエンド（axum）に対して判定フロー全体を検証

use axum::extract::Multipart;
use axum::http::{header, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use blood_group_common::{PredictError, UploadError};
use blood_group_rust::client::PredictClient;
use blood_group_rust::error::BloodGroupError;
use blood_group_rust::session;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });
    format!("http://{}", addr)
}

/// `/predict` が固定のレスポンスを返すバックエンド
async fn fixed_backend(status: StatusCode, content_type: &'static str, body: String) -> String {
    let app = Router::new().route(
        "/predict",
        post(move |mut multipart: Multipart| {
            let body = body.clone();
            async move {
                while let Ok(Some(field)) = multipart.next_field().await {
                    let _ = field.bytes().await;
                }
                (status, [(header::CONTENT_TYPE, content_type)], body)
            }
        }),
    );
    serve(app).await
}

async fn json_backend(status: StatusCode, body: Value) -> String {
    fixed_backend(status, "application/json", body.to_string()).await
}

fn image_fixture(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write image");
    (dir, path)
}

fn client(base_url: &str) -> PredictClient {
    PredictClient::new(base_url, None).expect("client")
}

/// 成功レスポンス → 確率の降順で表示
#[tokio::test]
async fn test_predict_success() {
    let base_url = json_backend(
        StatusCode::OK,
        json!({
            "success": true,
            "blood_group": "AB+",
            "confidence": 87.5,
            "all_predictions": {"A+": 3.2, "AB+": 87.5, "O-": 9.3}
        }),
    )
    .await;
    let (_dir, path) = image_fixture("sample.png", b"\x89PNG\r\n\x1a\n");

    let report = session::predict_image(&client(&base_url), &path)
        .await
        .expect("prediction failed");

    assert_eq!(report.file.file_name, "sample.png");
    assert!(report.response.success);
    assert_eq!(report.view.blood_group, "AB+");
    assert_eq!(report.view.bar_width, 87.5);
    assert_eq!(report.view.confidence_text, "87.5% Confidence");

    let rows: Vec<(&str, &str)> = report
        .view
        .rows
        .iter()
        .map(|r| (r.label.as_str(), r.value_text.as_str()))
        .collect();
    assert_eq!(rows, vec![("AB+", "87.50%"), ("O-", "9.30%"), ("A+", "3.20%")]);
}

/// `success: false` → バックエンドの文言
#[tokio::test]
async fn test_predict_application_error() {
    let base_url = json_backend(
        StatusCode::OK,
        json!({"success": false, "error": "model unavailable"}),
    )
    .await;
    let (_dir, path) = image_fixture("sample.jpg", b"\xFF\xD8\xFF");

    let err = session::predict_image(&client(&base_url), &path)
        .await
        .unwrap_err();
    assert!(matches!(err, BloodGroupError::Predict(PredictError::Application(_))));
    assert_eq!(err.to_string(), "model unavailable");
}

/// `error` 無し → 既定の文言
#[tokio::test]
async fn test_predict_application_error_fallback() {
    let base_url = json_backend(StatusCode::OK, json!({"success": false})).await;
    let (_dir, path) = image_fixture("sample.bmp", b"BM");

    let err = session::predict_image(&client(&base_url), &path)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Prediction failed. Please try again.");
}

/// エラーステータスでもJSONボディの文言を使う
#[tokio::test]
async fn test_predict_error_status_with_json_body() {
    let base_url = json_backend(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"success": false, "error": "Model not loaded"}),
    )
    .await;
    let (_dir, path) = image_fixture("sample.png", b"png");

    let err = session::predict_image(&client(&base_url), &path)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Model not loaded");
}

/// JSONでないボディ → 通信エラー
#[tokio::test]
async fn test_predict_non_json_body() {
    let base_url = fixed_backend(
        StatusCode::BAD_GATEWAY,
        "text/html",
        "<html>502 Bad Gateway</html>".to_string(),
    )
    .await;
    let (_dir, path) = image_fixture("sample.png", b"png");

    let err = session::predict_image(&client(&base_url), &path)
        .await
        .unwrap_err();
    assert!(matches!(err, BloodGroupError::Predict(PredictError::Transport(_))));
    assert_eq!(
        err.to_string(),
        "Network error. Please check your connection and try again."
    );
}

/// 接続できない → 通信エラー
#[tokio::test]
async fn test_predict_connection_refused() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let (_dir, path) = image_fixture("sample.png", b"png");

    let err = session::predict_image(&client(&format!("http://127.0.0.1:{}", port)), &path)
        .await
        .unwrap_err();
    assert!(matches!(err, BloodGroupError::Predict(PredictError::Transport(_))));
    assert_eq!(
        err.to_string(),
        "Network error. Please check your connection and try again."
    );
}

/// マルチパートのフィールド名・ファイル名・Content-Type・サイズ
#[tokio::test]
async fn test_predict_multipart_packaging() {
    let app = Router::new().route(
        "/predict",
        post(|mut multipart: Multipart| async move {
            let mut parts = Vec::new();
            while let Ok(Some(field)) = multipart.next_field().await {
                let name = field.name().unwrap_or_default().to_string();
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let len = field.bytes().await.map(|b| b.len()).unwrap_or(0);
                parts.push(format!("{}|{}|{}|{}", name, file_name, content_type, len));
            }
            Json(json!({"success": false, "error": parts.join(";")}))
        }),
    );
    let base_url = serve(app).await;
    let (_dir, path) = image_fixture("smear.jpeg", &[7u8; 1000]);

    let err = session::predict_image(&client(&base_url), &path)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "file|smear.jpeg|image/jpeg|1000");
}

/// 検証エラーはネットワークに到達しない
#[tokio::test]
async fn test_invalid_file_never_reaches_backend() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let app = Router::new().route(
        "/predict",
        post(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({"success": false}))
            }
        }),
    );
    let base_url = serve(app).await;
    let (_dir, path) = image_fixture("animation.gif", b"GIF89a");

    let err = session::predict_image(&client(&base_url), &path)
        .await
        .unwrap_err();
    assert!(matches!(err, BloodGroupError::Upload(UploadError::InvalidType { .. })));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

/// 存在しないファイル
#[tokio::test]
async fn test_predict_missing_file() {
    let err = session::predict_image(
        &client("http://127.0.0.1:9"),
        Path::new("/nonexistent/sample.png"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, BloodGroupError::FileNotFound(_)));
}

/// `/health`
#[tokio::test]
async fn test_health() {
    let app = Router::new().route(
        "/health",
        get(|| async { Json(json!({"status": "healthy", "model_loaded": true})) }),
    );
    let base_url = serve(app).await;

    let health = client(&base_url).health().await.expect("health failed");
    assert_eq!(health.status, "healthy");
    assert!(health.is_ready());
}

/// `/health` に接続できない
#[tokio::test]
async fn test_health_unreachable() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let err = client(&format!("http://127.0.0.1:{}", port))
        .health()
        .await
        .unwrap_err();
    assert!(matches!(err, BloodGroupError::Health(_)));
}
