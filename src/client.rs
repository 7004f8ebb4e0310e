//! 推論バックエンドへのHTTPクライアント

use crate::error::{BloodGroupError, Result};
use blood_group_common::{
    FileMeta, HealthStatus, PredictError, PredictionResponse, HEALTH_PATH, PREDICT_PATH,
    UPLOAD_FIELD_NAME,
};
use log::debug;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictClient {
    /// `timeout` が `None` なら応答を無制限に待つ
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| BloodGroupError::Config(format!("HTTPクライアント初期化失敗: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /predict`
    ///
    /// ステータスコードに関わらずボディをJSONとして読む。
    /// 読み込み・通信・パースの失敗はすべて `PredictError::Transport`。
    pub async fn predict(
        &self,
        meta: &FileMeta,
        path: &Path,
    ) -> std::result::Result<PredictionResponse, PredictError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| transport(format!("failed to read {}: {}", path.display(), e)))?;

        let part = Part::bytes(bytes)
            .file_name(meta.file_name.clone())
            .mime_str(&meta.mime_type)
            .map_err(|e| transport(e.to_string()))?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let url = format!("{}{}", self.base_url, PREDICT_PATH);
        debug!("POST {} ({} bytes)", url, meta.size);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| transport(e.to_string()))?;
        debug!("{} -> {}", url, status);

        PredictionResponse::from_json(&body)
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BloodGroupError::Health(e.to_string()))?;

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| BloodGroupError::Health(e.to_string()))
    }
}

fn transport(detail: String) -> PredictError {
    PredictError::Transport(detail)
}
