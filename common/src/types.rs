//! `/predict` `/health` の入出力型
//!
//! CLIとWeb(WASM)で共有される型:
//! - PredictionResponse: `/predict` のJSONボディそのもの
//! - Prediction: 成功時の検証済み結果
//! - HealthStatus: `/health` のJSONボディ

use crate::error::PredictError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// マルチパートのフィールド名
pub const UPLOAD_FIELD_NAME: &str = "file";

/// 推論エンドポイント
pub const PREDICT_PATH: &str = "/predict";

/// ヘルスチェックエンドポイント
pub const HEALTH_PATH: &str = "/health";

/// `success: false` で `error` が無い場合の文言
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed. Please try again.";

/// モデルが出力するクラス
pub const CLASS_LABELS: [&str; 8] = ["A+", "A-", "AB+", "AB-", "B+", "B-", "O+", "O-"];

/// `/predict` レスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,

    /// パーセント（0〜100想定）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_predictions: Option<BTreeMap<String, f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 成功時の推論結果
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub blood_group: String,
    pub confidence: f64,
    pub all_predictions: BTreeMap<String, f64>,
}

impl PredictionResponse {
    /// JSON文字列からパース。パース失敗は通信エラー扱い
    pub fn from_json(body: &str) -> Result<Self, PredictError> {
        serde_json::from_str(body)
            .map_err(|e| PredictError::Transport(format!("invalid response body: {}", e)))
    }

    /// 成功/失敗に振り分ける
    ///
    /// `success: true` なのに必須フィールドが欠けている場合は描画できないので
    /// 通信エラー（不正レスポンス）として扱う。
    pub fn into_result(self) -> Result<Prediction, PredictError> {
        if !self.success {
            let message = self
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| PREDICTION_FAILED_MESSAGE.to_string());
            return Err(PredictError::Application(message));
        }

        let blood_group = self
            .blood_group
            .ok_or_else(|| missing_field("blood_group"))?;
        let confidence = self.confidence.ok_or_else(|| missing_field("confidence"))?;
        let all_predictions = self
            .all_predictions
            .ok_or_else(|| missing_field("all_predictions"))?;

        Ok(Prediction {
            blood_group,
            confidence,
            all_predictions,
        })
    }
}

fn missing_field(name: &str) -> PredictError {
    PredictError::Transport(format!("malformed response: missing `{}`", name))
}

/// `/health` レスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}
