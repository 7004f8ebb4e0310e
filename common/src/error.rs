//! エラー型定義
//!
//! `UploadError` / `PredictError` の Display はそのままエラーバナーに表示される文言。

use thiserror::Error;

/// 送信前にローカルで検出されるエラー（ネットワークには到達しない）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Invalid file type. Please upload PNG, JPG, JPEG, or BMP images.")]
    InvalidType { mime_type: String },

    #[error("File size exceeds 16MB. Please upload a smaller image.")]
    TooLarge { size: u64 },

    #[error("Please select an image first.")]
    NoSelection,
}

/// 推論リクエストのエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    /// バックエンドが `success: false` を返した
    #[error("{0}")]
    Application(String),

    /// 通信失敗・不正なレスポンス。詳細はログのみに出す
    #[error("Network error. Please check your connection and try again.")]
    Transport(String),
}

impl PredictError {
    /// 開発者向けの詳細（Transportのみ）
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            PredictError::Transport(detail) => Some(detail),
            PredictError::Application(_) => None,
        }
    }
}
