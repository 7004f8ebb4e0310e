use blood_group_common::{PredictError, UploadError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BloodGroupError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Predict(#[from] PredictError),

    #[error("ヘルスチェック失敗: {0}")]
    Health(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BloodGroupError>;
