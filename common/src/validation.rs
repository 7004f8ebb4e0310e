//! アップロード前のファイル検証
//!
//! 宣言されたMIMEタイプとサイズのみで判定する（中身のマジックバイトは見ない）。

use crate::error::UploadError;
use serde::{Deserialize, Serialize};

/// 受け付けるMIMEタイプ
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/jpg", "image/bmp"];

/// 最大ファイルサイズ（16MiB、この値ちょうどは許可）
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// バックエンド側で許可される拡張子
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// 選択されたファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

/// ファイルを検証する
///
/// 判定順はタイプ → サイズ。
///
/// # Examples
/// ```
/// use blood_group_common::{validate_file, FileMeta, MAX_FILE_SIZE};
///
/// let meta = FileMeta::new("sample.png", "image/png", MAX_FILE_SIZE);
/// assert!(validate_file(&meta).is_ok());
/// ```
pub fn validate_file(meta: &FileMeta) -> Result<(), UploadError> {
    if !ALLOWED_MIME_TYPES.contains(&meta.mime_type.as_str()) {
        return Err(UploadError::InvalidType {
            mime_type: meta.mime_type.clone(),
        });
    }

    if meta.size > MAX_FILE_SIZE {
        return Err(UploadError::TooLarge { size: meta.size });
    }

    Ok(())
}

/// 拡張子からMIMEタイプを推定（ブラウザの `File.type` 相当）
///
/// 未知の拡張子は `application/octet-stream`。
pub fn mime_type_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" => "image/jpg",
        "jpeg" => "image/jpeg",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
