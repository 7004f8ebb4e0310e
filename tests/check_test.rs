//! 送信前検証テスト
//!
//! ネットワークを使わずにファイルの受付可否を検証

use blood_group_common::{UploadError, MAX_FILE_SIZE};
use blood_group_rust::error::BloodGroupError;
use blood_group_rust::session;
use std::fs::File;
use std::path::Path;
use tempfile::tempdir;

fn sized_file(dir: &Path, name: &str, size: u64) -> std::path::PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create file");
    file.set_len(size).expect("Failed to set length");
    path
}

/// 許可された形式は受け付ける
#[test]
fn test_check_allowed_extensions() {
    let dir = tempdir().expect("Failed to create temp dir");
    for name in ["a.png", "b.jpg", "c.jpeg", "d.bmp", "e.PNG"] {
        let path = sized_file(dir.path(), name, 128);
        let meta = session::check_image(&path).expect(name);
        assert_eq!(meta.file_name, name);
        assert_eq!(meta.size, 128);
    }
}

/// 不正な形式はタイプエラー
#[test]
fn test_check_rejects_other_types() {
    let dir = tempdir().expect("Failed to create temp dir");
    for name in ["a.gif", "b.webp", "c.txt", "noext"] {
        let path = sized_file(dir.path(), name, 10);
        let err = session::check_image(&path).unwrap_err();
        assert!(
            matches!(err, BloodGroupError::Upload(UploadError::InvalidType { .. })),
            "{}: {:?}",
            name,
            err
        );
        assert_eq!(
            err.to_string(),
            "Invalid file type. Please upload PNG, JPG, JPEG, or BMP images."
        );
    }
}

/// 16MiBちょうどは許可
#[test]
fn test_check_exact_size_limit() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sized_file(dir.path(), "limit.png", MAX_FILE_SIZE);
    let meta = session::check_image(&path).unwrap();
    assert_eq!(meta.size, 16_777_216);
}

/// 16MiBを1バイトでも超えたらサイズエラー
#[test]
fn test_check_oversized() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sized_file(dir.path(), "big.jpg", MAX_FILE_SIZE + 1);
    let err = session::check_image(&path).unwrap_err();
    assert!(matches!(err, BloodGroupError::Upload(UploadError::TooLarge { .. })));
    assert_eq!(
        err.to_string(),
        "File size exceeds 16MB. Please upload a smaller image."
    );
}

/// 不正形式かつサイズ超過 → タイプエラーが優先
#[test]
fn test_check_type_before_size() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = sized_file(dir.path(), "big.gif", MAX_FILE_SIZE + 1);
    let err = session::check_image(&path).unwrap_err();
    assert!(matches!(err, BloodGroupError::Upload(UploadError::InvalidType { .. })));
}

/// 存在しないファイル
#[test]
fn test_check_missing_file() {
    let err = session::check_image(Path::new("/nonexistent/sample.png")).unwrap_err();
    assert!(matches!(err, BloodGroupError::FileNotFound(_)));
}
