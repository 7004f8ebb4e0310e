//! CLIでの1回分の判定フロー
//!
//! Web版と同じ `UploadController` を通す:
//! 選択（検証）→ リクエスト開始 → 送信 → 結果反映

use crate::client::PredictClient;
use crate::error::{BloodGroupError, Result};
use blood_group_common::{
    mime_type_for_extension, Completion, FileMeta, PredictError, PredictionResponse, ResultView,
    SelectedFile, UploadController, UploadError,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 判定結果
#[derive(Debug, Clone)]
pub struct PredictReport {
    pub file: FileMeta,
    pub response: PredictionResponse,
    pub view: ResultView,
}

/// ローカルファイルを選択候補にする（中身はまだ読まない）
pub fn load_candidate(path: &Path) -> Result<SelectedFile<PathBuf>> {
    if !path.is_file() {
        return Err(BloodGroupError::FileNotFound(path.display().to_string()));
    }

    let size = std::fs::metadata(path)?.len();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let mime_type = path
        .extension()
        .map(|ext| mime_type_for_extension(&ext.to_string_lossy()))
        .unwrap_or("application/octet-stream");

    Ok(SelectedFile::new(
        FileMeta::new(file_name, mime_type, size),
        path.to_path_buf(),
    ))
}

/// 送信せずに検証のみ
pub fn check_image(path: &Path) -> Result<FileMeta> {
    let mut controller = UploadController::new();
    controller.handle_file_select(Some(load_candidate(path)?))?;
    controller
        .selected()
        .map(|selected| selected.meta.clone())
        .ok_or(BloodGroupError::Upload(UploadError::NoSelection))
}

/// 画像を送信して結果の表示モデルを得る
pub async fn predict_image(client: &PredictClient, path: &Path) -> Result<PredictReport> {
    let mut controller = UploadController::new();
    controller.handle_file_select(Some(load_candidate(path)?))?;
    let pending = controller.begin_prediction()?;

    let outcome = {
        let _spinner = Spinner::start(format!("{} を判定中...", pending.meta.file_name));
        client.predict(&pending.meta, &pending.handle).await
    };
    let response = outcome.as_ref().ok().cloned();

    match controller.finish_prediction(pending.ticket, outcome) {
        Completion::Rendered => {
            let view = controller
                .result()
                .cloned()
                .ok_or_else(|| PredictError::Transport("result was not rendered".into()))?;
            Ok(PredictReport {
                file: pending.meta,
                response: response.unwrap_or_default(),
                view,
            })
        }
        Completion::Failed(err) => Err(err.into()),
        Completion::Stale => Err(PredictError::Transport("request was superseded".into()).into()),
    }
}

/// ローディング表示。スコープを抜けると必ず消える
struct Spinner(ProgressBar);

impl Spinner {
    fn start(message: String) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self(bar)
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.0.finish_and_clear();
    }
}
