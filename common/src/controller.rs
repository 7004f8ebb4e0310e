//! アップロード画面のコントローラ
//!
//! 選択ファイルと4つの表示領域（アップロード枠・プレビュー・結果・エラーバナー）、
//! ローディング表示を1つの状態として持つ。DOMやHTTPには触れず、
//! フロントエンド（Web/CLI）が非同期処理の前後で遷移メソッドを呼ぶ。
//!
//! 非同期処理の結果は世代番号付きのチケットで受け取り、
//! 新しい選択・新しいリクエストで古くなった結果は反映しない。

use crate::error::{PredictError, UploadError};
use crate::render::ResultView;
use crate::types::PredictionResponse;
use crate::validation::{validate_file, FileMeta};
use log::{debug, error};

/// 選択中のファイル
///
/// `H` はファイル本体へのハンドル（Webでは `web_sys::File`、CLIではバイト列）。
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<H> {
    pub meta: FileMeta,
    pub handle: H,
}

impl<H> SelectedFile<H> {
    pub fn new(meta: FileMeta, handle: H) -> Self {
        Self { meta, handle }
    }
}

/// 画面状態（エラーバナーは別途重ねて表示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    AwaitingUpload,
    PreviewingSelection,
    Loading,
    ShowingResult,
}

/// プレビュー生成（Data URL変換）の受付票
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket {
    selection: u64,
}

/// 推論リクエストの受付票
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    selection: u64,
    request: u64,
}

/// 送信待ちのリクエスト
#[derive(Debug, Clone)]
pub struct PendingPrediction<H> {
    pub ticket: RequestTicket,
    pub meta: FileMeta,
    pub handle: H,
}

/// `finish_prediction` の結果
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Rendered,
    Failed(PredictError),
    /// 新しい選択・リクエストに置き換えられていたので破棄した
    Stale,
}

#[derive(Debug)]
pub struct UploadController<H> {
    selected: Option<SelectedFile<H>>,
    preview_url: Option<String>,
    result: Option<ResultView>,
    error: Option<String>,
    loading: bool,
    drag_over: bool,
    selection_generation: u64,
    request_generation: u64,
}

impl<H> Default for UploadController<H> {
    fn default() -> Self {
        Self {
            selected: None,
            preview_url: None,
            result: None,
            error: None,
            loading: false,
            drag_over: false,
            selection_generation: 0,
            request_generation: 0,
        }
    }
}

impl<H> UploadController<H> {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------
    // 取得
    // ------------------------------------------------------------

    pub fn selected(&self) -> Option<&SelectedFile<H>> {
        self.selected.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    /// アップロード枠とプレビューは常に排他
    pub fn upload_box_visible(&self) -> bool {
        self.preview_url.is_none()
    }

    pub fn preview_visible(&self) -> bool {
        self.preview_url.is_some()
    }

    pub fn results_visible(&self) -> bool {
        self.result.is_some()
    }

    pub fn view_state(&self) -> ViewState {
        if self.loading {
            ViewState::Loading
        } else if self.result.is_some() {
            ViewState::ShowingResult
        } else if self.preview_url.is_some() {
            ViewState::PreviewingSelection
        } else {
            ViewState::AwaitingUpload
        }
    }

    // ------------------------------------------------------------
    // 遷移
    // ------------------------------------------------------------

    pub fn set_drag_over(&mut self, drag_over: bool) {
        self.drag_over = drag_over;
    }

    /// 候補ファイルを検証して選択する
    ///
    /// - `None` は何もしない（`Ok(None)`）
    /// - 不正ならエラーバナーを出し、選択状態は変えない
    /// - 正常なら選択を置き換え、プレビュー生成用のチケットを返す
    pub fn handle_file_select(
        &mut self,
        candidate: Option<SelectedFile<H>>,
    ) -> Result<Option<PreviewTicket>, UploadError> {
        let Some(candidate) = candidate else {
            return Ok(None);
        };

        if let Err(err) = validate_file(&candidate.meta) {
            debug!("rejected {}: {:?}", candidate.meta.file_name, err);
            self.show_error(err.to_string());
            return Err(err);
        }

        debug!(
            "selected {} ({}, {} bytes)",
            candidate.meta.file_name, candidate.meta.mime_type, candidate.meta.size
        );
        self.selected = Some(candidate);
        self.invalidate_selection();

        Ok(Some(PreviewTicket {
            selection: self.selection_generation,
        }))
    }

    /// Data URL変換が終わった
    ///
    /// 古いチケットなら何もせず `false`。
    pub fn preview_ready(&mut self, ticket: PreviewTicket, data_url: String) -> bool {
        if ticket.selection != self.selection_generation {
            debug!("dropping stale preview (generation {})", ticket.selection);
            return false;
        }

        self.preview_url = Some(data_url);
        self.result = None;
        self.error = None;
        true
    }

    /// Data URL変換に失敗した（プレビューは出さないが選択は残す）
    pub fn preview_failed(&mut self, ticket: PreviewTicket, detail: &str) {
        if ticket.selection == self.selection_generation {
            error!("failed to read selected file: {}", detail);
        }
    }

    /// 「画像を変更」
    ///
    /// 進行中のプレビュー生成・リクエストは無効になる。エラーバナーは触らない。
    pub fn change_image(&mut self) {
        self.selected = None;
        self.preview_url = None;
        self.result = None;
        self.drag_over = false;
        self.invalidate_selection();
    }

    /// 推論リクエストを開始する
    ///
    /// 未選択ならエラーバナーを出して `Err`。
    pub fn begin_prediction(&mut self) -> Result<PendingPrediction<H>, UploadError>
    where
        H: Clone,
    {
        let Some(selected) = self.selected.as_ref() else {
            let err = UploadError::NoSelection;
            self.show_error(err.to_string());
            return Err(err);
        };
        let meta = selected.meta.clone();
        let handle = selected.handle.clone();

        self.request_generation += 1;
        self.loading = true;
        self.result = None;
        self.error = None;

        Ok(PendingPrediction {
            ticket: RequestTicket {
                selection: self.selection_generation,
                request: self.request_generation,
            },
            meta,
            handle,
        })
    }

    /// リクエストの結果を反映する
    ///
    /// 現在のリクエストであれば、どの結果でもローディングは必ず解除される。
    pub fn finish_prediction(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<PredictionResponse, PredictError>,
    ) -> Completion {
        if ticket.selection != self.selection_generation
            || ticket.request != self.request_generation
        {
            debug!("dropping stale prediction (request {})", ticket.request);
            return Completion::Stale;
        }

        self.loading = false;

        match outcome.and_then(PredictionResponse::into_result) {
            Ok(prediction) => {
                debug!(
                    "predicted {} ({}%)",
                    prediction.blood_group, prediction.confidence
                );
                self.result = Some(ResultView::from_prediction(&prediction));
                Completion::Rendered
            }
            Err(err) => {
                if let Some(detail) = err.diagnostic() {
                    error!("prediction request failed: {}", detail);
                }
                self.show_error(err.to_string());
                Completion::Failed(err)
            }
        }
    }

    fn show_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// 選択世代を進め、進行中のリクエストも無効にする
    fn invalidate_selection(&mut self) {
        self.selection_generation += 1;
        self.loading = false;
    }
}
