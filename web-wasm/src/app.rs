//! メインアプリケーションコンポーネント
//!
//! `UploadController` は `App` で1つだけ作り、各コンポーネントとハンドラに明示的に渡す。

use crate::api::{post_predict, read_as_data_url};
use crate::components::{
    error_banner::ErrorBanner, header::Header, loading::Loading, preview_panel::PreviewPanel,
    result_panel::ResultPanel, upload_area::UploadArea,
};
use blood_group_common::{FileMeta, SelectedFile, UploadController};
use leptos::html;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

/// ページ全体の状態（File は Send でないのでローカル保持）
pub type Controller = RwSignal<UploadController<File>, LocalStorage>;

/// `style:display` 用
pub fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// クリック選択・ドロップ共通の入口
pub fn select_file(controller: Controller, file: Option<File>) {
    let candidate = file.map(|file| {
        let meta = FileMeta::new(file.name(), file.type_(), file.size() as u64);
        SelectedFile::new(meta, file)
    });
    let preview_source = candidate.as_ref().map(|selected| selected.handle.clone());

    let ticket = match controller.try_update(|c| c.handle_file_select(candidate)) {
        Some(Ok(Some(ticket))) => ticket,
        _ => return,
    };
    let Some(file) = preview_source else {
        return;
    };

    spawn_local(async move {
        match read_as_data_url(&file).await {
            Ok(data_url) => controller.update(|c| {
                c.preview_ready(ticket, data_url);
            }),
            Err(detail) => controller.update(|c| c.preview_failed(ticket, &detail)),
        }
    });
}

/// 「画像を変更」
pub fn change_image(controller: Controller, file_input: NodeRef<html::Input>) {
    controller.update(|c| c.change_image());
    if let Some(input) = file_input.get_untracked() {
        input.set_value("");
    }
}

/// 推論リクエスト
pub fn predict(controller: Controller) {
    let Some(Ok(pending)) = controller.try_update(|c| c.begin_prediction()) else {
        return;
    };

    spawn_local(async move {
        let outcome = post_predict(&pending.handle).await;
        controller.update(|c| {
            c.finish_prediction(pending.ticket, outcome);
        });
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let controller: Controller = RwSignal::new_local(UploadController::new());
    let file_input = NodeRef::<html::Input>::new();

    view! {
        <div class="container">
            <Header />

            <div class="main-card">
                <UploadArea controller=controller file_input=file_input />
                <PreviewPanel controller=controller file_input=file_input />
                <Loading controller=controller />
                <ErrorBanner controller=controller />
                <ResultPanel controller=controller />
            </div>
        </div>
    }
}
