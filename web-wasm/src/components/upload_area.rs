//! アップロードエリアコンポーネント
//!
//! クリックでファイル選択、ドラッグ&ドロップで先頭の1ファイルを受け付ける。

use crate::app::{display, select_file, Controller};
use blood_group_common::ALLOWED_MIME_TYPES;
use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};

#[component]
pub fn UploadArea(controller: Controller, file_input: NodeRef<html::Input>) -> impl IntoView {
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        controller.update(|c| c.set_drag_over(false));

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        select_file(controller, file);
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !controller.with_untracked(|c| c.is_drag_over()) {
            controller.update(|c| c.set_drag_over(true));
        }
    };

    let on_dragleave = move |_: DragEvent| {
        controller.update(|c| c.set_drag_over(false));
    };

    // ファイル選択ダイアログを開く
    let on_click = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_change = move |ev| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        select_file(controller, file);
    };

    view! {
        <div
            class=move || {
                if controller.with(|c| c.is_drag_over()) {
                    "upload-box drag-over"
                } else {
                    "upload-box"
                }
            }
            style:display=move || display(controller.with(|c| c.upload_box_visible()))
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"🩸"</div>
            <p>"Drag & drop an image here or click to browse"</p>
            <p class="text-muted">"Supported formats: PNG, JPG, JPEG, BMP (max 16MB)"</p>
        </div>
        <input
            type="file"
            class="file-input"
            accept=ALLOWED_MIME_TYPES.join(",")
            node_ref=file_input
            style:display="none"
            on:change=on_change
        />
    }
}
