//! 選択画像のプレビュー

use crate::app::{change_image, display, predict, Controller};
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn PreviewPanel(controller: Controller, file_input: NodeRef<html::Input>) -> impl IntoView {
    view! {
        <div
            class="preview-section"
            style:display=move || display(controller.with(|c| c.preview_visible()))
        >
            <img
                class="image-preview"
                alt="Selected blood sample"
                src=move || controller.with(|c| c.preview_url().unwrap_or_default().to_string())
            />
            <div class="preview-actions">
                <button
                    class="btn btn-secondary"
                    on:click=move |_| change_image(controller, file_input)
                >
                    "Change Image"
                </button>
                <button class="btn btn-primary" on:click=move |_| predict(controller)>
                    "Predict Blood Group"
                </button>
            </div>
        </div>
    }
}
