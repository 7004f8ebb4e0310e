//! エラーバナー

use crate::app::{display, Controller};
use leptos::prelude::*;

#[component]
pub fn ErrorBanner(controller: Controller) -> impl IntoView {
    view! {
        <div
            class="error-message"
            role="alert"
            style:display=move || display(controller.with(|c| c.error_message().is_some()))
        >
            {move || controller.with(|c| c.error_message().unwrap_or_default().to_string())}
        </div>
    }
}
