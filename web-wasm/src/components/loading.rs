//! ローディング表示

use crate::app::{display, Controller};
use leptos::prelude::*;

#[component]
pub fn Loading(controller: Controller) -> impl IntoView {
    view! {
        <div class="loading" style:display=move || display(controller.with(|c| c.is_loading()))>
            <div class="spinner" />
            <p>"Analyzing blood sample..."</p>
        </div>
    }
}
