//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Blood Group Detection"</h1>
            <p class="subtitle">"Upload a blood sample image to predict its blood group"</p>
        </header>
    }
}
