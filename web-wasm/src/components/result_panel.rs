//! 推論結果（血液型バッジ・信頼度バー・詳細リスト）

use crate::app::{display, Controller};
use blood_group_common::{ResultView, DETAILS_HEADER};
use leptos::prelude::*;

#[component]
pub fn ResultPanel(controller: Controller) -> impl IntoView {
    view! {
        <div
            class="result-section"
            style:display=move || display(controller.with(|c| c.results_visible()))
        >
            {move || controller.with(|c| c.result().cloned()).map(|result| view! { <ResultBody result=result /> })}
        </div>
    }
}

#[component]
fn ResultBody(result: ResultView) -> impl IntoView {
    let bar_style = result.bar_style();

    view! {
        <h3>"Prediction Result"</h3>
        <div class="blood-group-badge">{result.blood_group}</div>

        <div class="confidence-container">
            <div class="confidence-bar">
                <div class="confidence-fill" style=bar_style />
            </div>
            <p class="confidence-text">{result.confidence_text}</p>
        </div>

        // 毎回作り直す
        <div class="all-predictions">
            <h4>{DETAILS_HEADER}</h4>
            {result
                .rows
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="prediction-item">
                            <span class="prediction-label">{row.label}</span>
                            <span class="prediction-value">{row.value_text}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
