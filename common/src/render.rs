//! 推論結果の表示モデル
//!
//! DOMにもターミナルにも依存しない形で、バッジ・信頼度バー・詳細リストの内容を組み立てる。

use crate::types::Prediction;
use log::warn;
use serde::Serialize;

/// 詳細リストの見出し
pub const DETAILS_HEADER: &str = "Detailed Predictions:";

/// 詳細リストの1行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRow {
    pub label: String,
    pub probability: f64,
    /// 小数点以下2桁 + `%`
    pub value_text: String,
}

/// 結果エリアの表示内容
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub blood_group: String,
    /// バーの幅（%）。0〜100に収める
    pub bar_width: f64,
    /// `"<confidence>% Confidence"`。値はバックエンドのまま
    pub confidence_text: String,
    /// 確率の降順
    pub rows: Vec<PredictionRow>,
}

impl ResultView {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        let confidence = prediction.confidence;
        if !(0.0..=100.0).contains(&confidence) {
            warn!("confidence {} is outside 0-100; clamping bar width", confidence);
        }

        Self {
            blood_group: prediction.blood_group.clone(),
            bar_width: confidence.clamp(0.0, 100.0),
            confidence_text: format!("{}% Confidence", format_number(confidence)),
            rows: sorted_rows(prediction),
        }
    }

    /// `style` 属性用
    pub fn bar_style(&self) -> String {
        format!("width: {}%", format_number(self.bar_width))
    }
}

/// 確率の降順に並べる（同値はラベル昇順のまま）
fn sorted_rows(prediction: &Prediction) -> Vec<PredictionRow> {
    let mut entries: Vec<(&String, f64)> = prediction
        .all_predictions
        .iter()
        .map(|(label, prob)| (label, *prob))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    entries
        .into_iter()
        .map(|(label, probability)| PredictionRow {
            label: label.clone(),
            probability,
            value_text: format!("{:.2}%", probability),
        })
        .collect()
}

/// 数値を最短表記で出す（87.5 → "87.5", 90.0 → "90"）
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
