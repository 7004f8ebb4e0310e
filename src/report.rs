//! 判定結果のターミナル表示

use blood_group_common::{ResultView, DETAILS_HEADER};

/// 信頼度バーの幅（文字数）
const BAR_CELLS: usize = 30;

pub fn render_result(view: &ResultView) -> String {
    let mut out = String::new();
    out.push_str(&format!("🩸 血液型: {}\n", view.blood_group));
    out.push_str(&format!("   {} {}\n", confidence_bar(view.bar_width), view.confidence_text));
    out.push('\n');
    out.push_str(DETAILS_HEADER);
    out.push('\n');

    let label_width = view
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    for row in &view.rows {
        out.push_str(&format!(
            "  {:<width$}  {:>7}\n",
            row.label,
            row.value_text,
            width = label_width
        ));
    }
    out
}

/// `bar_width` は 0〜100 に収まっている前提
pub fn confidence_bar(width_percent: f64) -> String {
    let filled = ((width_percent / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_CELLS - filled))
}
