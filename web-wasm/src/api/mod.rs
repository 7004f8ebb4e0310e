//! ブラウザAPIとの接続（ファイル読み込み・推論リクエスト）

mod file_reader;
mod predict;

pub use file_reader::read_as_data_url;
pub use predict::post_predict;

use wasm_bindgen::JsValue;

/// JS側の例外を文字列化（開発者向けログ用）
pub fn describe_js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
