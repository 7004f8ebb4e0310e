//! ブラウザ上でのみ動くグルーコードのテスト（wasm-pack test --headless --chrome）

#![cfg(target_arch = "wasm32")]

use blood_group_web::{describe_js_error, read_as_data_url};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::File;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_describe_string_error() {
    assert_eq!(describe_js_error(&JsValue::from_str("boom")), "boom");
}

#[wasm_bindgen_test]
fn test_describe_non_string_error() {
    let described = describe_js_error(&JsValue::from_f64(42.0));
    assert!(described.contains("42"));
}

#[wasm_bindgen_test]
async fn test_read_as_data_url() {
    let parts = js_sys::Array::of1(&JsValue::from_str("hi"));
    let file = File::new_with_str_sequence(&parts, "sample.txt").expect("file");

    let data_url = read_as_data_url(&file).await.expect("data url");
    assert!(data_url.starts_with("data:"));
    assert!(data_url.ends_with("base64,aGk="));
}
