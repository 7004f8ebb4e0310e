//! `POST /predict`

use super::describe_js_error;
use blood_group_common::{PredictError, PredictionResponse, PREDICT_PATH, UPLOAD_FIELD_NAME};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

/// 画像をマルチパートで送信し、JSONボディを返す
///
/// HTTPステータスは見ない（失敗時もバックエンドはJSONで理由を返す）。
/// 通信失敗・JSONでないボディは `PredictError::Transport`。
pub async fn post_predict(file: &File) -> Result<PredictionResponse, PredictError> {
    let json = send(file)
        .await
        .map_err(|e| PredictError::Transport(describe_js_error(&e)))?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|e| PredictError::Transport(format!("invalid response body: {}", e)))
}

async fn send(file: &File) -> Result<JsValue, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(PREDICT_PATH, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    JsFuture::from(resp.json()?).await
}
