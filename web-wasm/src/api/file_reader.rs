//! File → Data URL

use super::describe_js_error;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Event, File, FileReader};

type Sender = Rc<RefCell<Option<oneshot::Sender<Result<String, String>>>>>;

/// `FileReader.readAsDataURL` の完了を待つ
///
/// コールバックは完了まで保持し、終わったら解放する。
pub async fn read_as_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(|e| describe_js_error(&e))?;
    let (tx, rx) = oneshot::channel();
    let tx: Sender = Rc::new(RefCell::new(Some(tx)));

    let on_load = {
        let reader = reader.clone();
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut(Event)>::new(move |_| {
            let result = reader
                .result()
                .map_err(|e| describe_js_error(&e))
                .and_then(|value| {
                    value
                        .as_string()
                        .ok_or_else(|| "FileReader result is not a string".to_string())
                });
            send(&tx, result);
        })
    };

    let on_error = {
        let reader = reader.clone();
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut(Event)>::new(move |_| {
            let detail = reader
                .error()
                .map(|e| e.message())
                .unwrap_or_else(|| "unknown FileReader error".to_string());
            send(&tx, Err(detail));
        })
    };

    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| describe_js_error(&e))?;

    let result = rx
        .await
        .map_err(|_| "FileReader finished without a result".to_string());

    reader.set_onload(None);
    reader.set_onerror(None);
    result?
}

fn send(tx: &Sender, result: Result<String, String>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}
