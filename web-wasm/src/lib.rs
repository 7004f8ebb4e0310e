//! Blood Group Detection Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod logger;

use wasm_bindgen::prelude::*;

pub use api::{describe_js_error, read_as_data_url};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    leptos::mount::mount_to_body(app::App);
}
