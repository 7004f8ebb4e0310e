pub mod error_banner;
pub mod header;
pub mod loading;
pub mod preview_panel;
pub mod result_panel;
pub mod upload_area;
