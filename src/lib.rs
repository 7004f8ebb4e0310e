//! 血液型判定クライアント（CLI）
//!
//! 検証・画面状態は `blood_group_common` をWeb版と共有する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod session;
