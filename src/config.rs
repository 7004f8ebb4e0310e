use crate::error::{BloodGroupError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// サーバURLを上書きする環境変数
pub const SERVER_ENV: &str = "BLOOD_GROUP_SERVER";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub server_url: String,
    /// 未設定なら応答を無制限に待つ
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BloodGroupError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("blood-group").join("config.json"))
    }

    /// 優先順位: 引数 > 環境変数 > 設定ファイル
    pub fn resolve_server(&self, flag: Option<&str>, env: Option<&str>) -> String {
        flag.or(env)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(self.server_url.as_str())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn set_server(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(BloodGroupError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.server_url = url;
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) {
        self.timeout_seconds = if seconds == 0 { None } else { Some(seconds) };
    }
}
