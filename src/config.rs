use crate::error::{PlantDoctorError, Result};
use plant_doctor_common::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "PLANT_DOCTOR_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 書き換え用に読み込む
    ///
    /// 壊れた設定ファイルはデフォルトで置き換える（上書き保存で修復できるように）
    pub fn load_for_update() -> Result<Self> {
        Ok(Self::load_or_default_from(&Self::config_path()?))
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "config is unreadable, using defaults");
            Self::default()
        })
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
            .ok_or_else(|| PlantDoctorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("plant-doctor").join("config.json"))
    }

    /// 使用するエンドポイント
    ///
    /// 優先順位: 引数 > 環境変数 > 設定ファイル
    pub fn resolve_endpoint(&self, override_endpoint: Option<&str>) -> String {
        if let Some(endpoint) = override_endpoint {
            return endpoint.to_string();
        }

        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => endpoint,
            _ => self.endpoint.clone(),
        }
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        if endpoint.trim().is_empty() {
            return Err(PlantDoctorError::Config("エンドポイントが空です".into()));
        }
        self.endpoint = endpoint;
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(PlantDoctorError::Config("タイムアウトは1秒以上にしてください".into()));
        }
        self.timeout_seconds = seconds;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, 60);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"timeout_seconds": 5}"#).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_override_wins() {
        let config = Config::default();
        assert_eq!(
            config.resolve_endpoint(Some("http://127.0.0.1:9000")),
            "http://127.0.0.1:9000"
        );
    }

    #[test]
    fn test_set_endpoint_rejects_empty() {
        let mut config = Config::default();
        assert!(config.set_endpoint("  ".into()).is_err());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_set_timeout_rejects_zero() {
        let mut config = Config::default();
        assert!(config.set_timeout(0).is_err());
        config.set_timeout(15).unwrap();
        assert_eq!(config.timeout_seconds, 15);
    }
}
