use crate::error::{HairReportError, Result};
use hair_report_common::api::{resolve_base_url, API_URL_ENV, REQUEST_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
    pub font_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: u64::from(REQUEST_TIMEOUT_MS / 1000),
            font_path: None,
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
            .ok_or_else(|| HairReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("hair-report").join("config.json"))
    }

    /// ベースURLの決定: CLI引数 → 環境変数 → 設定ファイル → 既定値
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        let env_value = std::env::var(API_URL_ENV).ok();
        self.resolve_base_url_with(cli_override, env_value.as_deref())
    }

    pub fn resolve_base_url_with(&self, cli_override: Option<&str>, env_value: Option<&str>) -> String {
        let explicit = [cli_override, env_value, self.base_url.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty());
        resolve_base_url(explicit, !cfg!(debug_assertions))
    }

    /// PDF用フォント: CLI引数 → 設定ファイル
    pub fn font_for_pdf(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.font_path.clone())
            .ok_or(HairReportError::MissingFont)
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        self.base_url = Some(url.trim_end_matches('/').to_string());
        self.save()
    }

    pub fn set_font(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(HairReportError::FileNotFound(path.display().to_string()));
        }
        self.font_path = Some(path);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hair_report_common::api::DEV_API_URL;

    #[test]
    fn test_default_timeout() {
        assert_eq!(Config::default().timeout_seconds, 30);
    }

    #[test]
    fn test_base_url_precedence() {
        let config = Config {
            base_url: Some("http://from-config:8000".into()),
            ..Default::default()
        };

        assert_eq!(
            config.resolve_base_url_with(Some("http://cli:1"), Some("http://env:2")),
            "http://cli:1"
        );
        assert_eq!(config.resolve_base_url_with(None, Some("http://env:2/")), "http://env:2");
        assert_eq!(config.resolve_base_url_with(None, None), "http://from-config:8000");
    }

    #[test]
    fn test_base_url_fallback() {
        let config = Config::default();
        if cfg!(debug_assertions) {
            assert_eq!(config.resolve_base_url_with(None, Some("  ")), DEV_API_URL);
        }
    }

    #[test]
    fn test_missing_font() {
        let config = Config::default();
        assert!(matches!(config.font_for_pdf(None), Err(HairReportError::MissingFont)));
        assert_eq!(
            config.font_for_pdf(Some(Path::new("/fonts/a.ttf"))).unwrap(),
            PathBuf::from("/fonts/a.ttf")
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"font_path": "/fonts/NanumGothic.ttf"}"#).unwrap();
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.base_url.is_none());
    }
}
