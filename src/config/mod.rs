use crate::ai::prompt_template::DEFAULT_MAX_TOKENS;
use crate::error::{OrchestratorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// termorch 사용자 설정
///
/// 설정 파일은 ~/.termorch/config.toml에 저장됩니다.
/// API 키는 환경 변수로만 받으며 파일에 기록하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 기본 reasoning backend (anthropic, claude-cli)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Anthropic 모델 이름
    #[serde(default = "default_model")]
    pub model: String,

    /// 출력 길이 상한
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Anthropic API 주소
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// HTTP 서버 주소
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// backend 요청 타임아웃 (초)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_provider() -> String {
    "anthropic".to_string()
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_api_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_request_timeout() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            api_base_url: default_api_base_url(),
            bind_address: default_bind_address(),
            request_timeout_secs: default_request_timeout(),
            api_key: None,
        }
    }
}

impl Config {
    /// 설정 디렉토리 경로
    fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            OrchestratorError::ConfigError("Could not find home directory".to_string())
        })?;
        Ok(home.join(".termorch"))
    }

    /// 설정 파일 경로 가져오기
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// 설정 파일과 환경 변수를 합쳐서 로드
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// 지정한 경로에서 로드 (없으면 기본값 사용)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            OrchestratorError::ConfigError(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// 환경 변수 값으로 덮어쓰기
    ///
    /// `lookup`은 변수 이름을 받아 값을 돌려주는 함수입니다 (보통 `std::env::var`).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("ANTHROPIC_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(model) = get("ANTHROPIC_MODEL") {
            self.model = model;
        }
        if let Some(url) = get("ANTHROPIC_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(provider) = get("TERMORCH_PROVIDER") {
            self.provider = provider;
        }
        if let Some(bind) = get("TERMORCH_BIND") {
            self.bind_address = bind;
        }
    }

    /// 설정을 기본 위치에 저장
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// 설정을 지정한 경로에 저장
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| {
            OrchestratorError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, toml_string)?;
        Ok(())
    }

    /// 설정 파일 초기화 (기본값으로)
    pub fn init() -> Result<PathBuf> {
        Self::default().save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider, "anthropic");
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.bind_address, "127.0.0.1:3000");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            provider = "claude-cli"
            model = "claude-3-opus"
            max_tokens = 1024
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider, "claude-cli");
        assert_eq!(config.model, "claude-3-opus");
        assert_eq!(config.max_tokens, 1024);
        // 빠진 항목은 기본값
        assert_eq!(config.api_base_url, "https://api.anthropic.com");
        assert_eq!(config.request_timeout_secs, 120);
    }

    #[test]
    fn test_api_key_is_never_serialized() {
        let config = Config {
            api_key: Some("sk-secret".to_string()),
            ..Config::default()
        };
        let toml_string = toml::to_string(&config).unwrap();
        assert!(!toml_string.contains("sk-secret"));
        assert!(toml_string.contains("provider"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.provider, "anthropic");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            model: "claude-3-haiku".to_string(),
            bind_address: "0.0.0.0:8080".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.model, "claude-3-haiku");
        assert_eq!(loaded.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_tokens = \"lots\"").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(OrchestratorError::ConfigError(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ANTHROPIC_MODEL", "claude-3-opus"),
            ("TERMORCH_BIND", "0.0.0.0:9000"),
            ("TERMORCH_PROVIDER", ""),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "claude-3-opus");
        assert_eq!(config.bind_address, "0.0.0.0:9000");
        // 빈 값은 무시
        assert_eq!(config.provider, "anthropic");
    }
}
