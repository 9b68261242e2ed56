use crate::ai::{claude::ClaudeBackend, claude_cli::ClaudeCliBackend, ReasoningBackend};
use crate::config::Config;
use crate::error::{OrchestratorError, Result};
use std::sync::Arc;

/// Backend factory for creating reasoning backends based on the provider name
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a backend instance based on the provider name
    ///
    /// # Arguments
    /// * `provider_name` - The name of the provider (anthropic, claude-cli)
    /// * `config` - Loaded configuration (API key, model, timeouts)
    ///
    /// # Errors
    /// * Returns `OrchestratorError::ConfigError` if the provider name is unknown
    ///   or the provider is missing required settings
    pub fn create(provider_name: &str, config: &Config) -> Result<Arc<dyn ReasoningBackend>> {
        match provider_name.to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(Arc::new(ClaudeBackend::from_config(config)?)),
            "claude-cli" | "cli" => Ok(Arc::new(ClaudeCliBackend::new())),
            _ => Err(OrchestratorError::ConfigError(format!(
                "Unknown provider: {}\n\
                 Supported providers: {}",
                provider_name,
                Self::supported_providers().join(", ")
            ))),
        }
    }

    /// Get a list of all supported provider names
    pub fn supported_providers() -> Vec<&'static str> {
        vec!["anthropic", "claude-cli"]
    }

    /// Check if a provider name (or alias) is supported
    pub fn is_supported(provider_name: &str) -> bool {
        matches!(
            provider_name.to_lowercase().as_str(),
            "anthropic" | "claude" | "claude-cli" | "cli"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_key: Some("test-key".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_create_anthropic_backend() {
        let backend = ProviderFactory::create("anthropic", &config());
        assert!(backend.is_ok());
        assert_eq!(backend.unwrap().name(), "anthropic");

        let backend = ProviderFactory::create("claude", &config()).unwrap();
        assert_eq!(backend.name(), "anthropic");
    }

    #[test]
    fn test_create_cli_backend() {
        let backend = ProviderFactory::create("claude-cli", &config()).unwrap();
        assert_eq!(backend.name(), "claude-cli");
    }

    #[test]
    fn test_anthropic_without_key_fails() {
        let config = Config {
            api_key: None,
            ..Config::default()
        };
        assert!(ProviderFactory::create("anthropic", &config).is_err());
        // CLI backend는 API 키가 필요 없음
        assert!(ProviderFactory::create("claude-cli", &config).is_ok());
    }

    #[test]
    fn test_create_unknown_provider() {
        let result = ProviderFactory::create("gemini", &config());
        assert!(matches!(result, Err(OrchestratorError::ConfigError(_))));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(ProviderFactory::create("ANTHROPIC", &config()).is_ok());
        assert!(ProviderFactory::create("Claude-CLI", &config()).is_ok());
    }

    #[test]
    fn test_is_supported() {
        assert!(ProviderFactory::is_supported("anthropic"));
        assert!(ProviderFactory::is_supported("claude"));
        assert!(ProviderFactory::is_supported("cli"));
        assert!(!ProviderFactory::is_supported("codex"));
        assert_eq!(ProviderFactory::supported_providers().len(), 2);
    }
}
