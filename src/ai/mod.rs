pub mod claude;
pub mod claude_cli;
pub mod factory;
pub mod prompt_template;
pub mod response_processor;

use crate::error::Result;
use async_trait::async_trait;
use prompt_template::PromptRequest;
use serde::Deserialize;

/// backend 응답의 content block
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyBlock {
    Text { text: String },
    /// tool_use 등 텍스트가 아닌 block
    #[serde(other)]
    Other,
}

/// reasoning backend의 원본 응답
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BackendReply {
    pub content: Vec<ReplyBlock>,
}

impl BackendReply {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ReplyBlock::Text { text: text.into() }],
        }
    }

    /// 첫 번째 block이 텍스트면 그 내용, 아니면 빈 문자열
    pub fn text(&self) -> &str {
        match self.content.first() {
            Some(ReplyBlock::Text { text }) => text,
            _ => "",
        }
    }
}

/// Reasoning backend trait for extensible LLM integration
#[async_trait]
pub trait ReasoningBackend: Send + Sync {
    /// Backend name (e.g., "anthropic", "claude-cli")
    fn name(&self) -> &str;

    /// Send a single request and wait for the reply. No retries.
    async fn complete(&self, request: &PromptRequest) -> Result<BackendReply>;
}
