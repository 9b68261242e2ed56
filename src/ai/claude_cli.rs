use crate::ai::prompt_template::PromptRequest;
use crate::ai::{BackendReply, ReasoningBackend};
use crate::error::{OrchestratorError, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// 로컬에 설치된 `claude` CLI를 통해 요청하는 backend
///
/// CLI는 시스템 프롬프트를 따로 받지 않으므로 시스템 지시문과 user turn을 하나로 합쳐 전달합니다.
/// 출력 길이 상한은 CLI 쪽 설정을 따릅니다.
pub struct ClaudeCliBackend {
    program: String,
}

impl ClaudeCliBackend {
    pub fn new() -> Self {
        Self::with_program("claude")
    }

    /// 다른 실행 파일 경로 사용 (테스트, 비표준 설치 경로)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn combined_prompt(request: &PromptRequest) -> String {
        format!("{}\n\n{}", request.system, request.user)
    }
}

impl Default for ClaudeCliBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReasoningBackend for ClaudeCliBackend {
    fn name(&self) -> &str {
        "claude-cli"
    }

    async fn complete(&self, request: &PromptRequest) -> Result<BackendReply> {
        tracing::debug!(program = %self.program, "invoking claude CLI");

        let output = Command::new(&self.program)
            .arg("-p")
            .arg(Self::combined_prompt(request))
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                OrchestratorError::BackendFailure(format!(
                    "Failed to run '{}': {}\n\
                     Install the Claude CLI: npm install -g @anthropic-ai/claude-code",
                    self.program, e
                ))
            })?;

        if !output.status.success() {
            let error = String::from_utf8_lossy(&output.stderr);
            return Err(OrchestratorError::BackendFailure(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                error.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(BackendReply::from_text(stdout))
    }
}
