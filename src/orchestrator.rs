use crate::ai::prompt_template::{PromptTemplate, DEFAULT_MAX_TOKENS};
use crate::ai::response_processor::ResponseProcessor;
use crate::ai::ReasoningBackend;
use crate::error::Result;
use crate::plan::{CommandPlan, Objective};
use std::sync::Arc;

/// objective → 프롬프트 → backend → 검증된 계획
///
/// 요청 사이에 공유하는 가변 상태가 없으므로 `Arc`로 감싸 여러 요청에서 동시에 사용할 수 있습니다.
/// 요청마다 backend를 정확히 한 번 호출하며 재시도하지 않습니다.
pub struct Orchestrator {
    backend: Arc<dyn ReasoningBackend>,
    max_tokens: u32,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn ReasoningBackend>) -> Self {
        Self {
            backend,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// 문자열 objective를 검증한 뒤 계획 생성
    ///
    /// 비어 있으면 backend를 호출하지 않고 `InvalidInput`을 반환합니다.
    pub async fn orchestrate(&self, objective: &str) -> Result<CommandPlan> {
        let objective = Objective::new(objective)?;
        self.orchestrate_objective(&objective).await
    }

    pub async fn orchestrate_objective(&self, objective: &Objective) -> Result<CommandPlan> {
        let request = PromptTemplate::build_with_limit(objective, self.max_tokens);

        tracing::info!(backend = self.backend.name(), "requesting command plan");

        let reply = self.backend.complete(&request).await.map_err(|e| {
            tracing::warn!(error = %e, "reasoning backend call failed");
            e
        })?;

        let plan = ResponseProcessor::resolve(reply.text()).map_err(|e| {
            tracing::warn!(kind = e.kind(), error = %e, "backend reply rejected");
            e
        })?;

        tracing::info!(
            commands = plan.commands().len(),
            warnings = plan.warnings().len(),
            "command plan resolved"
        );

        Ok(plan)
    }
}
