use crate::plan::{Objective, SafetyLevel};
use once_cell::sync::Lazy;

/// 출력 길이 기본 상한
pub const DEFAULT_MAX_TOKENS: u32 = 2048;

/// user turn에 붙는 고정 실행 환경 설명
pub const ENVIRONMENT_DESCRIPTOR: &str = "OS: Linux (assume GNU tools available)";

/// 모든 요청에서 공유하는 시스템 프롬프트 (프로세스당 한 번만 생성)
static SYSTEM_PROMPT: Lazy<String> = Lazy::new(build_system_prompt);

fn build_system_prompt() -> String {
    let safety_union = SafetyLevel::ALL
        .iter()
        .map(|level| format!("\"{}\"", level))
        .collect::<Vec<_>>()
        .join(" | ");

    let safety_rules = SafetyLevel::ALL
        .iter()
        .map(|level| format!("- \"{}\": {}", level, level.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are the \"Terminal Orchestrator,\" an autonomous CLI agent operating within a UNIX-based shell environment (Bash/Zsh). \
         Your goal is to translate high-level natural language objectives into precise, executable shell commands.\n\n\
         OPERATIONAL CONSTRAINTS:\n\
         1. Safety First: Never generate commands that destroy data (like rm, dd, or overwriting files) without a preceding explicit warning and a prompt for user confirmation.\n\
         2. Efficiency: Prefer built-in tools (grep, sed, awk, find) over installing new packages unless absolutely necessary.\n\
         3. Idempotency: Where possible, write commands that are safe to run multiple times (e.g., checking if a directory exists before creating it).\n\
         4. No Hallucinations: Do not invent flags or arguments. Use standard POSIX compliance or specific GNU/BSD flags based on the user's detected OS.\n\n\
         RESPONSE FORMAT:\n\
         You must respond with a JSON object containing:\n\
         {{\n\
         \x20 \"reasoning\": \"Brief analysis of the request, breaking down the logic and specifying dependencies\",\n\
         \x20 \"commands\": [\n\
         \x20   {{\n\
         \x20     \"command\": \"the actual shell command\",\n\
         \x20     \"comment\": \"explanation of what this command does\",\n\
         \x20     \"safety\": {safety_union}\n\
         \x20   }}\n\
         \x20 ],\n\
         \x20 \"dependencies\": [\"list of required tools/packages\"],\n\
         \x20 \"warnings\": [\"any safety warnings or confirmation requirements\"]\n\
         }}\n\n\
         Safety levels:\n\
         {safety_rules}\n\n\
         Analyze the user's objective and provide the complete JSON response."
    )
}

/// reasoning backend로 보내는 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// 고정 시스템 지시문
    pub system: &'static str,
    /// objective와 실행 환경이 들어간 user turn
    pub user: String,
    /// 출력 길이 상한
    pub max_tokens: u32,
}

/// 프롬프트 템플릿 생성기
///
/// 시스템 지시문은 모든 요청에서 동일하고, user turn만 objective에 따라 달라집니다.
/// 입력 외의 상태에 의존하지 않는 순수 함수입니다.
pub struct PromptTemplate;

impl PromptTemplate {
    /// 고정 시스템 프롬프트
    pub fn system_prompt() -> &'static str {
        SYSTEM_PROMPT.as_str()
    }

    /// objective를 그대로 포함하는 user turn
    pub fn user_turn(objective: &Objective) -> String {
        format!(
            "User objective: {}\n\n{}\n\nProvide the JSON response.",
            objective.as_str(),
            ENVIRONMENT_DESCRIPTOR
        )
    }

    /// 기본 출력 길이 상한으로 요청 생성
    ///
    /// # Examples
    /// ```
    /// use termorch::ai::prompt_template::PromptTemplate;
    /// use termorch::plan::Objective;
    ///
    /// let objective = Objective::new("list files larger than 100MB").unwrap();
    /// let request = PromptTemplate::build(&objective);
    /// assert!(request.user.contains("list files larger than 100MB"));
    /// ```
    pub fn build(objective: &Objective) -> PromptRequest {
        Self::build_with_limit(objective, DEFAULT_MAX_TOKENS)
    }

    pub fn build_with_limit(objective: &Objective, max_tokens: u32) -> PromptRequest {
        PromptRequest {
            system: Self::system_prompt(),
            user: Self::user_turn(objective),
            max_tokens,
        }
    }
}
