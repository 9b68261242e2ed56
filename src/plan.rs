use crate::error::{OrchestratorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// 사용자가 입력한 자연어 목표
///
/// 생성 시점에 검증되므로 `Objective` 값은 항상 비어 있지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objective(String);

impl Objective {
    /// 빈 문자열은 `InvalidInput`으로 거부 (공백만 있는 문자열은 그대로 허용)
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(OrchestratorError::InvalidInput(
                "objective must be a non-empty string".to_string(),
            ));
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 명령어 안전 등급 (닫힌 집합, 선언 순서대로 위험도가 높아짐)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    /// 읽기 전용이거나 새 파일/디렉토리만 생성
    Safe,
    /// 기존 파일이나 시스템 상태를 변경
    Warning,
    /// 데이터 삭제나 시스템 장애를 일으킬 수 있음
    Dangerous,
}

impl SafetyLevel {
    pub const ALL: [SafetyLevel; 3] = [SafetyLevel::Safe, SafetyLevel::Warning, SafetyLevel::Dangerous];

    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "safe",
            SafetyLevel::Warning => "warning",
            SafetyLevel::Dangerous => "dangerous",
        }
    }

    /// 시스템 프롬프트에 들어가는 등급 설명
    pub fn description(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "Command is read-only or creates files/directories",
            SafetyLevel::Warning => "Command modifies existing files or system state",
            SafetyLevel::Dangerous => "Command could delete data or cause system issues",
        }
    }
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 실행 계획의 단일 명령어
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandStep {
    command: String,
    comment: String,
    safety: SafetyLevel,
}

impl CommandStep {
    pub fn new(command: impl Into<String>, comment: impl Into<String>, safety: SafetyLevel) -> Self {
        Self {
            command: command.into(),
            comment: comment.into(),
            safety,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn safety(&self) -> SafetyLevel {
        self.safety
    }
}

/// backend 응답에서 검증된 명령어 계획
///
/// 네 필드 모두 필수입니다. 필드가 없거나 타입이 다르면 역직렬화가 실패하며,
/// 누락된 값을 기본값으로 채우지 않습니다. 생성 이후에는 수정할 수 없습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandPlan {
    reasoning: String,
    commands: Vec<CommandStep>,
    dependencies: Vec<String>,
    warnings: Vec<String>,
}

impl CommandPlan {
    pub fn new(
        reasoning: impl Into<String>,
        commands: Vec<CommandStep>,
        dependencies: Vec<String>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            reasoning: reasoning.into(),
            commands,
            dependencies,
            warnings,
        }
    }

    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    /// 실행 순서대로 정렬된 명령어
    pub fn commands(&self) -> &[CommandStep] {
        &self.commands
    }

    /// backend가 보낸 그대로의 의존성 목록
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// 중복을 제거한 의존성 집합 (순서 무관)
    pub fn unique_dependencies(&self) -> BTreeSet<&str> {
        self.dependencies.iter().map(String::as_str).collect()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// 명령어가 없으면 "조치 불필요"를 의미
    pub fn is_no_op(&self) -> bool {
        self.commands.is_empty()
    }

    /// 계획에서 가장 높은 안전 등급
    pub fn highest_safety(&self) -> Option<SafetyLevel> {
        self.commands.iter().map(|c| c.safety).max()
    }
}
