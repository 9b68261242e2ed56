use crate::error::{OrchestratorError, Result};
use crate::plan::CommandPlan;

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// backend 응답 문자열에서 JSON 후보 부분 문자열을 추출
///
/// 응답 전체가 하나의 JSON 객체면 그대로 사용합니다 (문자열 값 안의 백틱은 fence가 아님).
/// 그렇지 않으면 백틱 세 개짜리 fence 쌍을 앞에서부터 살펴서, 여는 fence(선택적으로 `json` 태그)
/// 뒤에 공백과 `{`가 오고 짝이 맞는 `}` 뒤에 공백과 닫는 fence가 오는 첫 블록의 객체를 반환합니다.
/// JSON이 아닌 블록은 닫는 fence까지 건너뛰며, 해당하는 블록이 없으면 원본 전체를 반환합니다.
pub fn extract_json_candidate(raw: &str) -> &str {
    let whole = raw.trim();
    if whole.starts_with('{') && balanced_object(whole).map(str::len) == Some(whole.len()) {
        return whole;
    }

    let mut search_from = 0;

    while let Some(offset) = raw[search_from..].find(FENCE) {
        let after_fence = search_from + offset + FENCE.len();
        let body = strip_json_tag(&raw[after_fence..]);
        let trimmed = body.trim_start();
        let body_start = raw.len() - trimmed.len();

        let mut block_rest = after_fence;
        if trimmed.starts_with('{') {
            if let Some(object) = balanced_object(trimmed) {
                if trimmed[object.len()..].trim_start().starts_with(FENCE) {
                    return object;
                }
                block_rest = body_start + object.len();
            }
        }

        // 이 블록의 닫는 fence 다음부터 다시 찾음
        match raw[block_rest..].find(FENCE) {
            Some(close) => search_from = block_rest + close + FENCE.len(),
            None => break,
        }
    }

    raw
}

fn strip_json_tag(text: &str) -> &str {
    match text.get(..JSON_TAG.len()) {
        Some(tag) if tag.eq_ignore_ascii_case(JSON_TAG) => &text[JSON_TAG.len()..],
        _ => text,
    }
}

/// `{`로 시작하는 텍스트에서 짝이 맞는 객체 부분만 반환 (짝이 안 맞으면 None)
fn balanced_object(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[..=idx]);
                }
            }
            _ => {}
        }
    }

    None
}

/// backend 응답을 검증된 `CommandPlan`으로 변환
pub struct ResponseProcessor;

impl ResponseProcessor {
    /// 원본 응답을 계획으로 변환
    ///
    /// JSON 파싱 실패는 `MalformedResponse`, 형태 불일치는 `SchemaViolation`입니다.
    /// 일부 명령어만 버리는 식의 복구는 하지 않으며 결과를 정규화하지도 않습니다.
    ///
    /// # Examples
    /// ```
    /// use termorch::ai::response_processor::ResponseProcessor;
    ///
    /// let raw = "```json\n{\"reasoning\":\"r\",\"commands\":[],\"dependencies\":[],\"warnings\":[]}\n```";
    /// let plan = ResponseProcessor::resolve(raw).unwrap();
    /// assert!(plan.commands().is_empty());
    /// ```
    pub fn resolve(raw: &str) -> Result<CommandPlan> {
        let candidate = extract_json_candidate(raw);

        let value: serde_json::Value = serde_json::from_str(candidate)
            .map_err(|e| OrchestratorError::MalformedResponse(e.to_string()))?;

        ensure_object_shape(&value)?;

        serde_json::from_value(value).map_err(|e| OrchestratorError::SchemaViolation(e.to_string()))
    }
}

/// serde는 구조체를 배열 형태로도 받아들이므로, 계획과 각 명령어가 객체인지 먼저 확인
fn ensure_object_shape(value: &serde_json::Value) -> Result<()> {
    let object = value.as_object().ok_or_else(|| {
        OrchestratorError::SchemaViolation("expected a JSON object at the top level".to_string())
    })?;

    if let Some(commands) = object.get("commands").and_then(|c| c.as_array()) {
        if let Some(index) = commands.iter().position(|step| !step.is_object()) {
            return Err(OrchestratorError::SchemaViolation(format!(
                "commands[{}] must be an object",
                index
            )));
        }
    }

    Ok(())
}
