use crate::error::OrchestratorError;
use serde::{Deserialize, Serialize};

/// 잘못된 objective에 대한 고정 메시지
pub const INVALID_OBJECTIVE: &str = "Invalid objective provided";

/// backend/파싱 실패에 대한 고정 메시지
pub const PROCESSING_FAILED: &str = "Failed to process request";

/// `POST /api/orchestrate` 본문
///
/// `objective`가 문자열이 아닌 경우를 직접 구분하기 위해 `serde_json::Value`로 받습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct OrchestrateRequest {
    #[serde(default)]
    pub objective: serde_json::Value,
}

impl OrchestrateRequest {
    /// 본문 바이트에서 objective 문자열 추출
    ///
    /// 본문이 JSON 객체가 아니거나, 필드가 없거나, 문자열이 아니면 `InvalidInput`입니다.
    pub fn objective_from_body(body: &[u8]) -> Result<String, OrchestratorError> {
        let request: OrchestrateRequest = serde_json::from_slice(body)
            .map_err(|e| OrchestratorError::InvalidInput(format!("request body: {}", e)))?;

        match request.objective {
            serde_json::Value::String(objective) => Ok(objective),
            serde_json::Value::Null => Err(OrchestratorError::InvalidInput(
                "missing field `objective`".to_string(),
            )),
            _ => Err(OrchestratorError::InvalidInput(
                "`objective` must be a string".to_string(),
            )),
        }
    }
}

/// 실패 응답 본문
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ErrorResponse {
    /// 400: objective 누락/오류 (상세 정보 없음)
    pub fn invalid_objective() -> Self {
        Self {
            error: INVALID_OBJECTIVE.to_string(),
            details: None,
            kind: None,
        }
    }

    /// 500: backend/파싱/스키마 실패
    pub fn processing_failed(err: &OrchestratorError) -> Self {
        Self {
            error: PROCESSING_FAILED.to_string(),
            details: Some(err.to_string()),
            kind: Some(err.kind().to_string()),
        }
    }
}

/// `GET /api/health` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub uptime_seconds: u64,
}
