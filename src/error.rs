use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// objective가 없거나 비어 있음 (backend 호출 전에 거부)
    #[error("Invalid objective provided: {0}")]
    InvalidInput(String),

    /// backend 호출 자체의 실패 (네트워크, 인증, 할당량 등)
    #[error("Reasoning backend failed: {0}")]
    BackendFailure(String),

    /// fence 제거 후에도 JSON으로 파싱할 수 없는 응답
    #[error("Backend response is not valid JSON: {0}")]
    MalformedResponse(String),

    /// JSON이지만 command plan 형태가 아닌 응답
    #[error("Backend response does not match the command plan schema: {0}")]
    SchemaViolation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl OrchestratorError {
    /// 호출자가 실패 종류를 구분할 수 있도록 노출하는 고정 태그
    pub fn kind(&self) -> &'static str {
        match self {
            OrchestratorError::InvalidInput(_) => "invalid_input",
            OrchestratorError::BackendFailure(_) => "backend_failure",
            OrchestratorError::MalformedResponse(_) => "malformed_response",
            OrchestratorError::SchemaViolation(_) => "schema_violation",
            OrchestratorError::ConfigError(_) => "config_error",
            OrchestratorError::IoError(_) => "io_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;
