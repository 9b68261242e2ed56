use crate::error::{OrchestratorError, Result};
use dialoguer::Input;

/// objective를 대화형으로 입력받음
///
/// 터미널이 없는 등 입력 자체가 실패하면 `IoError`입니다 (objective 검증은 호출자가 함).
pub fn read_objective() -> Result<String> {
    Input::<String>::new()
        .with_prompt("Objective")
        .interact_text()
        .map_err(prompt_error)
}

fn prompt_error(err: dialoguer::Error) -> OrchestratorError {
    let dialoguer::Error::IO(io_err) = err;
    OrchestratorError::IoError(io_err)
}
