mod common;

use common::{ScriptedBackend, FIND_PLAN};
use termorch::ai::prompt_template::PromptTemplate;
use termorch::{Orchestrator, OrchestratorError, SafetyLevel};

#[tokio::test]
async fn test_end_to_end_find_plan() {
    let backend = ScriptedBackend::replying(FIND_PLAN);
    let orchestrator = Orchestrator::new(backend.clone());

    let plan = orchestrator
        .orchestrate("list files larger than 100MB")
        .await
        .unwrap();

    assert_eq!(plan.commands().len(), 1);
    assert_eq!(plan.commands()[0].safety(), SafetyLevel::Safe);
    assert_eq!(backend.calls(), 1);

    let request = backend.last_request().unwrap();
    assert!(request.user.contains("list files larger than 100MB"));
    assert_eq!(request.system, PromptTemplate::system_prompt());
}

#[tokio::test]
async fn test_empty_objective_never_calls_backend() {
    let backend = ScriptedBackend::replying(FIND_PLAN);
    let orchestrator = Orchestrator::new(backend.clone());

    let result = orchestrator.orchestrate("").await;
    assert!(matches!(result, Err(OrchestratorError::InvalidInput(_))));
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_backend_failure_is_not_retried() {
    let backend = ScriptedBackend::failing("529 overloaded");
    let orchestrator = Orchestrator::new(backend.clone());

    let err = orchestrator.orchestrate("git 상태").await.unwrap_err();
    assert!(matches!(err, OrchestratorError::BackendFailure(_)));
    assert!(err.to_string().contains("529 overloaded"));
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_prose_reply_is_malformed() {
    let backend = ScriptedBackend::replying("I'm sorry, I can't help with that.");
    let orchestrator = Orchestrator::new(backend.clone());

    let result = orchestrator.orchestrate("delete everything").await;
    assert!(matches!(result, Err(OrchestratorError::MalformedResponse(_))));
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_unknown_safety_is_schema_violation() {
    let backend = ScriptedBackend::replying(
        r#"```json
{"reasoning":"r","commands":[{"command":"rm -rf build","comment":"c","safety":"critical"}],"dependencies":[],"warnings":[]}
```"#,
    );
    let orchestrator = Orchestrator::new(backend);

    let result = orchestrator.orchestrate("clean build").await;
    assert!(matches!(result, Err(OrchestratorError::SchemaViolation(_))));
}

#[tokio::test]
async fn test_max_tokens_is_forwarded() {
    let backend = ScriptedBackend::replying(FIND_PLAN);
    let orchestrator = Orchestrator::new(backend.clone()).with_max_tokens(777);

    orchestrator.orchestrate("date").await.unwrap();
    let request = backend.last_request().unwrap();
    assert_eq!(request.max_tokens, 777);
}

#[tokio::test]
async fn test_same_reply_gives_same_plan() {
    let backend = ScriptedBackend::replying(FIND_PLAN);
    let orchestrator = Orchestrator::new(backend.clone());

    let first = orchestrator.orchestrate("a").await.unwrap();
    let second = orchestrator.orchestrate("a").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(backend.calls(), 2);
}
