#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use termorch::ai::prompt_template::PromptRequest;
use termorch::ai::{BackendReply, ReasoningBackend};
use termorch::{OrchestratorError, Result};

/// 고정 응답을 돌려주고 호출 횟수와 마지막 요청을 기록하는 backend
pub struct ScriptedBackend {
    reply: std::result::Result<String, String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<PromptRequest>>,
}

impl ScriptedBackend {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<PromptRequest> {
        self.last_request.lock().unwrap().clone()
    }

    pub fn last_user_turn(&self) -> Option<String> {
        self.last_request().map(|request| request.user)
    }
}

#[async_trait]
impl ReasoningBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &PromptRequest) -> Result<BackendReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.reply {
            Ok(text) => Ok(BackendReply::from_text(text.clone())),
            Err(message) => Err(OrchestratorError::BackendFailure(message.clone())),
        }
    }
}

pub const FIND_PLAN: &str = r#"{"reasoning":"Use find with size filter","commands":[{"command":"find . -size +100M","comment":"Finds files over 100MB","safety":"safe"}],"dependencies":[],"warnings":[]}"#;
