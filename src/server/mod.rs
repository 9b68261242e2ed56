//! HTTP API server
//!
//! ```bash
//! termorch --serve
//!
//! curl -X POST http://127.0.0.1:3000/api/orchestrate \
//!   -H "Content-Type: application/json" \
//!   -d '{"objective": "list files larger than 100MB"}'
//!
//! curl http://127.0.0.1:3000/api/health
//! ```

pub mod protocol;

use crate::error::{OrchestratorError, Result};
use crate::orchestrator::Orchestrator;
use crate::plan::CommandPlan;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use protocol::{ErrorResponse, HealthResponse, OrchestrateRequest};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    orchestrator: Arc<Orchestrator>,
    start_time: Instant,
}

impl AppState {
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        Self {
            orchestrator,
            start_time: Instant::now(),
        }
    }
}

/// API 라우터 (CORS, 요청 tracing 포함)
pub fn router(orchestrator: Arc<Orchestrator>) -> Router {
    Router::new()
        .route("/api/orchestrate", post(orchestrate))
        .route("/api/health", get(health))
        .with_state(AppState::new(orchestrator))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// POST /api/orchestrate
async fn orchestrate(State(state): State<AppState>, body: Bytes) -> Response {
    let result = match OrchestrateRequest::objective_from_body(&body) {
        Ok(objective) => state.orchestrator.orchestrate(&objective).await,
        Err(e) => Err(e),
    };

    plan_response(result)
}

fn plan_response(result: Result<CommandPlan>) -> Response {
    match result {
        Ok(plan) => (StatusCode::OK, Json(plan)).into_response(),
        Err(OrchestratorError::InvalidInput(reason)) => {
            tracing::debug!(%reason, "rejected objective");
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::invalid_objective())).into_response()
        }
        Err(e) => {
            tracing::error!(kind = e.kind(), error = %e, "orchestration failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::processing_failed(&e)),
            )
                .into_response()
        }
    }
}

/// GET /api/health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        backend: state.orchestrator.backend_name().to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// HTTP 서버
pub struct OrchestratorServer {
    bind_address: String,
    orchestrator: Arc<Orchestrator>,
}

impl OrchestratorServer {
    pub fn new(bind_address: impl Into<String>, orchestrator: Arc<Orchestrator>) -> Self {
        Self {
            bind_address: bind_address.into(),
            orchestrator,
        }
    }

    /// 서버 실행 (Ctrl-C까지 blocking)
    pub async fn start(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.bind_address)
            .await
            .map_err(|e| {
                OrchestratorError::ConfigError(format!(
                    "Failed to bind {}: {}",
                    self.bind_address, e
                ))
            })?;

        let local_addr = listener.local_addr()?;
        tracing::info!(
            address = %local_addr,
            backend = self.orchestrator.backend_name(),
            "server listening"
        );

        axum::serve(listener, router(self.orchestrator))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
