//! HTTP surface for the tutor API.
//!
//! One POST endpoint carries every action; axum's method router answers
//! other methods with 405 and an `Allow: POST` header. A health probe
//! rides alongside for deployment checks.

pub mod dto;
pub mod routes;
pub mod session;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tracing::info;
use tutor_application::{ConverseUseCase, GrammarUseCase, VocabularyUseCase};

/// Shared handler state: one use case per generated action.
///
/// Use cases are cheap handles over the injected generator; requests share
/// them read-only, so unbounded concurrent invocations need no locking.
pub struct AppState {
    pub conversation: ConverseUseCase,
    pub vocabulary: VocabularyUseCase,
    pub grammar: GrammarUseCase,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/language-tutor", post(routes::language_tutor))
        .route("/api/health", get(routes::health))
        .with_state(state)
}

pub async fn serve(bind: &str, state: Arc<AppState>) -> std::io::Result<()> {
    let router = build_router(state);

    info!("tutor API listening on http://{}", bind);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, router).await
}
