// AI domain routes
// AI 도메인 라우터
use axum::{routing::post, Router};
use crate::domains::ai::handlers::ai_handler;
use crate::shared::services::AppState;

/// Create AI router
/// AI 라우터 생성
pub fn create_ai_router() -> Router<AppState> {
    Router::new()
        .route("/generate-title", post(ai_handler::generate_title))
        .route("/generate-outline", post(ai_handler::generate_outline))
        .route("/embedding", post(ai_handler::embedding))
}
