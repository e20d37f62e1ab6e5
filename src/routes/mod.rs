// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::{routing::get, Json, Router};
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::ai::routes::create_ai_router;
use crate::domains::auth::routes::create_auth_router;
use crate::domains::dataset::routes::create_dataset_router;
use crate::domains::payment::routes::create_payment_router;
use crate::domains::search::routes::create_search_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", create_auth_router())
        .nest("/api/search", create_search_router())
        .nest("/api/dataset", create_dataset_router())
        .nest("/api/payment", create_payment_router())
        .nest("/api/ai", create_ai_router())
}

/// 헬스 체크 (liveness)
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}
