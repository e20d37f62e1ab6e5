// Search domain routes
// 검색 도메인 라우터
use axum::{routing::{get, post}, Router};
use crate::domains::search::handlers::search_handler;
use crate::shared::services::AppState;

/// Create search router
/// 검색 라우터 생성
pub fn create_search_router() -> Router<AppState> {
    Router::new()
        .route("/", post(search_handler::search_theses))
        .route("/recommend-method", post(search_handler::recommend_method))
        .route("/:thesis_id", get(search_handler::get_thesis_detail))
        .route("/:thesis_id/related", get(search_handler::get_related_theses))
}
