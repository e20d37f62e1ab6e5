// Dataset domain routes
// 데이터셋 도메인 라우터
use axum::{routing::{get, post}, Router};
use crate::domains::dataset::handlers::dataset_handler;
use crate::shared::services::AppState;

/// Create dataset router
/// 데이터셋 라우터 생성
pub fn create_dataset_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dataset_handler::list_datasets))
        .route("/:dataset_id", get(dataset_handler::get_dataset))
        .route("/:dataset_id/download", post(dataset_handler::download_dataset))
}
