// Payment domain routes
// 결제 도메인 라우터
use axum::{routing::{get, post}, Router};
use crate::domains::payment::handlers::payment_handler;
use crate::shared::services::AppState;

/// Create payment router
/// 결제 라우터 생성
///
/// /callback은 게이트웨이가 호출하므로 인증 없이 열려 있다
/// (대신 핸들러에서 서명을 검증한다).
pub fn create_payment_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(payment_handler::create_transaction))
        .route("/callback", post(payment_handler::payment_callback))
        .route("/:transaction_id", get(payment_handler::get_transaction_status))
}
