use crate::domains::payment::models::notification::PaymentNotification;
use crate::domains::payment::models::transaction::{
    CreateTransactionRequest, CreateTransactionResponse, TransactionStatusResponse,
};
use crate::domains::payment::services::NotificationOutcome;
use crate::shared::errors::PaymentError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

/// 트랜잭션 생성 핸들러
/// Create transaction handler
///
/// 게이트웨이에서 결제 토큰을 받아온 뒤 PENDING 트랜잭션을 저장합니다.
/// 게이트웨이 호출이 실패하면 아무것도 저장되지 않습니다.
#[utoipa::path(
    post,
    path = "/api/payment/create",
    request_body = CreateTransactionRequest,
    responses(
        (status = 200, description = "Transaction created, payment token issued", body = CreateTransactionResponse),
        (status = 400, description = "Invalid amount or missing item"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found"),
        (status = 502, description = "Payment gateway unavailable"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Payment"
)]
pub async fn create_transaction(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<Json<CreateTransactionResponse>, (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비즈니스 로직)
    let response = app_state
        .payment_state
        .payment_service
        .create_transaction(authenticated_user.user_id, request)
        .await
        .map_err(|e: PaymentError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

/// 결제 웹훅 핸들러
/// Payment notification (webhook) handler
///
/// 게이트웨이가 호출하므로 인증 헤더가 없습니다. 대신 페이로드의
/// 서명(SHA-512)을 검증합니다. 모르는 주문은 200으로 응답해
/// 게이트웨이의 재전송을 멈춥니다.
#[utoipa::path(
    post,
    path = "/api/payment/callback",
    request_body = PaymentNotification,
    responses(
        (status = 200, description = "Notification processed (or acknowledged and ignored)"),
        (status = 400, description = "Malformed notification payload"),
        (status = 403, description = "Signature verification failed"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payment"
)]
pub async fn payment_callback(
    State(app_state): State<AppState>,
    Json(notification): Json<PaymentNotification>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let outcome = app_state
        .payment_state
        .payment_service
        .handle_notification(notification)
        .await
        .map_err(|e: PaymentError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    // 모르는 주문도 200 (게이트웨이 재전송 방지), 본문으로만 구분
    let body = match outcome {
        NotificationOutcome::Applied(_) | NotificationOutcome::Unchanged(_) => {
            serde_json::json!({ "status": "ok" })
        }
        NotificationOutcome::UnknownOrder => serde_json::json!({ "status": "ignored" }),
    };

    Ok(Json(body))
}

/// 트랜잭션 상태 조회 핸들러
/// Transaction status handler
///
/// 트랜잭션 ID 자체가 추측 불가능한 식별자라 별도 인증은 없다
/// (프론트엔드 결제 폴링용).
#[utoipa::path(
    get,
    path = "/api/payment/{transactionId}",
    params(
        ("transactionId" = Uuid, Path, description = "Transaction ID to look up")
    ),
    responses(
        (status = 200, description = "Transaction status retrieved successfully", body = TransactionStatusResponse),
        (status = 404, description = "Transaction not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Payment"
)]
pub async fn get_transaction_status(
    State(app_state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> Result<Json<TransactionStatusResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .payment_state
        .payment_service
        .get_status(transaction_id)
        .await
        .map_err(|e: PaymentError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}
