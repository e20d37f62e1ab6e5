use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use uuid::Uuid;

/// 결제 관련 에러
/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// 요청 필드 누락/잘못됨
    /// Missing or invalid request fields
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 사용자를 찾을 수 없음
    /// User not found
    #[error("User not found: id={id}")]
    UserNotFound { id: Uuid },

    /// 트랜잭션을 찾을 수 없음
    /// Transaction not found
    #[error("Transaction not found: id={id}")]
    TransactionNotFound { id: Uuid },

    /// 결제 게이트웨이 호출 실패 (타임아웃 포함)
    /// Payment gateway call failed (including timeout)
    #[error("Payment gateway error: {0}")]
    GatewayError(String),

    /// 웹훅 서명 검증 실패
    /// Webhook signature verification failed
    #[error("Invalid notification signature")]
    InvalidSignature,

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// PaymentError를 HTTP 응답으로 변환
impl From<PaymentError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: PaymentError) -> Self {
        let (status, message) = match &err {
            PaymentError::ValidationError(_) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            PaymentError::UserNotFound { .. } => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            PaymentError::TransactionNotFound { .. } => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            PaymentError::GatewayError(_) => {
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            PaymentError::InvalidSignature => {
                (StatusCode::FORBIDDEN, err.to_string())
            }
            PaymentError::DatabaseError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(json!({ "error": message })))
    }
}
