use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use uuid::Uuid;

/// 데이터셋 관련 에러
/// Dataset-related errors
#[derive(Error, Debug)]
pub enum DatasetError {
    /// 데이터셋을 찾을 수 없음
    /// Dataset not found
    #[error("Dataset not found: id={id}")]
    DatasetNotFound { id: Uuid },

    /// 유료 데이터셋인데 결제된 트랜잭션이 없음
    /// Paid dataset without a PAID transaction
    #[error("Payment required for dataset: id={id}")]
    PaymentRequired { id: Uuid },

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// DatasetError를 HTTP 응답으로 변환
impl From<DatasetError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: DatasetError) -> Self {
        let (status, message) = match &err {
            DatasetError::DatasetNotFound { .. } => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            DatasetError::PaymentRequired { .. } => {
                (StatusCode::PAYMENT_REQUIRED, err.to_string())
            }
            DatasetError::DatabaseError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(json!({ "error": message })))
    }
}
