use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// AI 생성 관련 에러
/// AI generation errors
#[derive(Error, Debug)]
pub enum AiError {
    /// 요청 필드 누락/잘못됨
    /// Missing or invalid request fields
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// AI 서비스 호출 실패 (타임아웃 포함)
    /// AI service call failed (including timeout)
    #[error("AI service error: {0}")]
    AiServiceError(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// AiError를 HTTP 응답으로 변환
impl From<AiError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AiError) -> Self {
        let (status, message) = match &err {
            AiError::ValidationError(_) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AiError::AiServiceError(_) => {
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            AiError::DatabaseError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(json!({ "error": message })))
    }
}
