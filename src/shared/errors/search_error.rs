use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use uuid::Uuid;

/// 검색 관련 에러
/// Search-related errors
#[derive(Error, Debug)]
pub enum SearchError {
    /// 검색어 누락
    /// Missing search query
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 논문을 찾을 수 없음
    /// Thesis not found
    #[error("Thesis not found: id={id}")]
    ThesisNotFound { id: Uuid },

    /// AI 서비스 호출 실패
    /// AI service call failed
    #[error("AI service error: {0}")]
    AiServiceError(String),

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// SearchError를 HTTP 응답으로 변환
impl From<SearchError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: SearchError) -> Self {
        let (status, message) = match &err {
            SearchError::ValidationError(_) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            SearchError::ThesisNotFound { .. } => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            SearchError::AiServiceError(_) => {
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            SearchError::DatabaseError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(json!({ "error": message })))
    }
}
