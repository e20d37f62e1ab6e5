use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use crate::shared::services::AppState;
use crate::shared::errors::AuthError;
use serde_json::json;
use uuid::Uuid;

/// 인증된 사용자 정보 (JWT 토큰에서 추출)
/// Authenticated user information (extracted from JWT token)
///
/// 핸들러 파라미터로 선언하면 Authorization: Bearer 헤더를 검증하고
/// 실패 시 401을 반환한다. `Option<AuthenticatedUser>`로 선언하면
/// 익명 요청도 허용된다 (검색처럼 로그인 여부만 기록하는 경우).
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더에서 토큰 추출
        let headers = &parts.headers;
        let auth_header = headers
            .get("Authorization")
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({ "error": "Missing authorization header" })),
                )
            })?
            .to_str()
            .map_err(|_| {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({ "error": "Invalid authorization header" })),
                )
            })?;

        // 2. "Bearer <token>" 형식 파싱
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    axum::Json(json!({
                        "error": "Invalid authorization format. Expected: 'Bearer <token>'"
                    })),
                )
            })?;

        // 3. JWT Service로 토큰 검증 (AppState에서 가져옴)
        let claims = state
            .auth_state
            .jwt_service
            .verify_access_token(token)
            .map_err(|e| {
                let status = match e {
                    AuthError::InvalidToken | AuthError::MissingToken => {
                        StatusCode::UNAUTHORIZED
                    }
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (
                    status,
                    axum::Json(json!({ "error": e.to_string() })),
                )
            })?;

        // 4. AuthenticatedUser 반환
        Ok(AuthenticatedUser {
            user_id: claims.user_id,
            email: claims.email,
        })
    }
}
