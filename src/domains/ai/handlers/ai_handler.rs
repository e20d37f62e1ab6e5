use crate::domains::ai::models::{
    EmbeddingRequest, EmbeddingResponse, GenerateOutlineRequest, GenerateOutlineResponse,
    GenerateTitleRequest, GenerateTitleResponse,
};
use crate::shared::errors::AiError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// 논문 제목 생성 핸들러
/// Thesis title generation handler
#[utoipa::path(
    post,
    path = "/api/ai/generate-title",
    request_body = GenerateTitleRequest,
    responses(
        (status = 200, description = "Title generated successfully", body = GenerateTitleResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "AI service unavailable"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "AI"
)]
pub async fn generate_title(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<GenerateTitleRequest>,
) -> Result<Json<GenerateTitleResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .ai_state
        .ai_service
        .generate_title(authenticated_user.user_id, request)
        .await
        .map_err(|e: AiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

/// 논문 목차 생성 핸들러
/// Thesis outline generation handler
#[utoipa::path(
    post,
    path = "/api/ai/generate-outline",
    request_body = GenerateOutlineRequest,
    responses(
        (status = 200, description = "Outline generated successfully", body = GenerateOutlineResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "AI service unavailable"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "AI"
)]
pub async fn generate_outline(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<GenerateOutlineRequest>,
) -> Result<Json<GenerateOutlineResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .ai_state
        .ai_service
        .generate_outline(authenticated_user.user_id, request)
        .await
        .map_err(|e: AiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

/// 텍스트 임베딩 핸들러
/// Text embedding handler
#[utoipa::path(
    post,
    path = "/api/ai/embedding",
    request_body = EmbeddingRequest,
    responses(
        (status = 200, description = "Embedding generated successfully", body = EmbeddingResponse),
        (status = 400, description = "Missing text"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "AI service unavailable"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "AI"
)]
pub async fn embedding(
    State(app_state): State<AppState>,
    _authenticated_user: AuthenticatedUser,
    Json(request): Json<EmbeddingRequest>,
) -> Result<Json<EmbeddingResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .ai_state
        .ai_service
        .embedding(request)
        .await
        .map_err(|e: AiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}
