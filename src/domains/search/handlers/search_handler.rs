use crate::domains::search::models::{
    RecommendMethodRequest, RecommendMethodResponse, RelatedThesesResponse, SearchRequest,
    SearchResponse, ThesisResponse,
};
use crate::shared::errors::SearchError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// 쿼리 파라미터 (연관 논문)
/// Query parameters for related theses
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct RelatedQuery {
    /// 최대 조회 개수 (기본: 5, 최대: 100)
    /// Limit (default: 5, max: 100)
    #[serde(default)]
    pub limit: Option<i64>,
}

/// 논문 검색 핸들러
/// Thesis search handler
///
/// 인증 없이도 호출할 수 있다. 로그인한 사용자의 검색은
/// 사용자와 함께 기록된다.
#[utoipa::path(
    post,
    path = "/api/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Search results with references", body = SearchResponse),
        (status = 400, description = "Missing search query"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Search"
)]
pub async fn search_theses(
    State(app_state): State<AppState>,
    authenticated_user: Option<AuthenticatedUser>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<serde_json::Value>)> {
    let user_id = authenticated_user.map(|u| u.user_id);

    let response = app_state
        .search_state
        .search_service
        .search(user_id, request)
        .await
        .map_err(|e: SearchError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

/// 논문 상세 조회 핸들러
/// Thesis detail handler
#[utoipa::path(
    get,
    path = "/api/search/{thesisId}",
    params(
        ("thesisId" = Uuid, Path, description = "Thesis ID to look up")
    ),
    responses(
        (status = 200, description = "Thesis detail with references", body = ThesisResponse),
        (status = 404, description = "Thesis not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Search"
)]
pub async fn get_thesis_detail(
    State(app_state): State<AppState>,
    Path(thesis_id): Path<Uuid>,
) -> Result<Json<ThesisResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .search_state
        .search_service
        .get_thesis(thesis_id)
        .await
        .map_err(|e: SearchError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

/// 연관 논문 조회 핸들러
/// Related theses handler
#[utoipa::path(
    get,
    path = "/api/search/{thesisId}/related",
    params(
        ("thesisId" = Uuid, Path, description = "Thesis ID to find related theses for"),
        RelatedQuery
    ),
    responses(
        (status = 200, description = "Theses in the same field of study", body = RelatedThesesResponse),
        (status = 404, description = "Thesis not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Search"
)]
pub async fn get_related_theses(
    State(app_state): State<AppState>,
    Path(thesis_id): Path<Uuid>,
    Query(query): Query<RelatedQuery>,
) -> Result<Json<RelatedThesesResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .search_state
        .search_service
        .get_related(thesis_id, query.limit)
        .await
        .map_err(|e: SearchError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

/// 연구 방법론 추천 핸들러
/// Research method recommendation handler
#[utoipa::path(
    post,
    path = "/api/search/recommend-method",
    request_body = RecommendMethodRequest,
    responses(
        (status = 200, description = "Recommended research method", body = RecommendMethodResponse),
        (status = 400, description = "Missing keywords"),
        (status = 502, description = "AI service unavailable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Search"
)]
pub async fn recommend_method(
    State(app_state): State<AppState>,
    Json(request): Json<RecommendMethodRequest>,
) -> Result<Json<RecommendMethodResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .search_state
        .search_service
        .recommend_method(request)
        .await
        .map_err(|e: SearchError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}
