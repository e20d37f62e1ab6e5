use crate::domains::dataset::models::{
    DatasetDownloadResponse, DatasetListResponse, DatasetResponse,
};
use crate::shared::errors::DatasetError;
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

/// 쿼리 파라미터 (데이터셋 목록)
/// Query parameters for dataset listing
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct DatasetListQuery {
    /// 연구 분야 필터 (부분 일치)
    /// Field of study filter (substring match)
    #[serde(default)]
    pub field_of_study: Option<String>,

    /// 최대 조회 개수 (기본: 10, 최대: 100)
    /// Limit (default: 10, max: 100)
    #[serde(default)]
    pub limit: Option<i64>,

    /// 페이지네이션 오프셋 (기본: 0)
    /// Offset for pagination (default: 0)
    #[serde(default)]
    pub skip: Option<i64>,
}

/// 데이터셋 목록 핸들러
/// Dataset listing handler
#[utoipa::path(
    get,
    path = "/api/dataset",
    params(
        DatasetListQuery
    ),
    responses(
        (status = 200, description = "Dataset list retrieved successfully", body = DatasetListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dataset"
)]
pub async fn list_datasets(
    State(app_state): State<AppState>,
    Query(query): Query<DatasetListQuery>,
) -> Result<Json<DatasetListResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .dataset_state
        .dataset_service
        .list(query.field_of_study.as_deref(), query.limit, query.skip)
        .await
        .map_err(|e: DatasetError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

/// 데이터셋 상세 조회 핸들러
/// Dataset detail handler
#[utoipa::path(
    get,
    path = "/api/dataset/{datasetId}",
    params(
        ("datasetId" = Uuid, Path, description = "Dataset ID to look up")
    ),
    responses(
        (status = 200, description = "Dataset retrieved successfully", body = DatasetResponse),
        (status = 404, description = "Dataset not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dataset"
)]
pub async fn get_dataset(
    State(app_state): State<AppState>,
    Path(dataset_id): Path<Uuid>,
) -> Result<Json<DatasetResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .dataset_state
        .dataset_service
        .get(dataset_id)
        .await
        .map_err(|e: DatasetError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}

/// 데이터셋 다운로드 핸들러
/// Dataset download handler
///
/// 유료 데이터셋은 이 사용자의 PAID 트랜잭션이 있어야 file_url을
/// 내려준다. 없으면 402.
#[utoipa::path(
    post,
    path = "/api/dataset/{datasetId}/download",
    params(
        ("datasetId" = Uuid, Path, description = "Dataset ID to download")
    ),
    responses(
        (status = 200, description = "Download URL issued", body = DatasetDownloadResponse),
        (status = 401, description = "Unauthorized"),
        (status = 402, description = "Payment required (no PAID transaction for this dataset)"),
        (status = 404, description = "Dataset not found"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("BearerAuth" = [])
    ),
    tag = "Dataset"
)]
pub async fn download_dataset(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(dataset_id): Path<Uuid>,
) -> Result<Json<DatasetDownloadResponse>, (StatusCode, Json<serde_json::Value>)> {
    let response = app_state
        .dataset_state
        .dataset_service
        .download(authenticated_user.user_id, dataset_id)
        .await
        .map_err(|e: DatasetError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(response))
}
