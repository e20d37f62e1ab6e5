use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// 데이터셋 레코드 (DB 행)
/// Dataset record (database row)
#[derive(Debug, Clone)]
pub struct Dataset {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub field_of_study: String,
    /// 실제 파일 위치 (다운로드 승인 후에만 내려준다)
    pub file_url: String,
    pub price: i64,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
}

// 데이터셋 응답 모델 (file_url 제외)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = DatasetResponse)]
pub struct DatasetResponse {
    pub id: Uuid,
    #[schema(example = "Korean Dialogue Corpus")]
    pub name: String,
    pub description: String,
    #[schema(example = "Computer Science")]
    pub field_of_study: String,
    /// 가격 (IDR, 무료면 0)
    /// Price (IDR, 0 for free datasets)
    #[schema(example = 50000)]
    pub price: i64,
    /// 유료 여부
    /// Whether the dataset requires payment
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Dataset> for DatasetResponse {
    fn from(dataset: Dataset) -> Self {
        Self {
            id: dataset.id,
            name: dataset.name,
            description: dataset.description,
            field_of_study: dataset.field_of_study,
            price: dataset.price,
            is_paid: dataset.is_paid,
            created_at: dataset.created_at,
        }
    }
}

// 데이터셋 목록 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = DatasetListResponse)]
pub struct DatasetListResponse {
    /// 필터 기준 전체 개수 (페이징용)
    /// Total matching count (for pagination)
    #[schema(example = 42)]
    pub total: i64,
    /// 이번 페이지에 담긴 개수
    /// Number of datasets in this page
    #[schema(example = 10)]
    pub count: usize,
    pub datasets: Vec<DatasetResponse>,
}

// 데이터셋 다운로드 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = DatasetDownloadResponse)]
pub struct DatasetDownloadResponse {
    pub id: Uuid,
    pub name: String,
    /// 다운로드 URL (무료이거나 결제 완료 시에만 발급)
    /// Download URL (issued only for free or paid-for datasets)
    pub file_url: String,
}
