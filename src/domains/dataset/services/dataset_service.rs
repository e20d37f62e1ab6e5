use std::sync::Arc;
use uuid::Uuid;

use crate::domains::dataset::models::{
    Dataset, DatasetDownloadResponse, DatasetListResponse, DatasetResponse,
};
use crate::domains::payment::models::transaction::ItemType;
use crate::domains::payment::store::PaymentStore;
use crate::shared::database::{Database, DatasetRepository};
use crate::shared::errors::DatasetError;

/// 기본/최대 목록 크기
const DEFAULT_LIST_LIMIT: i64 = 10;
const MAX_LIST_LIMIT: i64 = 100;

// 데이터셋 서비스
// DatasetService: dataset catalog and download authorization
#[derive(Clone)]
pub struct DatasetService {
    db: Database,
    payment_store: Arc<dyn PaymentStore>,
}

impl DatasetService {
    // 생성자 (결제 저장소 주입 - 다운로드 권한 확인에 사용)
    pub fn new(db: Database, payment_store: Arc<dyn PaymentStore>) -> Self {
        Self { db, payment_store }
    }

    // 데이터셋 목록 조회 (비즈니스 로직)
    pub async fn list(
        &self,
        field_of_study: Option<&str>,
        limit: Option<i64>,
        skip: Option<i64>,
    ) -> Result<DatasetListResponse, DatasetError> {
        let limit = clamp_list_limit(limit);
        let skip = skip.filter(|s| *s >= 0).unwrap_or(0);

        let dataset_repo = DatasetRepository::new(self.db.pool().clone());

        let datasets = dataset_repo
            .list(field_of_study, limit, skip)
            .await
            .map_err(|e| DatasetError::DatabaseError(format!("Failed to list datasets: {}", e)))?;

        // 페이징용 전체 개수 (목록과 같은 필터)
        let total = dataset_repo
            .count(field_of_study)
            .await
            .map_err(|e| DatasetError::DatabaseError(format!("Failed to count datasets: {}", e)))?;

        Ok(DatasetListResponse {
            total,
            count: datasets.len(),
            datasets: datasets.into_iter().map(Into::into).collect(),
        })
    }

    // 데이터셋 상세 조회
    pub async fn get(&self, id: Uuid) -> Result<DatasetResponse, DatasetError> {
        let dataset = self.fetch_dataset(id).await?;
        Ok(dataset.into())
    }

    // 데이터셋 다운로드 (비즈니스 로직)
    //
    // 무료 데이터셋은 바로 내려준다. 유료 데이터셋은 이 사용자의
    // (DATASET, 데이터셋 ID) 조합에 PAID 트랜잭션이 있어야 한다.
    // PENDING/FAILED 트랜잭션은 권한을 주지 않는다.
    pub async fn download(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<DatasetDownloadResponse, DatasetError> {
        let dataset = self.fetch_dataset(id).await?;

        if dataset.is_paid {
            let paid = self
                .payment_store
                .find_paid_for_item(user_id, ItemType::Dataset, &dataset.id.to_string())
                .await
                .map_err(|e| {
                    DatasetError::DatabaseError(format!("Failed to check paid transaction: {}", e))
                })?;

            authorize_download(&dataset, paid.is_some())?;
        }

        Ok(DatasetDownloadResponse {
            id: dataset.id,
            name: dataset.name,
            file_url: dataset.file_url,
        })
    }

    async fn fetch_dataset(&self, id: Uuid) -> Result<Dataset, DatasetError> {
        let dataset_repo = DatasetRepository::new(self.db.pool().clone());

        dataset_repo
            .get_by_id(id)
            .await
            .map_err(|e| DatasetError::DatabaseError(format!("Failed to fetch dataset: {}", e)))?
            .ok_or(DatasetError::DatasetNotFound { id })
    }
}

/// 다운로드 권한 판정
/// Decide whether a download is allowed
///
/// 무료이거나 결제가 확인된 경우에만 허용.
fn authorize_download(dataset: &Dataset, has_paid: bool) -> Result<(), DatasetError> {
    if dataset.is_paid && !has_paid {
        return Err(DatasetError::PaymentRequired { id: dataset.id });
    }
    Ok(())
}

// 목록 크기 제한: 기본 10, 최대 100, 0 이하는 기본값
fn clamp_list_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(l) if l > MAX_LIST_LIMIT => MAX_LIST_LIMIT,
        Some(l) if l > 0 => l,
        _ => DEFAULT_LIST_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_dataset(is_paid: bool) -> Dataset {
        Dataset {
            id: Uuid::new_v4(),
            name: "Sample corpus".to_string(),
            description: "Test dataset".to_string(),
            field_of_study: "Computer Science".to_string(),
            file_url: "https://files.example/corpus.zip".to_string(),
            price: if is_paid { 50000 } else { 0 },
            is_paid,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_free_dataset_is_always_downloadable() {
        let dataset = sample_dataset(false);
        assert!(authorize_download(&dataset, false).is_ok());
        assert!(authorize_download(&dataset, true).is_ok());
    }

    #[test]
    fn test_paid_dataset_requires_payment() {
        let dataset = sample_dataset(true);

        let denied = authorize_download(&dataset, false);
        assert!(matches!(
            denied,
            Err(DatasetError::PaymentRequired { id }) if id == dataset.id
        ));

        assert!(authorize_download(&dataset, true).is_ok());
    }

    #[test]
    fn test_clamp_list_limit() {
        assert_eq!(clamp_list_limit(None), DEFAULT_LIST_LIMIT);
        assert_eq!(clamp_list_limit(Some(0)), DEFAULT_LIST_LIMIT);
        assert_eq!(clamp_list_limit(Some(-1)), DEFAULT_LIST_LIMIT);
        assert_eq!(clamp_list_limit(Some(30)), 30);
        assert_eq!(clamp_list_limit(Some(500)), MAX_LIST_LIMIT);
    }
}
