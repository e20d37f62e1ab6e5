// Dataset domain state
// 데이터셋 도메인 상태
use std::sync::Arc;

use crate::domains::dataset::services::DatasetService;
use crate::domains::payment::store::PaymentStore;
use crate::shared::database::Database;

/// Dataset domain state
/// 데이터셋 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct DatasetState {
    pub dataset_service: DatasetService,
}

impl DatasetState {
    /// Create DatasetState with database and payment store
    /// DatasetState 생성 (데이터베이스와 결제 저장소 필요)
    pub fn new(db: Database, payment_store: Arc<dyn PaymentStore>) -> Self {
        Self {
            dataset_service: DatasetService::new(db, payment_store),
        }
    }
}
