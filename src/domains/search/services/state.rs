// Search domain state
// 검색 도메인 상태
use crate::domains::search::services::SearchService;
use crate::shared::clients::AiServiceClient;
use crate::shared::database::Database;

/// Search domain state
/// 검색 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct SearchState {
    pub search_service: SearchService,
}

impl SearchState {
    /// Create SearchState with database and AI client
    /// SearchState 생성 (데이터베이스와 AI 클라이언트 필요)
    pub fn new(db: Database, ai_client: AiServiceClient) -> Self {
        Self {
            search_service: SearchService::new(db, ai_client),
        }
    }
}
