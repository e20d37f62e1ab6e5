// AI domain state
// AI 도메인 상태
use crate::domains::ai::services::AiService;
use crate::shared::clients::AiServiceClient;
use crate::shared::database::Database;

/// AI domain state
/// AI 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AiState {
    pub ai_service: AiService,
}

impl AiState {
    /// Create AiState with database and AI client
    /// AiState 생성 (데이터베이스와 AI 클라이언트 필요)
    pub fn new(db: Database, ai_client: AiServiceClient) -> Self {
        Self {
            ai_service: AiService::new(db, ai_client),
        }
    }
}
