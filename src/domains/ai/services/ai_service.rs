use uuid::Uuid;

use crate::domains::ai::models::{
    AiLogCreate, EmbeddingRequest, EmbeddingResponse, GenerateOutlineRequest,
    GenerateOutlineResponse, GenerateTitleRequest, GenerateTitleResponse, PromptType,
};
use crate::shared::clients::AiServiceClient;
use crate::shared::database::{AiLogRepository, Database};
use crate::shared::errors::AiError;

// AI 생성 서비스
// AiService: title/outline generation and embeddings
#[derive(Clone)]
pub struct AiService {
    db: Database,
    ai_client: AiServiceClient,
}

impl AiService {
    // 생성자 (AI 클라이언트 주입)
    pub fn new(db: Database, ai_client: AiServiceClient) -> Self {
        Self { db, ai_client }
    }

    // 논문 제목 생성 (비즈니스 로직)
    pub async fn generate_title(
        &self,
        user_id: Uuid,
        request: GenerateTitleRequest,
    ) -> Result<GenerateTitleResponse, AiError> {
        // 1. 요청 검증
        require_field(&request.field_of_study, "fieldOfStudy")?;
        require_field(&request.keyword, "keyword")?;
        require_field(&request.method, "method")?;

        // 2. AI 서비스 호출
        let title = self
            .ai_client
            .generate_title(&request.field_of_study, &request.keyword, &request.method)
            .await
            .map_err(|e| AiError::AiServiceError(format!("Failed to generate title: {}", e)))?;

        // 3. 호출 기록 (실패해도 생성 자체는 성공)
        self.write_ai_log(
            Some(user_id),
            PromptType::Title,
            format!(
                "{} / {} / {}",
                request.field_of_study, request.keyword, request.method
            ),
            title.clone(),
        )
        .await;

        Ok(GenerateTitleResponse { title })
    }

    // 논문 목차 생성 (비즈니스 로직)
    pub async fn generate_outline(
        &self,
        user_id: Uuid,
        request: GenerateOutlineRequest,
    ) -> Result<GenerateOutlineResponse, AiError> {
        require_field(&request.title, "title")?;
        require_field(&request.field_of_study, "fieldOfStudy")?;

        let outline = self
            .ai_client
            .generate_outline(&request.title, &request.field_of_study)
            .await
            .map_err(|e| AiError::AiServiceError(format!("Failed to generate outline: {}", e)))?;

        self.write_ai_log(
            Some(user_id),
            PromptType::Outline,
            format!("{} / {}", request.title, request.field_of_study),
            outline.clone(),
        )
        .await;

        Ok(GenerateOutlineResponse { outline })
    }

    // 텍스트 임베딩 (비즈니스 로직)
    //
    // 임베딩은 호출량이 많아 ai_logs에 기록하지 않는다.
    pub async fn embedding(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, AiError> {
        require_field(&request.text, "text")?;

        let embedding = self
            .ai_client
            .embedding(&request.text)
            .await
            .map_err(|e| AiError::AiServiceError(format!("Failed to generate embedding: {}", e)))?;

        Ok(EmbeddingResponse {
            dimension: embedding.len(),
            embedding,
        })
    }

    /// AI 호출 로그 기록 (실패는 경고만 남기고 무시)
    async fn write_ai_log(
        &self,
        user_id: Option<Uuid>,
        prompt_type: PromptType,
        input: String,
        output: String,
    ) {
        let ai_log_repo = AiLogRepository::new(self.db.pool().clone());
        if let Err(e) = ai_log_repo
            .create(AiLogCreate {
                user_id,
                prompt_type,
                input,
                output,
            })
            .await
        {
            log::warn!("Failed to write AI log: {}", e);
        }
    }
}

// 필수 문자열 필드 검증
fn require_field(value: &str, name: &str) -> Result<(), AiError> {
    if value.trim().is_empty() {
        return Err(AiError::ValidationError(format!("{} is required", name)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field_rejects_blank_values() {
        assert!(require_field("", "title").is_err());
        assert!(require_field("   ", "title").is_err());
        assert!(require_field("transformer", "title").is_ok());
    }

    #[test]
    fn test_require_field_error_names_the_field() {
        let err = require_field("", "keyword");
        assert!(matches!(
            err,
            Err(AiError::ValidationError(msg)) if msg == "keyword is required"
        ));
    }
}
