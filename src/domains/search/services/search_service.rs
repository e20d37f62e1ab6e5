use uuid::Uuid;

use crate::domains::ai::models::ai_log::{AiLogCreate, PromptType};
use crate::domains::search::models::{
    RecommendMethodRequest, RecommendMethodResponse, RelatedThesesResponse, SearchRequest,
    SearchResponse, ThesisResponse,
};
use crate::shared::clients::AiServiceClient;
use crate::shared::database::{AiLogRepository, Database, ThesisRepository};
use crate::shared::errors::SearchError;

/// 기본/최대 검색 결과 수
const DEFAULT_SEARCH_LIMIT: i64 = 10;
const MAX_SEARCH_LIMIT: i64 = 100;

/// 연관 논문 기본 조회 수
const DEFAULT_RELATED_LIMIT: i64 = 5;

// 검색 서비스
// SearchService: thesis search and method recommendation
#[derive(Clone)]
pub struct SearchService {
    db: Database,
    ai_client: AiServiceClient,
}

impl SearchService {
    // 생성자 (AI 클라이언트 주입)
    pub fn new(db: Database, ai_client: AiServiceClient) -> Self {
        Self { db, ai_client }
    }

    // 논문 검색 (비즈니스 로직)
    //
    // 제목/초록 부분 일치 또는 키워드 배열 포함으로 검색하고,
    // 각 논문의 참고문헌을 붙여서 반환한다.
    pub async fn search(
        &self,
        user_id: Option<Uuid>,
        request: SearchRequest,
    ) -> Result<SearchResponse, SearchError> {
        // 1. 검색어 검증
        let query = request.query.trim();
        if query.is_empty() {
            return Err(SearchError::ValidationError(
                "Search query is required".to_string(),
            ));
        }

        let limit = clamp_limit(request.limit, DEFAULT_SEARCH_LIMIT);

        // 2. 논문 검색
        let thesis_repo = ThesisRepository::new(self.db.pool().clone());
        let theses = thesis_repo
            .search(query, request.field_of_study.as_deref(), limit)
            .await
            .map_err(|e| SearchError::DatabaseError(format!("Failed to search theses: {}", e)))?;

        // 3. 참고문헌 일괄 조회 후 논문별로 조립
        let thesis_ids: Vec<Uuid> = theses.iter().map(|t| t.id).collect();
        let mut references = thesis_repo
            .get_references_for(&thesis_ids)
            .await
            .map_err(|e| SearchError::DatabaseError(format!("Failed to fetch references: {}", e)))?;

        let results: Vec<ThesisResponse> = theses
            .into_iter()
            .map(|thesis| {
                let refs = references.remove(&thesis.id).unwrap_or_default();
                ThesisResponse::from_thesis(thesis, refs)
            })
            .collect();

        // 4. 검색 기록 (로그인한 경우만, 실패해도 검색 자체는 성공)
        if user_id.is_some() {
            self.write_ai_log(
                user_id,
                PromptType::Search,
                query.to_string(),
                format!("{} results", results.len()),
            )
            .await;
        }

        Ok(SearchResponse {
            query: query.to_string(),
            count: results.len(),
            results,
        })
    }

    // 논문 상세 조회 (참고문헌 포함)
    pub async fn get_thesis(&self, id: Uuid) -> Result<ThesisResponse, SearchError> {
        let thesis_repo = ThesisRepository::new(self.db.pool().clone());

        let thesis = thesis_repo
            .get_by_id(id)
            .await
            .map_err(|e| SearchError::DatabaseError(format!("Failed to fetch thesis: {}", e)))?
            .ok_or(SearchError::ThesisNotFound { id })?;

        let mut references = thesis_repo
            .get_references_for(&[thesis.id])
            .await
            .map_err(|e| SearchError::DatabaseError(format!("Failed to fetch references: {}", e)))?;

        let refs = references.remove(&thesis.id).unwrap_or_default();
        Ok(ThesisResponse::from_thesis(thesis, refs))
    }

    // 연관 논문 조회 (같은 연구 분야, 자기 자신 제외)
    //
    // 목록에는 참고문헌을 붙이지 않는다 (요약만).
    pub async fn get_related(
        &self,
        id: Uuid,
        limit: Option<i64>,
    ) -> Result<RelatedThesesResponse, SearchError> {
        let limit = clamp_limit(limit, DEFAULT_RELATED_LIMIT);
        let thesis_repo = ThesisRepository::new(self.db.pool().clone());

        // 기준 논문이 없으면 404
        let thesis = thesis_repo
            .get_by_id(id)
            .await
            .map_err(|e| SearchError::DatabaseError(format!("Failed to fetch thesis: {}", e)))?
            .ok_or(SearchError::ThesisNotFound { id })?;

        let related = thesis_repo
            .get_related(id, &thesis.field_of_study, limit)
            .await
            .map_err(|e| {
                SearchError::DatabaseError(format!("Failed to fetch related theses: {}", e))
            })?;

        Ok(RelatedThesesResponse {
            thesis_id: id,
            count: related.len(),
            related: related.into_iter().map(Into::into).collect(),
        })
    }

    // 연구 방법론 추천 (AI 서비스 호출)
    pub async fn recommend_method(
        &self,
        request: RecommendMethodRequest,
    ) -> Result<RecommendMethodResponse, SearchError> {
        // 1. 키워드 검증 (빈 항목 제거)
        let keywords: Vec<String> = request
            .keywords
            .iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(SearchError::ValidationError(
                "At least one keyword is required".to_string(),
            ));
        }

        // 2. AI 서비스 호출
        let method = self
            .ai_client
            .recommend_method(&keywords)
            .await
            .map_err(|e| SearchError::AiServiceError(format!("Failed to recommend method: {}", e)))?;

        Ok(RecommendMethodResponse {
            keywords,
            recommended_method: method,
        })
    }

    /// AI 호출 로그 기록 (실패는 경고만 남기고 무시)
    /// Append an AI log entry; failures are logged and swallowed
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

// 결과 수 제한: 최대 100, 0 이하·미지정은 기본값
fn clamp_limit(limit: Option<i64>, default: i64) -> i64 {
    match limit {
        Some(l) if l > MAX_SEARCH_LIMIT => MAX_SEARCH_LIMIT,
        Some(l) if l > 0 => l,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_defaults() {
        assert_eq!(clamp_limit(None, DEFAULT_SEARCH_LIMIT), DEFAULT_SEARCH_LIMIT);
        assert_eq!(clamp_limit(Some(0), DEFAULT_SEARCH_LIMIT), DEFAULT_SEARCH_LIMIT);
        assert_eq!(clamp_limit(Some(-5), DEFAULT_SEARCH_LIMIT), DEFAULT_SEARCH_LIMIT);
        assert_eq!(clamp_limit(None, DEFAULT_RELATED_LIMIT), DEFAULT_RELATED_LIMIT);
    }

    #[test]
    fn test_clamp_limit_caps_at_max() {
        assert_eq!(clamp_limit(Some(100), DEFAULT_SEARCH_LIMIT), 100);
        assert_eq!(clamp_limit(Some(101), DEFAULT_SEARCH_LIMIT), MAX_SEARCH_LIMIT);
        assert_eq!(clamp_limit(Some(10_000), DEFAULT_SEARCH_LIMIT), MAX_SEARCH_LIMIT);
    }

    #[test]
    fn test_clamp_limit_passes_through_valid_values() {
        assert_eq!(clamp_limit(Some(1), DEFAULT_SEARCH_LIMIT), 1);
        assert_eq!(clamp_limit(Some(25), DEFAULT_SEARCH_LIMIT), 25);
    }
}
