use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// 논문 제목 레코드 (DB 행)
/// Thesis title record (database row)
#[derive(Debug, Clone)]
pub struct ThesisTitle {
    pub id: Uuid,
    pub title: String,
    pub field_of_study: String,
    pub keywords: Vec<String>,
    pub method: String,
    pub abstract_summary: String,
    pub created_at: DateTime<Utc>,
}

/// 참고문헌 레코드 (DB 행)
/// Reference record (database row)
#[derive(Debug, Clone)]
pub struct Reference {
    pub id: Uuid,
    pub title: String,
    pub authors: String,
    pub year: i32,
    pub journal: Option<String>,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
}

// 검색 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = SearchRequest)]
pub struct SearchRequest {
    /// 검색어 (제목/초록/키워드 대상)
    /// Search query (matched against title, abstract, keywords)
    #[schema(example = "transformer")]
    pub query: String,

    /// 연구 분야 필터 (부분 일치, 선택)
    /// Field of study filter (substring match, optional)
    #[schema(example = "Computer Science")]
    pub field_of_study: Option<String>,

    /// 최대 결과 수 (기본 10, 최대 100)
    /// Maximum number of results (default 10, max 100)
    #[schema(example = 10)]
    pub limit: Option<i64>,
}

// 참고문헌 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ReferenceResponse)]
pub struct ReferenceResponse {
    pub id: Uuid,
    pub title: String,
    pub authors: String,
    #[schema(example = 2021)]
    pub year: i32,
    pub journal: Option<String>,
    pub url: Option<String>,
}

impl From<Reference> for ReferenceResponse {
    fn from(reference: Reference) -> Self {
        Self {
            id: reference.id,
            title: reference.title,
            authors: reference.authors,
            year: reference.year,
            journal: reference.journal,
            url: reference.url,
        }
    }
}

// 논문 응답 모델 (참고문헌 포함)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ThesisResponse)]
pub struct ThesisResponse {
    pub id: Uuid,
    pub title: String,
    #[schema(example = "Computer Science")]
    pub field_of_study: String,
    pub keywords: Vec<String>,
    #[schema(example = "Quantitative")]
    pub method: String,
    pub abstract_summary: String,
    /// 이 논문이 인용하는 참고문헌 목록
    /// References cited by this thesis
    pub references: Vec<ReferenceResponse>,
    pub created_at: DateTime<Utc>,
}

impl ThesisResponse {
    /// 논문 행과 참고문헌 목록을 응답으로 조립
    pub fn from_thesis(thesis: ThesisTitle, references: Vec<Reference>) -> Self {
        Self {
            id: thesis.id,
            title: thesis.title,
            field_of_study: thesis.field_of_study,
            keywords: thesis.keywords,
            method: thesis.method,
            abstract_summary: thesis.abstract_summary,
            references: references.into_iter().map(Into::into).collect(),
            created_at: thesis.created_at,
        }
    }
}

// 검색 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = SearchResponse)]
pub struct SearchResponse {
    /// 요청한 검색어 (에코백)
    /// The query string echoed back
    #[schema(example = "transformer")]
    pub query: String,
    #[schema(example = 3)]
    pub count: usize,
    pub results: Vec<ThesisResponse>,
}

// 논문 요약 응답 모델 (참고문헌 제외 - 연관 논문 목록용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ThesisSummaryResponse)]
pub struct ThesisSummaryResponse {
    pub id: Uuid,
    pub title: String,
    #[schema(example = "Computer Science")]
    pub field_of_study: String,
    pub keywords: Vec<String>,
    #[schema(example = "Quantitative")]
    pub method: String,
    pub abstract_summary: String,
    pub created_at: DateTime<Utc>,
}

impl From<ThesisTitle> for ThesisSummaryResponse {
    fn from(thesis: ThesisTitle) -> Self {
        Self {
            id: thesis.id,
            title: thesis.title,
            field_of_study: thesis.field_of_study,
            keywords: thesis.keywords,
            method: thesis.method,
            abstract_summary: thesis.abstract_summary,
            created_at: thesis.created_at,
        }
    }
}

// 연관 논문 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = RelatedThesesResponse)]
pub struct RelatedThesesResponse {
    /// 기준 논문 ID
    /// The thesis the results relate to
    pub thesis_id: Uuid,
    #[schema(example = 5)]
    pub count: usize,
    pub related: Vec<ThesisSummaryResponse>,
}

// 연구 방법론 추천 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = RecommendMethodRequest)]
pub struct RecommendMethodRequest {
    /// 연구 키워드 목록
    /// Research keywords
    #[schema(example = json!(["deep learning", "medical imaging"]))]
    pub keywords: Vec<String>,
}

// 연구 방법론 추천 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = RecommendMethodResponse)]
pub struct RecommendMethodResponse {
    /// 추천에 사용된 키워드 (정제 후)
    /// Keywords used for the recommendation (after cleanup)
    pub keywords: Vec<String>,
    /// 추천된 연구 방법론
    /// Recommended research method
    #[schema(example = "Quantitative")]
    pub recommended_method: String,
}
