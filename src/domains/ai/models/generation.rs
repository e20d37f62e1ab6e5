use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 제목 생성 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = GenerateTitleRequest)]
pub struct GenerateTitleRequest {
    /// 연구 분야
    /// Field of study
    #[schema(example = "Computer Science")]
    pub field_of_study: String,

    /// 핵심 키워드
    /// Core keyword
    #[schema(example = "federated learning")]
    pub keyword: String,

    /// 연구 방법론
    /// Research method
    #[schema(example = "Quantitative")]
    pub method: String,
}

// 제목 생성 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = GenerateTitleResponse)]
pub struct GenerateTitleResponse {
    /// 생성된 논문 제목
    /// Generated thesis title
    pub title: String,
}

// 목차 생성 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = GenerateOutlineRequest)]
pub struct GenerateOutlineRequest {
    /// 논문 제목
    /// Thesis title
    pub title: String,

    /// 연구 분야
    /// Field of study
    #[schema(example = "Computer Science")]
    pub field_of_study: String,
}

// 목차 생성 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = GenerateOutlineResponse)]
pub struct GenerateOutlineResponse {
    /// 생성된 목차 (마크다운 텍스트)
    /// Generated outline (markdown text)
    pub outline: String,
}

// 임베딩 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = EmbeddingRequest)]
pub struct EmbeddingRequest {
    /// 임베딩할 텍스트
    /// Text to embed
    #[schema(example = "graph neural networks for drug discovery")]
    pub text: String,
}

// 임베딩 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = EmbeddingResponse)]
pub struct EmbeddingResponse {
    /// 임베딩 벡터
    /// Embedding vector
    pub embedding: Vec<f32>,

    /// 벡터 차원 수
    /// Vector dimension
    #[schema(example = 384)]
    pub dimension: usize,
}
