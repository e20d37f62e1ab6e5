use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

// AI 서비스 클라이언트
// AI service client for external calls (embedding / generation endpoints)
//
// 외부 AI 마이크로서비스는 언제든 내려가 있을 수 있으므로 모든 호출에
// 타임아웃이 걸려 있고, 실패는 호출자에게 그대로 전파된다 (재시도 없음).
#[derive(Clone)]
pub struct AiServiceClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl AiServiceClient {
    // 클라이언트 생성
    // Create new AI service client instance
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    // 임베딩 생성: 텍스트 -> 벡터
    // Generate embedding: text -> vector
    pub async fn embedding(&self, text: &str) -> Result<Vec<f32>> {
        let url = format!("{}/embedding", self.base_url);

        let request_body = serde_json::json!({ "text": text });

        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to AI service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("AI service returned error: {} - {}", status, body);
        }

        let parsed: EmbeddingResponseRaw = response
            .json()
            .await
            .context("Failed to parse AI embedding response")?;

        Ok(parsed.embedding)
    }

    // 논문 제목 생성
    // Generate a thesis title
    pub async fn generate_title(
        &self,
        field_of_study: &str,
        keyword: &str,
        method: &str,
    ) -> Result<String> {
        let url = format!("{}/generate-title", self.base_url);

        let request_body = serde_json::json!({
            "fieldOfStudy": field_of_study,
            "keyword": keyword,
            "method": method,
        });

        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to AI service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("AI service returned error: {} - {}", status, body);
        }

        let parsed: TitleResponseRaw = response
            .json()
            .await
            .context("Failed to parse AI title response")?;

        Ok(parsed.title)
    }

    // 논문 목차 생성
    // Generate a thesis outline
    pub async fn generate_outline(&self, title: &str, field_of_study: &str) -> Result<String> {
        let url = format!("{}/generate-outline", self.base_url);

        let request_body = serde_json::json!({
            "title": title,
            "fieldOfStudy": field_of_study,
        });

        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to AI service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("AI service returned error: {} - {}", status, body);
        }

        let parsed: OutlineResponseRaw = response
            .json()
            .await
            .context("Failed to parse AI outline response")?;

        Ok(parsed.outline)
    }

    // 연구 방법론 추천
    // Recommend a research method for the given keywords
    pub async fn recommend_method(&self, keywords: &[String]) -> Result<String> {
        let url = format!("{}/recommend-method", self.base_url);

        let request_body = serde_json::json!({ "keywords": keywords });

        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to AI service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("AI service returned error: {} - {}", status, body);
        }

        let parsed: MethodResponseRaw = response
            .json()
            .await
            .context("Failed to parse AI method response")?;

        Ok(parsed.method)
    }
}

// AI 서비스 원시 응답 모델 (내부용)
// Raw AI service response models (internal use)
#[derive(Debug, Deserialize)]
struct EmbeddingResponseRaw {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct TitleResponseRaw {
    title: String,
}

#[derive(Debug, Deserialize)]
struct OutlineResponseRaw {
    outline: String,
}

#[derive(Debug, Deserialize)]
struct MethodResponseRaw {
    method: String,
}
