use sqlx::PgPool;
use anyhow::{Context, Result};
use chrono::Utc;
use uuid::Uuid;
use crate::domains::ai::models::ai_log::AiLogCreate;

/// AI 호출 로그 Repository
/// AI interaction log repository (append-only)
pub struct AiLogRepository {
    pool: PgPool,
}

impl AiLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 로그 한 건 기록
    /// Append one log entry
    pub async fn create(&self, log: AiLogCreate) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO ai_logs (id, user_id, prompt_type, input, output, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(log.user_id)
        .bind(log.prompt_type.as_str())
        .bind(&log.input)
        .bind(&log.output)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .context("Failed to create AI log")?;

        Ok(())
    }
}
