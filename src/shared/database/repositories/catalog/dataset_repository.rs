use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use uuid::Uuid;
use crate::domains::dataset::models::dataset::Dataset;

pub struct DatasetRepository {
    pool: PgPool,
}

impl DatasetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 데이터셋 목록 조회 (연구 분야 필터 + 페이징)
    /// List datasets (optional field-of-study filter + paging)
    pub async fn list(
        &self,
        field_of_study: Option<&str>,
        limit: i64,
        skip: i64,
    ) -> Result<Vec<Dataset>> {
        let rows = if let Some(field) = field_of_study {
            sqlx::query(
                r#"
                SELECT id, name, description, field_of_study, file_url, price, is_paid, created_at
                FROM datasets
                WHERE field_of_study ILIKE $1
                ORDER BY created_at DESC
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(format!("%{}%", field))
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list datasets")?
        } else {
            sqlx::query(
                r#"
                SELECT id, name, description, field_of_study, file_url, price, is_paid, created_at
                FROM datasets
                ORDER BY created_at DESC
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
            .context("Failed to list datasets")?
        };

        Ok(rows.iter().map(|r| self.row_to_dataset(r)).collect())
    }

    /// 데이터셋 개수 조회 (목록과 같은 필터)
    /// Count datasets with the same filter as the list
    pub async fn count(&self, field_of_study: Option<&str>) -> Result<i64> {
        let row = if let Some(field) = field_of_study {
            sqlx::query(r#"SELECT COUNT(*) as count FROM datasets WHERE field_of_study ILIKE $1"#)
                .bind(format!("%{}%", field))
                .fetch_one(&self.pool)
                .await
                .context("Failed to count datasets")?
        } else {
            sqlx::query(r#"SELECT COUNT(*) as count FROM datasets"#)
                .fetch_one(&self.pool)
                .await
                .context("Failed to count datasets")?
        };

        Ok(row.get("count"))
    }

    /// 데이터셋 ID로 조회
    /// Get dataset by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Dataset>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, field_of_study, file_url, price, is_paid, created_at
            FROM datasets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch dataset by id")?;

        Ok(row.map(|r| self.row_to_dataset(&r)))
    }

    fn row_to_dataset(&self, row: &sqlx::postgres::PgRow) -> Dataset {
        Dataset {
            id: row.get("id"),
            name: row.get("name"),
            description: row.get("description"),
            field_of_study: row.get("field_of_study"),
            file_url: row.get("file_url"),
            price: row.get("price"),
            is_paid: row.get("is_paid"),
            created_at: row.get("created_at"),
        }
    }
}
