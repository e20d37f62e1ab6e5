use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use std::collections::HashMap;
use uuid::Uuid;
use crate::domains::search::models::search::{Reference, ThesisTitle};

pub struct ThesisRepository {
    pool: PgPool,
}

impl ThesisRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 논문 검색: 제목/초록 부분 일치 또는 키워드 배열 포함
    /// Search theses: title/abstract substring match or keyword array overlap
    pub async fn search(
        &self,
        query: &str,
        field_of_study: Option<&str>,
        limit: i64,
    ) -> Result<Vec<ThesisTitle>> {
        let pattern = format!("%{}%", query);
        let keyword = vec![query.to_lowercase()];

        let rows = if let Some(field) = field_of_study {
            sqlx::query(
                r#"
                SELECT id, title, field_of_study, keywords, method, abstract_summary, created_at
                FROM thesis_titles
                WHERE (title ILIKE $1 OR abstract_summary ILIKE $1 OR keywords && $2)
                  AND field_of_study ILIKE $3
                ORDER BY created_at DESC
                LIMIT $4
                "#,
            )
            .bind(&pattern)
            .bind(&keyword)
            .bind(format!("%{}%", field))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .context("Failed to search theses")?
        } else {
            sqlx::query(
                r#"
                SELECT id, title, field_of_study, keywords, method, abstract_summary, created_at
                FROM thesis_titles
                WHERE title ILIKE $1 OR abstract_summary ILIKE $1 OR keywords && $2
                ORDER BY created_at DESC
                LIMIT $3
                "#,
            )
            .bind(&pattern)
            .bind(&keyword)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .context("Failed to search theses")?
        };

        Ok(rows.iter().map(|r| self.row_to_thesis(r)).collect())
    }

    /// 논문 ID로 조회
    /// Get thesis by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ThesisTitle>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, field_of_study, keywords, method, abstract_summary, created_at
            FROM thesis_titles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch thesis by id")?;

        Ok(row.map(|r| self.row_to_thesis(&r)))
    }

    /// 같은 연구 분야의 다른 논문 조회 (자기 자신 제외)
    /// Get other theses in the same field of study (excluding the thesis itself)
    pub async fn get_related(
        &self,
        id: Uuid,
        field_of_study: &str,
        limit: i64,
    ) -> Result<Vec<ThesisTitle>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, field_of_study, keywords, method, abstract_summary, created_at
            FROM thesis_titles
            WHERE field_of_study = $1 AND id <> $2
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(field_of_study)
        .bind(id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch related theses")?;

        Ok(rows.iter().map(|r| self.row_to_thesis(r)).collect())
    }

    /// 여러 논문의 참고문헌을 한 번에 조회 (논문 ID별로 그룹핑)
    /// Fetch references for a set of theses in one query, grouped by thesis id
    pub async fn get_references_for(
        &self,
        thesis_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Reference>>> {
        if thesis_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT tr.thesis_id, r.id, r.title, r.authors, r.year, r.journal, r.url, r.created_at
            FROM "references" r
            JOIN thesis_references tr ON tr.reference_id = r.id
            WHERE tr.thesis_id = ANY($1)
            ORDER BY r.year DESC
            "#,
        )
        .bind(thesis_ids)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch thesis references")?;

        let mut grouped: HashMap<Uuid, Vec<Reference>> = HashMap::new();
        for row in rows.iter() {
            let thesis_id: Uuid = row.get("thesis_id");
            grouped.entry(thesis_id).or_default().push(Reference {
                id: row.get("id"),
                title: row.get("title"),
                authors: row.get("authors"),
                year: row.get("year"),
                journal: row.get("journal"),
                url: row.get("url"),
                created_at: row.get("created_at"),
            });
        }

        Ok(grouped)
    }

    fn row_to_thesis(&self, row: &sqlx::postgres::PgRow) -> ThesisTitle {
        ThesisTitle {
            id: row.get("id"),
            title: row.get("title"),
            field_of_study: row.get("field_of_study"),
            keywords: row.get("keywords"),
            method: row.get("method"),
            abstract_summary: row.get("abstract_summary"),
            created_at: row.get("created_at"),
        }
    }
}
