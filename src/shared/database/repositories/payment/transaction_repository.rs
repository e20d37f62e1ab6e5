use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use chrono::Utc;
use uuid::Uuid;
use crate::domains::payment::models::transaction::{
    ItemType, Transaction, TransactionCreate, TransactionStatus,
};

pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 트랜잭션 생성 (항상 PENDING으로 시작)
    /// Create transaction (always starts PENDING)
    pub async fn create(&self, tx_create: &TransactionCreate) -> Result<Transaction> {
        let row = sqlx::query(
            r#"
            INSERT INTO transactions (
                id, user_id, item_type, item_id, amount, order_id,
                transaction_token, status, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, user_id, item_type, item_id, amount, order_id,
                      transaction_token, status, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(tx_create.user_id)
        .bind(tx_create.item_type.as_str())
        .bind(&tx_create.item_id)
        .bind(tx_create.amount)
        .bind(&tx_create.order_id)
        .bind(&tx_create.transaction_token)
        .bind(TransactionStatus::Pending.as_str())
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create transaction")?;

        self.row_to_transaction(&row)
    }

    /// 트랜잭션 ID로 조회
    /// Get transaction by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Transaction>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, item_type, item_id, amount, order_id,
                   transaction_token, status, created_at, updated_at
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch transaction by id")?;

        row.map(|r| self.row_to_transaction(&r)).transpose()
    }

    /// 게이트웨이 주문 ID로 조회 (웹훅 매칭용)
    /// Get transaction by gateway order id (webhook matching)
    pub async fn get_by_order_id(&self, order_id: &str) -> Result<Option<Transaction>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, item_type, item_id, amount, order_id,
                   transaction_token, status, created_at, updated_at
            FROM transactions
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch transaction by order id")?;

        row.map(|r| self.row_to_transaction(&r)).transpose()
    }

    /// 상태 갱신 (주문 ID 기준, 단일 원자적 UPDATE)
    /// Update status by order id as a single atomic UPDATE.
    ///
    /// 조건:
    /// - PAID는 최종 상태라 절대 덮어쓰지 않음
    /// - 같은 상태로의 갱신은 건너뜀 (웹훅 재전송이 no-op이 되도록)
    ///
    /// 반환: 실제로 갱신된 행 (조건에 걸려 갱신이 없으면 None)
    pub async fn update_status_by_order_id(
        &self,
        order_id: &str,
        status: TransactionStatus,
    ) -> Result<Option<Transaction>> {
        let row = sqlx::query(
            r#"
            UPDATE transactions
            SET status = $1, updated_at = NOW()
            WHERE order_id = $2
              AND status <> $3
              AND status <> $1
            RETURNING id, user_id, item_type, item_id, amount, order_id,
                      transaction_token, status, created_at, updated_at
            "#,
        )
        .bind(status.as_str())
        .bind(order_id)
        .bind(TransactionStatus::Paid.as_str())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update transaction status")?;

        row.map(|r| self.row_to_transaction(&r)).transpose()
    }

    /// 특정 (사용자, 아이템) 조합의 PAID 트랜잭션 조회
    /// Find a PAID transaction for the exact (user, item type, item id) tuple
    pub async fn find_paid_for_item(
        &self,
        user_id: Uuid,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<Option<Transaction>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, item_type, item_id, amount, order_id,
                   transaction_token, status, created_at, updated_at
            FROM transactions
            WHERE user_id = $1 AND item_type = $2 AND item_id = $3 AND status = $4
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(item_type.as_str())
        .bind(item_id)
        .bind(TransactionStatus::Paid.as_str())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to find paid transaction")?;

        row.map(|r| self.row_to_transaction(&r)).transpose()
    }

    fn row_to_transaction(&self, row: &sqlx::postgres::PgRow) -> Result<Transaction> {
        let item_type_raw: String = row.get("item_type");
        let item_type = ItemType::parse(&item_type_raw)
            .with_context(|| format!("Unknown item type in database: {}", item_type_raw))?;

        let status_raw: String = row.get("status");
        let status = TransactionStatus::parse(&status_raw)
            .with_context(|| format!("Unknown transaction status in database: {}", status_raw))?;

        Ok(Transaction {
            id: row.get("id"),
            user_id: row.get("user_id"),
            item_type,
            item_id: row.get("item_id"),
            amount: row.get("amount"),
            order_id: row.get("order_id"),
            transaction_token: row.get("transaction_token"),
            status,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}
