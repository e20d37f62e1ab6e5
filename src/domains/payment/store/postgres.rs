use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use super::PaymentStore;
use crate::domains::payment::models::transaction::{
    Customer, ItemType, Transaction, TransactionCreate, TransactionStatus,
};
use crate::shared::database::connection::Database;
use crate::shared::database::repositories::auth::user_repository::UserRepository;
use crate::shared::database::repositories::payment::transaction_repository::TransactionRepository;

/// PostgreSQL 결제 저장소
/// PostgreSQL payment store
///
/// 레포지토리 계층에 그대로 위임합니다. 상태 갱신의 원자성은
/// TransactionRepository의 조건부 UPDATE가 보장합니다.
pub struct PgPaymentStore {
    transaction_repository: TransactionRepository,
    user_repository: UserRepository,
}

impl PgPaymentStore {
    pub fn new(db: &Database) -> Self {
        Self {
            transaction_repository: TransactionRepository::new(db.pool().clone()),
            user_repository: UserRepository::new(db.pool().clone()),
        }
    }
}

#[async_trait]
impl PaymentStore for PgPaymentStore {
    async fn find_customer(&self, user_id: Uuid) -> Result<Option<Customer>> {
        let user = self.user_repository.get_user_by_id(user_id).await?;
        Ok(user.map(|u| Customer {
            email: u.email,
            name: u.name,
        }))
    }

    async fn create_transaction(&self, tx_create: &TransactionCreate) -> Result<Transaction> {
        self.transaction_repository.create(tx_create).await
    }

    async fn get_transaction(&self, id: Uuid) -> Result<Option<Transaction>> {
        self.transaction_repository.get_by_id(id).await
    }

    async fn get_by_order_id(&self, order_id: &str) -> Result<Option<Transaction>> {
        self.transaction_repository.get_by_order_id(order_id).await
    }

    async fn update_status_by_order_id(
        &self,
        order_id: &str,
        status: TransactionStatus,
    ) -> Result<Option<Transaction>> {
        self.transaction_repository
            .update_status_by_order_id(order_id, status)
            .await
    }

    async fn find_paid_for_item(
        &self,
        user_id: Uuid,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<Option<Transaction>> {
        self.transaction_repository
            .find_paid_for_item(user_id, item_type, item_id)
            .await
    }
}
