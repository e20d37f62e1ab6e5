use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::PaymentStore;
use crate::domains::payment::models::transaction::{
    Customer, ItemType, Transaction, TransactionCreate, TransactionStatus,
};

/// 인메모리 결제 저장소 (테스트용 구현)
/// In-memory payment store (implementation for testing)
///
/// DB 없이 결제 서비스를 돌릴 수 있게 합니다. 상태 갱신은
/// PostgreSQL 구현과 같은 조건부 갱신 규칙을 따릅니다.
pub struct InMemoryPaymentStore {
    customers: Mutex<HashMap<Uuid, Customer>>,
    transactions: Mutex<Vec<Transaction>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self {
            customers: Mutex::new(HashMap::new()),
            transactions: Mutex::new(Vec::new()),
        }
    }

    /// 테스트 고객 등록
    pub async fn add_customer(&self, user_id: Uuid, customer: Customer) {
        self.customers.lock().await.insert(user_id, customer);
    }

    /// 저장된 트랜잭션 스냅샷 (테스트 검증용)
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.transactions.lock().await.clone()
    }
}

impl Default for InMemoryPaymentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn find_customer(&self, user_id: Uuid) -> Result<Option<Customer>> {
        Ok(self.customers.lock().await.get(&user_id).cloned())
    }

    async fn create_transaction(&self, tx_create: &TransactionCreate) -> Result<Transaction> {
        let now = Utc::now();
        let transaction = Transaction {
            id: Uuid::new_v4(),
            user_id: tx_create.user_id,
            item_type: tx_create.item_type,
            item_id: tx_create.item_id.clone(),
            amount: tx_create.amount,
            order_id: tx_create.order_id.clone(),
            transaction_token: tx_create.transaction_token.clone(),
            status: TransactionStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.transactions.lock().await.push(transaction.clone());
        Ok(transaction)
    }

    async fn get_transaction(&self, id: Uuid) -> Result<Option<Transaction>> {
        let transactions = self.transactions.lock().await;
        Ok(transactions.iter().find(|tx| tx.id == id).cloned())
    }

    async fn get_by_order_id(&self, order_id: &str) -> Result<Option<Transaction>> {
        let transactions = self.transactions.lock().await;
        Ok(transactions.iter().find(|tx| tx.order_id == order_id).cloned())
    }

    async fn update_status_by_order_id(
        &self,
        order_id: &str,
        status: TransactionStatus,
    ) -> Result<Option<Transaction>> {
        let mut transactions = self.transactions.lock().await;

        match transactions.iter_mut().find(|tx| tx.order_id == order_id) {
            // PAID는 말단 상태, 같은 상태로의 갱신은 무시 (조건부 UPDATE와 동일)
            Some(tx) if tx.status != TransactionStatus::Paid && tx.status != status => {
                tx.status = status;
                tx.updated_at = Utc::now();
                Ok(Some(tx.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn find_paid_for_item(
        &self,
        user_id: Uuid,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<Option<Transaction>> {
        let transactions = self.transactions.lock().await;
        Ok(transactions
            .iter()
            .find(|tx| {
                tx.user_id == user_id
                    && tx.item_type == item_type
                    && tx.item_id == item_id
                    && tx.status == TransactionStatus::Paid
            })
            .cloned())
    }
}
