// =====================================================
// 결제 저장소 모듈
// Payment Store Module
// =====================================================
// 결제 서비스가 사용하는 영속성 인터페이스입니다.
//
// 구조:
// - PaymentStore trait: 저장소 인터페이스
// - postgres: PostgreSQL 구현 (레포지토리 위임)
// - memory: 테스트용 인메모리 구현
// =====================================================

pub mod memory;
pub mod postgres;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domains::payment::models::transaction::{
    Customer, ItemType, Transaction, TransactionCreate, TransactionStatus,
};

pub use memory::InMemoryPaymentStore;
pub use postgres::PgPaymentStore;

/// 결제 저장소 인터페이스
/// Payment persistence interface
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// 사용자 ID로 결제 고객 정보 조회 (없으면 None)
    async fn find_customer(&self, user_id: Uuid) -> Result<Option<Customer>>;

    /// 트랜잭션 저장 (상태는 PENDING으로 시작)
    async fn create_transaction(&self, tx_create: &TransactionCreate) -> Result<Transaction>;

    /// 트랜잭션 ID로 조회
    async fn get_transaction(&self, id: Uuid) -> Result<Option<Transaction>>;

    /// 주문 식별자로 조회 (웹훅 매칭 경로)
    async fn get_by_order_id(&self, order_id: &str) -> Result<Option<Transaction>>;

    /// 주문 식별자로 상태 갱신
    ///
    /// 단일 조건부 갱신으로 수행된다:
    /// - 해당 주문이 없으면 None
    /// - 이미 PAID이면 변경하지 않고 None (말단 상태)
    /// - 이미 같은 상태이면 변경하지 않고 None (재전송 무시)
    /// - 그 외에는 갱신된 트랜잭션 반환
    async fn update_status_by_order_id(
        &self,
        order_id: &str,
        status: TransactionStatus,
    ) -> Result<Option<Transaction>>;

    /// 해당 아이템에 대한 PAID 트랜잭션 조회 (다운로드 권한 확인)
    async fn find_paid_for_item(
        &self,
        user_id: Uuid,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<Option<Transaction>>;
}
