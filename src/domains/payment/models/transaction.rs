use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;
use uuid::Uuid;

/// 구매 아이템 종류
/// Purchasable item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Dataset,
    Outline,
    TitleGeneration,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Dataset => "DATASET",
            ItemType::Outline => "OUTLINE",
            ItemType::TitleGeneration => "TITLE_GENERATION",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "DATASET" => Some(ItemType::Dataset),
            "OUTLINE" => Some(ItemType::Outline),
            "TITLE_GENERATION" => Some(ItemType::TitleGeneration),
            _ => None,
        }
    }
}

/// 트랜잭션 상태
/// Transaction status
///
/// PENDING으로 시작해서 웹훅 통지로만 바뀐다. PAID는 최종 상태.
/// EXPIRED는 스키마에 존재하지만 상태 매핑이 만들어내지는 않는다
/// (vendor의 "expire"는 FAILED로 매핑됨).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Paid,
    Failed,
    Expired,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Paid => "PAID",
            TransactionStatus::Failed => "FAILED",
            TransactionStatus::Expired => "EXPIRED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(TransactionStatus::Pending),
            "PAID" => Some(TransactionStatus::Paid),
            "FAILED" => Some(TransactionStatus::Failed),
            "EXPIRED" => Some(TransactionStatus::Expired),
            _ => None,
        }
    }
}

/// 트랜잭션 모델 (DB 저장용)
/// Transaction model (database row)
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub item_type: ItemType,
    pub item_id: String,
    pub amount: i64,
    /// 게이트웨이에 전달한 주문 식별자 (웹훅 매칭 키)
    pub order_id: String,
    /// 게이트웨이가 발급한 결제 토큰 (생성 성공 후에만 존재)
    pub transaction_token: Option<String>,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 트랜잭션 생성 요청 (내부용, 게이트웨이 성공 후 저장)
/// Transaction creation data (internal, persisted after gateway success)
#[derive(Debug, Clone)]
pub struct TransactionCreate {
    pub user_id: Uuid,
    pub item_type: ItemType,
    pub item_id: String,
    pub amount: i64,
    pub order_id: String,
    pub transaction_token: Option<String>,
}

/// 결제 고객 정보 (게이트웨이 customer_details로 전달)
/// Billing contact forwarded to the gateway as customer details
#[derive(Debug, Clone)]
pub struct Customer {
    pub email: String,
    pub name: Option<String>,
}

// 트랜잭션 생성 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = CreateTransactionRequest)]
pub struct CreateTransactionRequest {
    /// 아이템 종류
    /// Item type
    #[schema(example = "DATASET")]
    pub item_type: ItemType,

    /// 아이템 ID (itemType에 따라 해석)
    /// Item ID (interpretation depends on itemType)
    #[schema(example = "7be2a2e3-13e8-4c6c-8f4f-1f54a3a7e6d2")]
    pub item_id: String,

    /// 결제 금액 (IDR, 정수)
    /// Amount (IDR, whole units)
    #[schema(example = 50000)]
    pub amount: i64,
}

// 트랜잭션 생성 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = CreateTransactionResponse)]
pub struct CreateTransactionResponse {
    /// 생성된 트랜잭션 ID
    /// Created transaction ID
    pub transaction_id: Uuid,

    /// 게이트웨이 주문 ID
    /// Gateway order ID
    #[schema(example = "ORDER-7be2a2e3-13e8-4c6c-8f4f-1f54a3a7e6d2")]
    pub order_id: String,

    /// 게이트웨이 결제 토큰 (Snap)
    /// Gateway payment token (Snap)
    pub token: String,

    /// 결제창 redirect URL
    /// Payment page redirect URL
    pub redirect_url: String,
}

// 트랜잭션 상태 조회 응답 모델
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = TransactionStatusResponse)]
pub struct TransactionStatusResponse {
    /// 현재 상태
    /// Current status
    pub status: TransactionStatus,

    /// 결제 금액
    /// Amount
    #[schema(example = 50000)]
    pub amount: i64,

    /// 아이템 종류
    /// Item type
    #[schema(example = "DATASET")]
    pub item_type: ItemType,
}

impl From<&Transaction> for TransactionStatusResponse {
    fn from(tx: &Transaction) -> Self {
        Self {
            status: tx.status,
            amount: tx.amount,
            item_type: tx.item_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_round_trips_storage_strings() {
        for item_type in [ItemType::Dataset, ItemType::Outline, ItemType::TitleGeneration] {
            assert_eq!(ItemType::parse(item_type.as_str()), Some(item_type));
        }
        assert_eq!(ItemType::parse("PAPER"), None);
    }

    #[test]
    fn status_round_trips_storage_strings() {
        for status in [
            TransactionStatus::Pending,
            TransactionStatus::Paid,
            TransactionStatus::Failed,
            TransactionStatus::Expired,
        ] {
            assert_eq!(TransactionStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TransactionStatus::parse("paid"), None);
    }

    #[test]
    fn request_deserializes_camel_case_wire_format() {
        let request: CreateTransactionRequest = serde_json::from_str(
            r#"{"itemType": "DATASET", "itemId": "d1", "amount": 50000}"#,
        )
        .unwrap();

        assert_eq!(request.item_type, ItemType::Dataset);
        assert_eq!(request.item_id, "d1");
        assert_eq!(request.amount, 50000);
    }
}
