// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 결제 플로우 테스트에서 공통으로 사용하는 셋업 함수 제공
//
// 실제 게이트웨이/DB 대신 MockGateway와 InMemoryPaymentStore를
// 주입하므로 외부 인프라 없이 돌아갑니다.
// =====================================================

use std::sync::Arc;

use uuid::Uuid;

use thesis_finder_api::domains::payment::gateway::MockGateway;
use thesis_finder_api::domains::payment::models::notification::PaymentNotification;
use thesis_finder_api::domains::payment::models::transaction::{
    CreateTransactionRequest, Customer, ItemType,
};
use thesis_finder_api::domains::payment::services::PaymentService;
use thesis_finder_api::domains::payment::signature::SignatureVerifier;
use thesis_finder_api::domains::payment::store::InMemoryPaymentStore;

// 테스트용 상수
pub const TEST_SERVER_KEY: &str = "SB-Mid-server-test-key";
pub const SNAP_REDIRECT_BASE: &str = "https://app.sandbox.example/snap/v2/vtweb";

/// 테스트 셋업: 고객 한 명이 등록된 저장소 + 성공하는 게이트웨이
///
/// 반환: (서비스, 저장소, 게이트웨이, 등록된 사용자 ID)
pub async fn setup_payment_service() -> (
    PaymentService,
    Arc<InMemoryPaymentStore>,
    Arc<MockGateway>,
    Uuid,
) {
    let gateway = Arc::new(MockGateway::new());
    setup_with_gateway(gateway).await
}

/// 테스트 셋업: 게이트웨이를 직접 지정 (실패 시나리오용)
pub async fn setup_with_gateway(
    gateway: Arc<MockGateway>,
) -> (
    PaymentService,
    Arc<InMemoryPaymentStore>,
    Arc<MockGateway>,
    Uuid,
) {
    let store = Arc::new(InMemoryPaymentStore::new());

    let user_id = Uuid::new_v4();
    store
        .add_customer(
            user_id,
            Customer {
                email: "grad.student@example.com".to_string(),
                name: Some("Test Student".to_string()),
            },
        )
        .await;

    let service = PaymentService::new(
        store.clone(),
        gateway.clone(),
        SignatureVerifier::new(TEST_SERVER_KEY.to_string()),
        SNAP_REDIRECT_BASE.to_string(),
    );

    (service, store, gateway, user_id)
}

/// 데이터셋 구매 요청 생성
pub fn dataset_purchase_request(dataset_id: Uuid, amount: i64) -> CreateTransactionRequest {
    serde_json::from_value(serde_json::json!({
        "itemType": "DATASET",
        "itemId": dataset_id.to_string(),
        "amount": amount,
    }))
    .expect("Failed to build purchase request")
}

/// 아이템 종류를 지정한 구매 요청 생성
pub fn purchase_request(
    item_type: ItemType,
    item_id: &str,
    amount: i64,
) -> CreateTransactionRequest {
    CreateTransactionRequest {
        item_type,
        item_id: item_id.to_string(),
        amount,
    }
}

/// 올바른 서명이 붙은 웹훅 통지 생성
///
/// 게이트웨이가 보내는 형식 그대로: 서명은
/// sha512(order_id + status_code + gross_amount + server_key)
pub fn signed_notification(
    order_id: &str,
    transaction_status: &str,
    fraud_status: Option<&str>,
    status_code: &str,
    gross_amount: &str,
) -> PaymentNotification {
    let verifier = SignatureVerifier::new(TEST_SERVER_KEY.to_string());
    let signature = verifier.compute(order_id, status_code, gross_amount);

    let mut payload = serde_json::json!({
        "order_id": order_id,
        "transaction_status": transaction_status,
        "status_code": status_code,
        "gross_amount": gross_amount,
        "signature_key": signature,
    });
    if let Some(fraud) = fraud_status {
        payload["fraud_status"] = serde_json::Value::String(fraud.to_string());
    }

    serde_json::from_value(payload).expect("Failed to build notification")
}

/// settlement 통지 (결제 완료)
pub fn settlement_notification(order_id: &str, gross_amount: &str) -> PaymentNotification {
    signed_notification(order_id, "settlement", None, "200", gross_amount)
}
