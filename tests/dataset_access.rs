// =====================================================
// 데이터셋 다운로드 권한 통합 테스트
// =====================================================
// 유료 데이터셋 다운로드는 (사용자, 아이템 종류, 아이템 ID)
// 조합의 PAID 트랜잭션이 있어야 허용됩니다.

mod common;
use common::*;

use uuid::Uuid;

use thesis_finder_api::domains::payment::models::transaction::{Customer, ItemType};

/// 테스트: 결제 이력 없음
///
/// 결제한 적 없는 사용자는 접근 권한이 없습니다.
#[tokio::test]
async fn test_no_purchase_no_access() {
    let (service, _store, _gateway, user_id) = setup_payment_service().await;

    let dataset_id = Uuid::new_v4();
    let has_paid = service
        .has_paid(user_id, ItemType::Dataset, &dataset_id.to_string())
        .await
        .expect("Failed to check payment");

    assert!(!has_paid);
}

/// 테스트: PENDING 결제는 권한 없음
///
/// 트랜잭션을 만들기만 하고 웹훅이 오지 않은 상태에서는
/// 다운로드가 열리지 않아야 합니다.
#[tokio::test]
async fn test_pending_purchase_does_not_unlock() {
    let (service, _store, _gateway, user_id) = setup_payment_service().await;

    let dataset_id = Uuid::new_v4();
    service
        .create_transaction(user_id, dataset_purchase_request(dataset_id, 50000))
        .await
        .expect("Failed to create transaction");

    let has_paid = service
        .has_paid(user_id, ItemType::Dataset, &dataset_id.to_string())
        .await
        .expect("Failed to check payment");

    assert!(!has_paid, "PENDING transaction should not unlock download");
}

/// 테스트: 결제 완료 후 권한 획득
///
/// settlement 웹훅이 도착하면 해당 데이터셋 다운로드가 열립니다.
#[tokio::test]
async fn test_paid_purchase_unlocks() {
    let (service, _store, _gateway, user_id) = setup_payment_service().await;

    let dataset_id = Uuid::new_v4();
    let response = service
        .create_transaction(user_id, dataset_purchase_request(dataset_id, 50000))
        .await
        .expect("Failed to create transaction");

    service
        .handle_notification(settlement_notification(&response.order_id, "50000.00"))
        .await
        .expect("Failed to handle settlement");

    let has_paid = service
        .has_paid(user_id, ItemType::Dataset, &dataset_id.to_string())
        .await
        .expect("Failed to check payment");

    assert!(has_paid);
}

/// 테스트: 다른 아이템 종류 결제는 무효
///
/// 같은 ID라도 제목 생성 결제로는 데이터셋이 열리지 않습니다.
#[tokio::test]
async fn test_wrong_item_type_does_not_unlock() {
    let (service, _store, _gateway, user_id) = setup_payment_service().await;

    let item_id = Uuid::new_v4().to_string();
    let response = service
        .create_transaction(
            user_id,
            purchase_request(ItemType::TitleGeneration, &item_id, 5000),
        )
        .await
        .expect("Failed to create transaction");

    service
        .handle_notification(settlement_notification(&response.order_id, "5000.00"))
        .await
        .expect("Failed to handle settlement");

    let has_paid = service
        .has_paid(user_id, ItemType::Dataset, &item_id)
        .await
        .expect("Failed to check payment");

    assert!(!has_paid, "TITLE_GENERATION payment should not unlock dataset");
}

/// 테스트: 타인의 결제는 무효
///
/// 다른 사용자가 결제한 데이터셋은 열리지 않습니다.
#[tokio::test]
async fn test_other_user_purchase_does_not_unlock() {
    let (service, store, _gateway, buyer) = setup_payment_service().await;

    // 결제하지 않은 두 번째 사용자
    let other_user = Uuid::new_v4();
    store
        .add_customer(
            other_user,
            Customer {
                email: "second.student@example.com".to_string(),
                name: None,
            },
        )
        .await;

    let dataset_id = Uuid::new_v4();
    let response = service
        .create_transaction(buyer, dataset_purchase_request(dataset_id, 50000))
        .await
        .expect("Failed to create transaction");

    service
        .handle_notification(settlement_notification(&response.order_id, "50000.00"))
        .await
        .expect("Failed to handle settlement");

    let buyer_has_paid = service
        .has_paid(buyer, ItemType::Dataset, &dataset_id.to_string())
        .await
        .expect("Failed to check payment");
    let other_has_paid = service
        .has_paid(other_user, ItemType::Dataset, &dataset_id.to_string())
        .await
        .expect("Failed to check payment");

    assert!(buyer_has_paid);
    assert!(!other_has_paid, "Another user's payment should not unlock");
}

/// 테스트: 다른 데이터셋 결제는 무효
#[tokio::test]
async fn test_different_dataset_does_not_unlock() {
    let (service, _store, _gateway, user_id) = setup_payment_service().await;

    let purchased = Uuid::new_v4();
    let other = Uuid::new_v4();

    let response = service
        .create_transaction(user_id, dataset_purchase_request(purchased, 50000))
        .await
        .expect("Failed to create transaction");
    service
        .handle_notification(settlement_notification(&response.order_id, "50000.00"))
        .await
        .expect("Failed to handle settlement");

    let has_paid = service
        .has_paid(user_id, ItemType::Dataset, &other.to_string())
        .await
        .expect("Failed to check payment");

    assert!(!has_paid);
}
