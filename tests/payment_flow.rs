// =====================================================
// 결제 플로우 통합 테스트
// =====================================================

mod common;
use common::*;

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use thesis_finder_api::domains::payment::gateway::MockGateway;
use thesis_finder_api::domains::payment::models::transaction::{ItemType, TransactionStatus};
use thesis_finder_api::domains::payment::services::NotificationOutcome;
use thesis_finder_api::shared::errors::PaymentError;

/// 테스트: 트랜잭션 생성
///
/// 생성 직후 PENDING 상태로 저장되고, 응답에 게이트웨이 토큰과
/// ORDER- 접두사 주문 ID가 들어 있는지 확인합니다.
#[tokio::test]
async fn test_create_transaction() {
    let (service, store, _gateway, user_id) = setup_payment_service().await;

    let dataset_id = Uuid::new_v4();
    let response = service
        .create_transaction(user_id, dataset_purchase_request(dataset_id, 50000))
        .await
        .expect("Failed to create transaction");

    assert_eq!(response.token, "mock-snap-token");
    assert!(
        response.order_id.starts_with("ORDER-"),
        "order_id should have ORDER- prefix: {}",
        response.order_id
    );
    assert!(!response.redirect_url.is_empty());

    // 저장소에 PENDING 트랜잭션 한 건
    let transactions = store.transactions().await;
    assert_eq!(transactions.len(), 1);
    let stored = &transactions[0];
    assert_eq!(stored.id, response.transaction_id);
    assert_eq!(stored.order_id, response.order_id);
    assert_eq!(stored.user_id, user_id);
    assert_eq!(stored.item_type, ItemType::Dataset);
    assert_eq!(stored.item_id, dataset_id.to_string());
    assert_eq!(stored.amount, 50000);
    assert_eq!(stored.status, TransactionStatus::Pending);
    assert_eq!(stored.transaction_token.as_deref(), Some("mock-snap-token"));
}

/// 테스트: 게이트웨이로 전달되는 주문 내용
///
/// 게이트웨이가 받은 요청에 주문 ID, 금액, 고객 이메일이
/// 그대로 들어가는지 확인합니다.
#[tokio::test]
async fn test_gateway_receives_order_details() {
    let (service, _store, gateway, user_id) = setup_payment_service().await;

    let dataset_id = Uuid::new_v4();
    let response = service
        .create_transaction(user_id, dataset_purchase_request(dataset_id, 30000))
        .await
        .expect("Failed to create transaction");

    let requests = gateway.requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.order_id, response.order_id);
    assert_eq!(request.gross_amount, 30000);
    assert_eq!(request.customer.email, "grad.student@example.com");
    assert_eq!(request.items.len(), 1);
    assert_eq!(request.items[0].id, dataset_id.to_string());
    assert_eq!(request.items[0].price, 30000);
    assert_eq!(request.items[0].quantity, 1);
}

/// 테스트: 게이트웨이 실패 시 트랜잭션 미생성
///
/// 토큰 발급이 실패하면 GatewayError가 반환되고
/// 저장소에 아무것도 남지 않아야 합니다.
#[tokio::test]
async fn test_gateway_failure_leaves_no_transaction() {
    let gateway = Arc::new(MockGateway::failing("connection timed out"));
    let (service, store, _gateway, user_id) = setup_with_gateway(gateway).await;

    let result = service
        .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), 50000))
        .await;

    match result {
        Err(PaymentError::GatewayError(message)) => {
            assert!(
                message.contains("connection timed out"),
                "Unexpected gateway error message: {}",
                message
            );
        }
        other => panic!("Expected GatewayError, got {:?}", other.map(|r| r.order_id)),
    }

    // 게이트웨이 실패 후 저장소는 비어 있어야 함
    assert!(store.transactions().await.is_empty());
}

/// 테스트: 등록되지 않은 사용자
///
/// 모르는 사용자면 UserNotFound를 반환하고 게이트웨이를
/// 호출하지 않아야 합니다.
#[tokio::test]
async fn test_unknown_user_rejected() {
    let (service, store, gateway, _user_id) = setup_payment_service().await;

    let stranger = Uuid::new_v4();
    let result = service
        .create_transaction(stranger, dataset_purchase_request(Uuid::new_v4(), 50000))
        .await;

    match result {
        Err(PaymentError::UserNotFound { id }) => assert_eq!(id, stranger),
        other => panic!("Expected UserNotFound, got {:?}", other.map(|r| r.order_id)),
    }

    assert!(gateway.requests().await.is_empty());
    assert!(store.transactions().await.is_empty());
}

/// 테스트: 금액 검증
///
/// 0 이하 금액은 게이트웨이 호출 전에 거부됩니다.
#[tokio::test]
async fn test_rejects_non_positive_amount() {
    let (service, store, gateway, user_id) = setup_payment_service().await;

    for amount in [0, -50000] {
        let result = service
            .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), amount))
            .await;
        assert!(
            matches!(result, Err(PaymentError::ValidationError(_))),
            "Amount {} should be rejected",
            amount
        );
    }

    assert!(gateway.requests().await.is_empty());
    assert!(store.transactions().await.is_empty());
}

/// 테스트: 빈 아이템 ID 검증
#[tokio::test]
async fn test_rejects_blank_item_id() {
    let (service, _store, _gateway, user_id) = setup_payment_service().await;

    let result = service
        .create_transaction(user_id, purchase_request(ItemType::Dataset, "   ", 50000))
        .await;

    assert!(matches!(result, Err(PaymentError::ValidationError(_))));
}

/// 테스트: settlement 통지로 결제 완료
///
/// 생성 -> settlement 웹훅 -> 상태 조회까지 전체 플로우를 확인합니다.
#[tokio::test]
async fn test_settlement_marks_paid() {
    let (service, _store, _gateway, user_id) = setup_payment_service().await;

    let response = service
        .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), 50000))
        .await
        .expect("Failed to create transaction");

    let outcome = service
        .handle_notification(settlement_notification(&response.order_id, "50000.00"))
        .await
        .expect("Failed to handle notification");

    match outcome {
        NotificationOutcome::Applied(transaction) => {
            assert_eq!(transaction.status, TransactionStatus::Paid);
            assert_eq!(transaction.order_id, response.order_id);
        }
        other => panic!("Expected Applied, got {:?}", other),
    }

    // 상태 조회로도 PAID가 보여야 함
    let status = service
        .get_status(response.transaction_id)
        .await
        .expect("Failed to get status");
    assert_eq!(status.status, TransactionStatus::Paid);
    assert_eq!(status.amount, 50000);
    assert_eq!(status.item_type, ItemType::Dataset);
}

/// 테스트: 동일 통지 재전송
///
/// 게이트웨이는 같은 웹훅을 여러 번 보낼 수 있습니다.
/// 재전송은 Unchanged로 처리되고 상태는 그대로여야 합니다.
#[tokio::test]
async fn test_replayed_notification_is_unchanged() {
    let (service, _store, _gateway, user_id) = setup_payment_service().await;

    let response = service
        .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), 50000))
        .await
        .expect("Failed to create transaction");

    let notification = settlement_notification(&response.order_id, "50000.00");

    let first = service
        .handle_notification(notification.clone())
        .await
        .expect("Failed to handle notification");
    assert!(matches!(first, NotificationOutcome::Applied(_)));

    // 같은 통지를 한 번 더
    let second = service
        .handle_notification(notification)
        .await
        .expect("Failed to handle replayed notification");

    match second {
        NotificationOutcome::Unchanged(transaction) => {
            assert_eq!(transaction.status, TransactionStatus::Paid);
        }
        other => panic!("Expected Unchanged, got {:?}", other),
    }
}

/// 테스트: PAID는 말단 상태
///
/// 결제 완료 후 뒤늦게 도착한 pending/deny 통지가
/// 상태를 되돌리지 못하는지 확인합니다.
#[tokio::test]
async fn test_paid_never_regresses() {
    let (service, store, _gateway, user_id) = setup_payment_service().await;

    let response = service
        .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), 50000))
        .await
        .expect("Failed to create transaction");

    service
        .handle_notification(settlement_notification(&response.order_id, "50000.00"))
        .await
        .expect("Failed to handle settlement");

    // 뒤늦게 도착한 pending 통지
    let stale_pending =
        signed_notification(&response.order_id, "pending", None, "201", "50000.00");
    let outcome = service
        .handle_notification(stale_pending)
        .await
        .expect("Failed to handle stale notification");
    assert!(matches!(outcome, NotificationOutcome::Unchanged(_)));

    // 뒤늦게 도착한 deny 통지
    let stale_deny =
        signed_notification(&response.order_id, "deny", None, "202", "50000.00");
    let outcome = service
        .handle_notification(stale_deny)
        .await
        .expect("Failed to handle stale notification");
    assert!(matches!(outcome, NotificationOutcome::Unchanged(_)));

    let transactions = store.transactions().await;
    assert_eq!(transactions[0].status, TransactionStatus::Paid);
}

/// 테스트: capture + challenge는 보류
///
/// 사기 심사 중(challenge)인 capture 통지는 PENDING을 유지합니다.
#[tokio::test]
async fn test_capture_challenge_stays_pending() {
    let (service, store, _gateway, user_id) = setup_payment_service().await;

    let response = service
        .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), 50000))
        .await
        .expect("Failed to create transaction");

    let notification = signed_notification(
        &response.order_id,
        "capture",
        Some("challenge"),
        "201",
        "50000.00",
    );
    let outcome = service
        .handle_notification(notification)
        .await
        .expect("Failed to handle notification");

    // 이미 PENDING이므로 상태 변화 없음
    assert!(matches!(outcome, NotificationOutcome::Unchanged(_)));
    assert_eq!(store.transactions().await[0].status, TransactionStatus::Pending);
}

/// 테스트: capture + accept는 결제 완료
#[tokio::test]
async fn test_capture_accept_marks_paid() {
    let (service, _store, _gateway, user_id) = setup_payment_service().await;

    let response = service
        .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), 50000))
        .await
        .expect("Failed to create transaction");

    let notification = signed_notification(
        &response.order_id,
        "capture",
        Some("accept"),
        "200",
        "50000.00",
    );
    let outcome = service
        .handle_notification(notification)
        .await
        .expect("Failed to handle notification");

    match outcome {
        NotificationOutcome::Applied(transaction) => {
            assert_eq!(transaction.status, TransactionStatus::Paid);
        }
        other => panic!("Expected Applied, got {:?}", other),
    }
}

/// 테스트: deny 후 settlement로 복구
///
/// 실패했던 주문도 게이트웨이가 settlement를 보내면
/// FAILED -> PAID로 전환됩니다 (PAID만 말단).
#[tokio::test]
async fn test_deny_then_settlement_recovers() {
    let (service, store, _gateway, user_id) = setup_payment_service().await;

    let response = service
        .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), 50000))
        .await
        .expect("Failed to create transaction");

    let deny = signed_notification(&response.order_id, "deny", None, "202", "50000.00");
    let outcome = service
        .handle_notification(deny)
        .await
        .expect("Failed to handle deny");
    match outcome {
        NotificationOutcome::Applied(transaction) => {
            assert_eq!(transaction.status, TransactionStatus::Failed);
        }
        other => panic!("Expected Applied, got {:?}", other),
    }

    let outcome = service
        .handle_notification(settlement_notification(&response.order_id, "50000.00"))
        .await
        .expect("Failed to handle settlement");
    match outcome {
        NotificationOutcome::Applied(transaction) => {
            assert_eq!(transaction.status, TransactionStatus::Paid);
        }
        other => panic!("Expected Applied, got {:?}", other),
    }

    assert_eq!(store.transactions().await[0].status, TransactionStatus::Paid);
}

/// 테스트: expire 통지는 실패 처리
#[tokio::test]
async fn test_expire_marks_failed() {
    let (service, store, _gateway, user_id) = setup_payment_service().await;

    let response = service
        .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), 50000))
        .await
        .expect("Failed to create transaction");

    let notification =
        signed_notification(&response.order_id, "expire", None, "407", "50000.00");
    let outcome = service
        .handle_notification(notification)
        .await
        .expect("Failed to handle notification");

    assert!(matches!(outcome, NotificationOutcome::Applied(_)));
    assert_eq!(store.transactions().await[0].status, TransactionStatus::Failed);
}

/// 테스트: 서명 불일치 거부
///
/// 서명이 틀린 통지는 InvalidSignature로 거부되고
/// 상태가 바뀌지 않아야 합니다.
#[tokio::test]
async fn test_tampered_signature_rejected() {
    let (service, store, _gateway, user_id) = setup_payment_service().await;

    let response = service
        .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), 50000))
        .await
        .expect("Failed to create transaction");

    // 금액을 바꿔치기하면 서명이 맞지 않음
    let mut tampered = settlement_notification(&response.order_id, "50000.00");
    tampered.gross_amount = "1.00".to_string();

    let result = service.handle_notification(tampered).await;
    assert!(matches!(result, Err(PaymentError::InvalidSignature)));

    // 서명 자체를 위조한 경우
    let mut forged = settlement_notification(&response.order_id, "50000.00");
    forged.signature_key = "deadbeef".to_string();

    let result = service.handle_notification(forged).await;
    assert!(matches!(result, Err(PaymentError::InvalidSignature)));

    assert_eq!(store.transactions().await[0].status, TransactionStatus::Pending);
}

/// 테스트: 모르는 주문 ID
///
/// 저장소에 없는 주문에 대한 통지는 UnknownOrder로 처리됩니다.
/// (핸들러는 이 경우에도 200을 반환해 재전송을 막습니다.)
#[tokio::test]
async fn test_unknown_order_ignored() {
    let (service, _store, _gateway, _user_id) = setup_payment_service().await;

    let order_id = format!("ORDER-{}", Uuid::new_v4());
    let outcome = service
        .handle_notification(settlement_notification(&order_id, "50000.00"))
        .await
        .expect("Failed to handle notification");

    assert!(matches!(outcome, NotificationOutcome::UnknownOrder));
}

/// 테스트: 주문 ID 유일성
///
/// 연속 생성된 트랜잭션의 주문 ID가 모두 달라야
/// 웹훅이 올바른 건에 매칭됩니다.
#[tokio::test]
async fn test_order_ids_are_unique() {
    let (service, _store, _gateway, user_id) = setup_payment_service().await;

    let mut order_ids = HashSet::new();
    for _ in 0..5 {
        let response = service
            .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), 10000))
            .await
            .expect("Failed to create transaction");
        assert!(response.order_id.starts_with("ORDER-"));
        order_ids.insert(response.order_id);
    }

    assert_eq!(order_ids.len(), 5);
}

/// 테스트: 없는 트랜잭션 상태 조회
#[tokio::test]
async fn test_status_of_unknown_transaction() {
    let (service, _store, _gateway, _user_id) = setup_payment_service().await;

    let missing = Uuid::new_v4();
    let result = service.get_status(missing).await;

    match result {
        Err(PaymentError::TransactionNotFound { id }) => assert_eq!(id, missing),
        other => panic!("Expected TransactionNotFound, got {:?}", other.map(|r| r.status)),
    }
}

/// 테스트: redirect URL 폴백
///
/// 게이트웨이가 redirect URL을 주지 않으면
/// 설정된 베이스 URL과 토큰으로 조립합니다.
#[tokio::test]
async fn test_redirect_url_fallback() {
    let gateway = Arc::new(MockGateway::without_redirect());
    let (service, _store, _gateway, user_id) = setup_with_gateway(gateway).await;

    let response = service
        .create_transaction(user_id, dataset_purchase_request(Uuid::new_v4(), 50000))
        .await
        .expect("Failed to create transaction");

    assert_eq!(
        response.redirect_url,
        format!("{}/{}", SNAP_REDIRECT_BASE, response.token)
    );
}
