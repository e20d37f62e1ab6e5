use std::sync::Arc;
use uuid::Uuid;

use crate::domains::payment::gateway::{PaymentGateway, SnapOrderItem, SnapOrderRequest};
use crate::domains::payment::models::notification::{map_notification_status, PaymentNotification};
use crate::domains::payment::models::transaction::{
    CreateTransactionRequest, CreateTransactionResponse, ItemType, Transaction, TransactionCreate,
    TransactionStatusResponse,
};
use crate::domains::payment::signature::SignatureVerifier;
use crate::domains::payment::store::PaymentStore;
use crate::shared::errors::PaymentError;
use crate::shared::utils::generate_order_id;

/// 웹훅 처리 결과
/// Notification handling outcome
///
/// 세 경우 모두 게이트웨이에는 200으로 응답한다 (재전송 방지).
#[derive(Debug)]
pub enum NotificationOutcome {
    /// 상태가 실제로 바뀜
    Applied(Transaction),
    /// 이미 같은 상태이거나 PAID 말단 상태 (재전송 등)
    Unchanged(Transaction),
    /// 모르는 주문 식별자
    UnknownOrder,
}

// 결제 서비스
// PaymentService: handles payment business logic
#[derive(Clone)]
pub struct PaymentService {
    store: Arc<dyn PaymentStore>,
    gateway: Arc<dyn PaymentGateway>,
    signature_verifier: SignatureVerifier,
    snap_redirect_base: String,
}

impl PaymentService {
    // 생성자 (저장소/게이트웨이 주입)
    pub fn new(
        store: Arc<dyn PaymentStore>,
        gateway: Arc<dyn PaymentGateway>,
        signature_verifier: SignatureVerifier,
        snap_redirect_base: String,
    ) -> Self {
        Self {
            store,
            gateway,
            signature_verifier,
            snap_redirect_base,
        }
    }

    // 트랜잭션 생성 (비즈니스 로직)
    //
    // 게이트웨이 토큰 발급이 성공한 뒤에만 저장한다.
    // 게이트웨이 호출이 실패하면 아무것도 남지 않는다.
    pub async fn create_transaction(
        &self,
        user_id: Uuid,
        request: CreateTransactionRequest,
    ) -> Result<CreateTransactionResponse, PaymentError> {
        // 1. 요청 검증
        if request.amount <= 0 {
            return Err(PaymentError::ValidationError(
                "Amount must be a positive integer".to_string(),
            ));
        }
        if request.item_id.trim().is_empty() {
            return Err(PaymentError::ValidationError(
                "itemId is required".to_string(),
            ));
        }

        // 2. 고객 정보 조회
        let customer = self
            .store
            .find_customer(user_id)
            .await
            .map_err(|e| PaymentError::DatabaseError(format!("Failed to fetch customer: {}", e)))?
            .ok_or(PaymentError::UserNotFound { id: user_id })?;

        // 3. 주문 식별자 생성 (웹훅이 이 값으로 돌아온다)
        let order_id = generate_order_id();

        // 4. 게이트웨이 토큰 발급
        let snap_request = SnapOrderRequest {
            order_id: order_id.clone(),
            gross_amount: request.amount,
            customer,
            items: vec![SnapOrderItem {
                id: request.item_id.clone(),
                price: request.amount,
                quantity: 1,
                name: item_name(request.item_type).to_string(),
            }],
        };

        let snap_token = self
            .gateway
            .create_snap_token(&snap_request)
            .await
            .map_err(|e| PaymentError::GatewayError(format!("Snap token request failed: {}", e)))?;

        // 5. 트랜잭션 저장 (PENDING)
        let transaction = self
            .store
            .create_transaction(&TransactionCreate {
                user_id,
                item_type: request.item_type,
                item_id: request.item_id,
                amount: request.amount,
                order_id: order_id.clone(),
                transaction_token: Some(snap_token.token.clone()),
            })
            .await
            .map_err(|e| {
                PaymentError::DatabaseError(format!("Failed to create transaction: {}", e))
            })?;

        log::info!(
            "Transaction created: id={}, order_id={}, amount={}",
            transaction.id,
            transaction.order_id,
            transaction.amount
        );

        // 6. redirect URL (게이트웨이가 안 주면 설정값으로 조립)
        let redirect_url = snap_token
            .redirect_url
            .unwrap_or_else(|| format!("{}/{}", self.snap_redirect_base, snap_token.token));

        Ok(CreateTransactionResponse {
            transaction_id: transaction.id,
            order_id: transaction.order_id,
            token: snap_token.token,
            redirect_url,
        })
    }

    // 웹훅 통지 처리 (비즈니스 로직)
    pub async fn handle_notification(
        &self,
        notification: PaymentNotification,
    ) -> Result<NotificationOutcome, PaymentError> {
        // 1. 서명 검증 (실패 시 아무것도 바꾸지 않음)
        if !self.signature_verifier.verify(&notification) {
            log::warn!(
                "Notification signature mismatch: order_id={}",
                notification.order_id
            );
            return Err(PaymentError::InvalidSignature);
        }

        // 2. 게이트웨이 상태 -> 내부 상태 매핑
        let new_status = map_notification_status(
            &notification.transaction_status,
            notification.fraud_status.as_deref(),
        );

        // 3. 조건부 갱신 (PAID 말단, 동일 상태 무시 규칙은 저장소가 보장)
        let updated = self
            .store
            .update_status_by_order_id(&notification.order_id, new_status)
            .await
            .map_err(|e| {
                PaymentError::DatabaseError(format!("Failed to update transaction: {}", e))
            })?;

        if let Some(transaction) = updated {
            log::info!(
                "Notification applied: order_id={}, status={}",
                transaction.order_id,
                transaction.status.as_str()
            );
            return Ok(NotificationOutcome::Applied(transaction));
        }

        // 4. 갱신 안 됨: 재전송인지 모르는 주문인지 구분
        let existing = self
            .store
            .get_by_order_id(&notification.order_id)
            .await
            .map_err(|e| {
                PaymentError::DatabaseError(format!("Failed to fetch transaction: {}", e))
            })?;

        match existing {
            Some(transaction) => Ok(NotificationOutcome::Unchanged(transaction)),
            None => {
                log::warn!("Notification for unknown order: {}", notification.order_id);
                Ok(NotificationOutcome::UnknownOrder)
            }
        }
    }

    // 트랜잭션 상태 조회
    pub async fn get_status(
        &self,
        transaction_id: Uuid,
    ) -> Result<TransactionStatusResponse, PaymentError> {
        let transaction = self
            .store
            .get_transaction(transaction_id)
            .await
            .map_err(|e| {
                PaymentError::DatabaseError(format!("Failed to fetch transaction: {}", e))
            })?
            .ok_or(PaymentError::TransactionNotFound { id: transaction_id })?;

        Ok(TransactionStatusResponse::from(&transaction))
    }

    // 해당 아이템의 결제 완료 여부 (다운로드 권한 판정에 사용)
    pub async fn has_paid(
        &self,
        user_id: Uuid,
        item_type: ItemType,
        item_id: &str,
    ) -> Result<bool, PaymentError> {
        let paid = self
            .store
            .find_paid_for_item(user_id, item_type, item_id)
            .await
            .map_err(|e| {
                PaymentError::DatabaseError(format!("Failed to check paid transaction: {}", e))
            })?;

        Ok(paid.is_some())
    }
}

// 게이트웨이 영수증에 표시되는 아이템 이름
fn item_name(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Dataset => "Dataset download",
        ItemType::Outline => "Thesis outline generation",
        ItemType::TitleGeneration => "Thesis title generation",
    }
}
