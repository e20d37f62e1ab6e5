// Payment domain state
// 결제 도메인 상태
use std::sync::Arc;

use crate::domains::payment::gateway::PaymentGateway;
use crate::domains::payment::services::PaymentService;
use crate::domains::payment::signature::SignatureVerifier;
use crate::domains::payment::store::PaymentStore;

/// Payment domain state
/// 결제 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct PaymentState {
    pub payment_service: PaymentService,
}

impl PaymentState {
    /// Create PaymentState with store and gateway
    /// PaymentState 생성 (저장소와 게이트웨이 주입)
    pub fn new(
        store: Arc<dyn PaymentStore>,
        gateway: Arc<dyn PaymentGateway>,
        signature_verifier: SignatureVerifier,
        snap_redirect_base: String,
    ) -> Self {
        Self {
            payment_service: PaymentService::new(store, gateway, signature_verifier, snap_redirect_base),
        }
    }
}
