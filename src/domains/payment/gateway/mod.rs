// =====================================================
// 결제 게이트웨이 모듈
// Payment Gateway Module
// =====================================================
// 외부 결제 게이트웨이(Midtrans Snap)와의 통신을 담당합니다.
//
// 구조:
// - PaymentGateway trait: 게이트웨이 인터페이스 (구현체와 분리)
// - midtrans: 실제 HTTP 구현
// - mock: 테스트용 구현
//
// Service 계층은 trait만 참조하므로 테스트에서 가짜 게이트웨이로
// 교체할 수 있습니다.
// =====================================================

pub mod midtrans;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

use crate::domains::payment::models::transaction::Customer;

pub use midtrans::MidtransClient;
pub use mock::MockGateway;

/// 게이트웨이 주문 요청
/// Gateway order request (token issuance)
#[derive(Debug, Clone)]
pub struct SnapOrderRequest {
    /// 주문 식별자 (웹훅이 이 값으로 돌아온다)
    pub order_id: String,
    /// 총액 (IDR 정수)
    pub gross_amount: i64,
    /// 구매자 정보
    pub customer: Customer,
    /// 주문 아이템 목록
    pub items: Vec<SnapOrderItem>,
}

/// 게이트웨이 주문 아이템
/// Gateway order line item
#[derive(Debug, Clone)]
pub struct SnapOrderItem {
    pub id: String,
    pub price: i64,
    pub quantity: u32,
    pub name: String,
}

/// 게이트웨이 응답 (결제 토큰)
/// Gateway response (payment token)
#[derive(Debug, Clone)]
pub struct SnapToken {
    /// 결제창을 여는 데 쓰는 토큰
    pub token: String,
    /// 결제 페이지 URL (게이트웨이가 생략할 수 있음)
    pub redirect_url: Option<String>,
}

/// 결제 게이트웨이 인터페이스
/// Payment gateway interface
///
/// 토큰 발급 한 가지만 담당한다. 상태 변경은 게이트웨이가 웹훅으로
/// 통지하므로 여기서 다루지 않는다. 호출 실패(타임아웃 포함)는 그대로
/// 전파되고, 호출자는 실패 시 아무것도 저장하지 않는다.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// 결제 토큰 요청
    /// Request a payment token for the given order
    async fn create_snap_token(&self, request: &SnapOrderRequest) -> Result<SnapToken>;
}
