/// 공유 유틸리티 모듈
/// Shared Utilities Module
///
/// 역할:
/// - 주문 ID 생성기 (게이트웨이 주문 식별자)
/// - 기타 공통 유틸리티 함수
pub mod order_id;

pub use order_id::*;
