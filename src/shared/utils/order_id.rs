/// 게이트웨이 주문 ID 생성기
/// Gateway order ID generator
///
/// 역할:
/// - 결제 게이트웨이에 전달할 주문 식별자 생성
/// - UUID v4 기반이라 동시 요청에서도 충돌하지 않음
///   (타임스탬프 연결 방식은 같은 사용자의 동시 요청에서 충돌할 수 있어 사용하지 않음)

use uuid::Uuid;

/// 주문 ID prefix
pub const ORDER_ID_PREFIX: &str = "ORDER-";

/// 새 주문 ID 생성 ("ORDER-{uuid}")
/// Generate a new gateway order id ("ORDER-{uuid}")
pub fn generate_order_id() -> String {
    format!("{}{}", ORDER_ID_PREFIX, Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn order_ids_carry_prefix_and_uuid() {
        let order_id = generate_order_id();
        assert!(order_id.starts_with(ORDER_ID_PREFIX));

        let suffix = &order_id[ORDER_ID_PREFIX.len()..];
        assert!(Uuid::parse_str(suffix).is_ok());
    }

    #[test]
    fn order_ids_are_unique_across_generations() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_order_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
