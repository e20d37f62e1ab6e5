use serde::Deserialize;
use utoipa::ToSchema;
use crate::domains::payment::models::transaction::TransactionStatus;

/// 게이트웨이 웹훅 통지 페이로드
/// Gateway webhook notification payload
///
/// 필수 필드가 빠진 페이로드는 역직렬화 단계에서 거부된다
/// (조용히 PENDING으로 처리하지 않음). 필드 이름은 vendor 형식 그대로.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(as = PaymentNotification)]
pub struct PaymentNotification {
    /// 주문 식별자 (트랜잭션 생성 시 게이트웨이에 전달한 값)
    #[schema(example = "ORDER-7be2a2e3-13e8-4c6c-8f4f-1f54a3a7e6d2")]
    pub order_id: String,

    /// vendor 상태 값 (capture, settlement, deny, cancel, expire, pending, ...)
    #[schema(example = "settlement")]
    pub transaction_status: String,

    /// 카드 결제의 사기 판정 (capture일 때만 의미 있음)
    #[schema(example = "accept")]
    pub fraud_status: Option<String>,

    /// HTTP 상태 코드 문자열 (서명 입력에 포함됨)
    #[schema(example = "200")]
    pub status_code: String,

    /// 총액 문자열 (서명 입력에 포함됨, 예: "50000.00")
    #[schema(example = "50000.00")]
    pub gross_amount: String,

    /// 게이트웨이가 계산한 SHA-512 서명
    pub signature_key: String,
}

/// vendor 상태 -> 내부 상태 매핑
/// Map vendor status vocabulary to the canonical transaction status.
///
/// | transaction_status      | fraud_status | 결과    |
/// |-------------------------|--------------|---------|
/// | capture                 | challenge    | PENDING |
/// | capture                 | accept       | PAID    |
/// | settlement              | (any)        | PAID    |
/// | deny / cancel / expire  | (any)        | FAILED  |
/// | pending                 | (any)        | PENDING |
/// | 그 외                    | —            | PENDING |
///
/// 알 수 없는 상태가 PENDING으로 매핑되는 것은 의도된 동작이다:
/// PENDING 행에 적용하면 아무 변화가 없고, PAID 행은 저장소의
/// 조건부 UPDATE가 보호한다.
pub fn map_notification_status(
    transaction_status: &str,
    fraud_status: Option<&str>,
) -> TransactionStatus {
    match transaction_status {
        "capture" => match fraud_status {
            Some("challenge") => TransactionStatus::Pending,
            Some("accept") => TransactionStatus::Paid,
            _ => TransactionStatus::Pending,
        },
        "settlement" => TransactionStatus::Paid,
        "deny" | "cancel" | "expire" => TransactionStatus::Failed,
        "pending" => TransactionStatus::Pending,
        _ => TransactionStatus::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_follows_fraud_status() {
        assert_eq!(
            map_notification_status("capture", Some("challenge")),
            TransactionStatus::Pending
        );
        assert_eq!(
            map_notification_status("capture", Some("accept")),
            TransactionStatus::Paid
        );
        // capture에 fraud_status가 없거나 모르는 값이면 PENDING 유지
        assert_eq!(
            map_notification_status("capture", None),
            TransactionStatus::Pending
        );
        assert_eq!(
            map_notification_status("capture", Some("review")),
            TransactionStatus::Pending
        );
    }

    #[test]
    fn settlement_is_paid_regardless_of_fraud_status() {
        assert_eq!(
            map_notification_status("settlement", None),
            TransactionStatus::Paid
        );
        assert_eq!(
            map_notification_status("settlement", Some("challenge")),
            TransactionStatus::Paid
        );
    }

    #[test]
    fn deny_cancel_expire_fail_the_transaction() {
        for status in ["deny", "cancel", "expire"] {
            assert_eq!(
                map_notification_status(status, None),
                TransactionStatus::Failed
            );
        }
    }

    #[test]
    fn pending_and_unknown_statuses_map_to_pending() {
        assert_eq!(
            map_notification_status("pending", None),
            TransactionStatus::Pending
        );
        assert_eq!(
            map_notification_status("refund", None),
            TransactionStatus::Pending
        );
        assert_eq!(map_notification_status("", None), TransactionStatus::Pending);
    }

    #[test]
    fn payload_requires_order_id_and_transaction_status() {
        // 정상 페이로드
        let ok: Result<PaymentNotification, _> = serde_json::from_str(
            r#"{
                "order_id": "ORDER-abc",
                "transaction_status": "settlement",
                "status_code": "200",
                "gross_amount": "50000.00",
                "signature_key": "deadbeef"
            }"#,
        );
        assert!(ok.is_ok());

        // order_id 누락 -> 거부
        let missing_order: Result<PaymentNotification, _> = serde_json::from_str(
            r#"{
                "transaction_status": "settlement",
                "status_code": "200",
                "gross_amount": "50000.00",
                "signature_key": "deadbeef"
            }"#,
        );
        assert!(missing_order.is_err());

        // transaction_status 누락 -> 거부
        let missing_status: Result<PaymentNotification, _> = serde_json::from_str(
            r#"{
                "order_id": "ORDER-abc",
                "status_code": "200",
                "gross_amount": "50000.00",
                "signature_key": "deadbeef"
            }"#,
        );
        assert!(missing_status.is_err());
    }
}
