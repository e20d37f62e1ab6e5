// 웹훅 서명 검증
// Webhook signature verification
//
// 게이트웨이는 sha512(order_id + status_code + gross_amount + server_key)를
// signature_key로 보낸다. 상태를 바꾸기 전에 반드시 검증한다.

use sha2::{Digest, Sha512};
use crate::domains::payment::models::notification::PaymentNotification;

/// 웹훅 서명 검증기 (서버 키 보유)
/// Webhook signature verifier (holds the merchant server key)
#[derive(Clone)]
pub struct SignatureVerifier {
    server_key: String,
}

impl SignatureVerifier {
    pub fn new(server_key: String) -> Self {
        Self { server_key }
    }

    /// 통지 페이로드의 기대 서명 계산 (hex)
    /// Compute the expected signature for a notification (hex-encoded)
    pub fn compute(&self, order_id: &str, status_code: &str, gross_amount: &str) -> String {
        let mut hasher = Sha512::new();
        hasher.update(order_id.as_bytes());
        hasher.update(status_code.as_bytes());
        hasher.update(gross_amount.as_bytes());
        hasher.update(self.server_key.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// 통지 서명 검증
    /// Verify a notification's signature
    pub fn verify(&self, notification: &PaymentNotification) -> bool {
        let expected = self.compute(
            &notification.order_id,
            &notification.status_code,
            &notification.gross_amount,
        );
        constant_time_eq(&expected, &notification.signature_key)
    }
}

/// 상수 시간 문자열 비교 (타이밍 공격 방지)
/// Constant-time string comparison (timing attack resistant)
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (byte_a, byte_b) in a.bytes().zip(b.bytes()) {
        result |= byte_a ^ byte_b;
    }

    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification_with_signature(signature_key: &str) -> PaymentNotification {
        serde_json::from_value(serde_json::json!({
            "order_id": "ORDER-abc",
            "transaction_status": "settlement",
            "status_code": "200",
            "gross_amount": "50000.00",
            "signature_key": signature_key,
        }))
        .unwrap()
    }

    #[test]
    fn compute_matches_known_vector() {
        // sha512("ORDER-7be2a2e3-13e8-4c6c-8f4f-1f54a3a7e6d2" + "200" + "50000.00" + key)
        let verifier = SignatureVerifier::new("SB-Mid-server-test-key".to_string());
        let signature = verifier.compute(
            "ORDER-7be2a2e3-13e8-4c6c-8f4f-1f54a3a7e6d2",
            "200",
            "50000.00",
        );

        assert_eq!(
            signature,
            "bad37c9d924e6bcef2e430f6b1fa943f8f915e3ffa342423ab2c6743b9010c1e\
             3b2a583e90322ab39fd107c70e695035842c7cd0341491594f1ded95effadc04"
        );
    }

    #[test]
    fn valid_signature_passes() {
        let verifier = SignatureVerifier::new("server-key".to_string());
        let signature = verifier.compute("ORDER-abc", "200", "50000.00");
        let notification = notification_with_signature(&signature);

        assert!(verifier.verify(&notification));
    }

    #[test]
    fn tampered_fields_fail_verification() {
        let verifier = SignatureVerifier::new("server-key".to_string());
        // 다른 주문의 서명을 재사용하는 경우
        let signature = verifier.compute("ORDER-other", "200", "50000.00");
        let notification = notification_with_signature(&signature);

        assert!(!verifier.verify(&notification));
    }

    #[test]
    fn wrong_server_key_fails_verification() {
        let verifier = SignatureVerifier::new("server-key".to_string());
        let other = SignatureVerifier::new("another-key".to_string());
        let signature = other.compute("ORDER-abc", "200", "50000.00");
        let notification = notification_with_signature(&signature);

        assert!(!verifier.verify(&notification));
    }

    #[test]
    fn constant_time_eq_handles_length_mismatch() {
        assert!(constant_time_eq("abc", "abc"));
        assert!(!constant_time_eq("abc", "abd"));
        assert!(!constant_time_eq("abc", "abcd"));
        assert!(constant_time_eq("", ""));
    }
}
