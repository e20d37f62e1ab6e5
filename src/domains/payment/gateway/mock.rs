use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{PaymentGateway, SnapOrderRequest, SnapToken};

/// Mock Gateway (테스트용 구현)
/// Mock Gateway (implementation for testing)
///
/// 실제 게이트웨이 호출 없이 토큰 발급을 흉내냅니다.
/// 성공/실패를 미리 지정할 수 있고, 받은 요청을 기록해 두므로
/// 테스트에서 주문 내용을 검증할 수 있습니다.
pub struct MockGateway {
    fail_with: Option<String>,
    token: String,
    redirect_url: Option<String>,
    requests: Mutex<Vec<SnapOrderRequest>>,
}

impl MockGateway {
    /// 항상 성공하는 게이트웨이
    pub fn new() -> Self {
        Self {
            fail_with: None,
            token: "mock-snap-token".to_string(),
            redirect_url: Some("https://app.sandbox.example/redirect/mock-snap-token".to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 항상 실패하는 게이트웨이 (타임아웃, 5xx 등 흉내)
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            token: String::new(),
            redirect_url: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 지정한 토큰으로 성공하는 게이트웨이
    pub fn with_token(token: &str) -> Self {
        Self {
            token: token.to_string(),
            ..Self::new()
        }
    }

    /// redirect URL 없이 성공하는 게이트웨이
    pub fn without_redirect() -> Self {
        Self {
            redirect_url: None,
            ..Self::new()
        }
    }

    /// 지금까지 받은 요청 목록
    pub async fn requests(&self) -> Vec<SnapOrderRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_snap_token(&self, request: &SnapOrderRequest) -> Result<SnapToken> {
        self.requests.lock().await.push(request.clone());

        if let Some(message) = &self.fail_with {
            bail!("MockGateway: {}", message);
        }

        Ok(SnapToken {
            token: self.token.clone(),
            redirect_url: self.redirect_url.clone(),
        })
    }
}
