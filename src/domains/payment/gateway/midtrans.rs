use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{PaymentGateway, SnapOrderRequest, SnapToken};

/// Midtrans Snap API 클라이언트
/// Midtrans Snap API client
///
/// 인증은 서버 키를 Basic 스킴으로 보낸다 (base64(server_key + ":")).
/// 모든 호출에 타임아웃이 걸려 있어 게이트웨이가 응답하지 않으면
/// 빠르게 실패한다.
pub struct MidtransClient {
    http_client: Client,
    base_url: String,
    auth_header: String,
}

// Midtrans wire format (snake_case 그대로)
#[derive(Debug, Serialize)]
struct SnapRequestBody {
    transaction_details: TransactionDetails,
    customer_details: CustomerDetails,
    item_details: Vec<ItemDetails>,
}

#[derive(Debug, Serialize)]
struct TransactionDetails {
    order_id: String,
    gross_amount: i64,
}

#[derive(Debug, Serialize)]
struct CustomerDetails {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
}

#[derive(Debug, Serialize)]
struct ItemDetails {
    id: String,
    price: i64,
    quantity: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct SnapResponseBody {
    token: String,
    redirect_url: Option<String>,
}

impl MidtransClient {
    pub fn new(base_url: String, server_key: &str, timeout: Duration) -> Result<Self> {
        // Basic 인증: 서버 키 뒤에 콜론을 붙여 인코딩 (비밀번호 없음)
        let credentials = general_purpose::STANDARD.encode(format!("{}:", server_key));
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url,
            auth_header: format!("Basic {}", credentials),
        })
    }
}

#[async_trait::async_trait]
impl PaymentGateway for MidtransClient {
    async fn create_snap_token(&self, request: &SnapOrderRequest) -> Result<SnapToken> {
        let url = format!("{}/snap/v1/transactions", self.base_url);

        let body = SnapRequestBody {
            transaction_details: TransactionDetails {
                order_id: request.order_id.clone(),
                gross_amount: request.gross_amount,
            },
            customer_details: CustomerDetails {
                email: request.customer.email.clone(),
                first_name: request.customer.name.clone(),
            },
            item_details: request
                .items
                .iter()
                .map(|item| ItemDetails {
                    id: item.id.clone(),
                    price: item.price,
                    quantity: item.quantity,
                    name: item.name.clone(),
                })
                .collect(),
        };

        let response = self
            .http_client
            .post(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .context("Failed to send Snap transaction request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Midtrans API returned error: {} - {}", status, error_body);
        }

        let snap = response
            .json::<SnapResponseBody>()
            .await
            .context("Failed to parse Snap transaction response")?;

        Ok(SnapToken {
            token: snap.token,
            redirect_url: snap.redirect_url,
        })
    }
}
