use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::domains::ai::services::state::AiState;
use crate::domains::auth::services::state::AuthState;
use crate::domains::auth::services::JwtService;
use crate::domains::dataset::services::state::DatasetState;
use crate::domains::payment::gateway::MidtransClient;
use crate::domains::payment::services::state::PaymentState;
use crate::domains::payment::signature::SignatureVerifier;
use crate::domains::payment::store::PgPaymentStore;
use crate::domains::search::services::state::SearchState;
use crate::shared::clients::AiServiceClient;
use crate::shared::config::Config;
use crate::shared::database::Database;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 각 도메인의 State를 조합하여 전체 애플리케이션 상태를 관리.
/// 외부 의존성(결제 게이트웨이, AI 서비스)은 여기서 한 번만 만들어
/// trait 객체로 주입한다.
#[derive(Clone)]
pub struct AppState {
    /// 데이터베이스 연결 (공유)
    /// Database connection (shared)
    pub db: Database,
    pub auth_state: AuthState,
    pub search_state: SearchState,
    pub dataset_state: DatasetState,
    pub payment_state: PaymentState,
    pub ai_state: AiState,
}

impl AppState {
    /// Create AppState with database and configuration
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(db: Database, config: &Config) -> Result<Self> {
        // 1. 공유 서비스/클라이언트 생성
        let jwt_service = JwtService::new(config.jwt_secret.clone());
        let call_timeout = Duration::from_secs(config.gateway_timeout_secs);
        let ai_client = AiServiceClient::new(config.ai_service_url.clone(), call_timeout)?;

        // 2. 결제 의존성 (저장소 / 게이트웨이 / 서명 검증기)
        let payment_store: Arc<PgPaymentStore> = Arc::new(PgPaymentStore::new(&db));
        let gateway = Arc::new(MidtransClient::new(
            config.midtrans_base_url.clone(),
            &config.midtrans_server_key,
            call_timeout,
        )?);
        let signature_verifier = SignatureVerifier::new(config.midtrans_server_key.clone());

        // 3. 각 도메인 State 생성
        let auth_state = AuthState::new(db.clone(), jwt_service);
        let search_state = SearchState::new(db.clone(), ai_client.clone());
        let dataset_state = DatasetState::new(db.clone(), payment_store.clone());
        let payment_state = PaymentState::new(
            payment_store,
            gateway,
            signature_verifier,
            config.midtrans_snap_redirect_url.clone(),
        );
        let ai_state = AiState::new(db.clone(), ai_client);

        // 4. AppState 조합
        Ok(Self {
            db,
            auth_state,
            search_state,
            dataset_state,
            payment_state,
            ai_state,
        })
    }
}
