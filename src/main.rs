use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use thesis_finder_api::routes::create_router;
use thesis_finder_api::shared::config::Config;
use thesis_finder_api::shared::database::Database;
use thesis_finder_api::shared::services::AppState;

// Import models for OpenAPI schema
use thesis_finder_api::domains::ai::models::*;
use thesis_finder_api::domains::auth::models::*;
use thesis_finder_api::domains::dataset::models::*;
use thesis_finder_api::domains::payment::models::*;
use thesis_finder_api::domains::search::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        thesis_finder_api::domains::auth::handlers::auth_handler::register,
        thesis_finder_api::domains::auth::handlers::auth_handler::login,
        thesis_finder_api::domains::auth::handlers::auth_handler::refresh,
        thesis_finder_api::domains::auth::handlers::auth_handler::logout,
        thesis_finder_api::domains::auth::handlers::auth_handler::get_me,
        thesis_finder_api::domains::search::handlers::search_handler::search_theses,
        thesis_finder_api::domains::search::handlers::search_handler::get_thesis_detail,
        thesis_finder_api::domains::search::handlers::search_handler::get_related_theses,
        thesis_finder_api::domains::search::handlers::search_handler::recommend_method,
        thesis_finder_api::domains::dataset::handlers::dataset_handler::list_datasets,
        thesis_finder_api::domains::dataset::handlers::dataset_handler::get_dataset,
        thesis_finder_api::domains::dataset::handlers::dataset_handler::download_dataset,
        thesis_finder_api::domains::payment::handlers::payment_handler::create_transaction,
        thesis_finder_api::domains::payment::handlers::payment_handler::payment_callback,
        thesis_finder_api::domains::payment::handlers::payment_handler::get_transaction_status,
        thesis_finder_api::domains::ai::handlers::ai_handler::generate_title,
        thesis_finder_api::domains::ai::handlers::ai_handler::generate_outline,
        thesis_finder_api::domains::ai::handlers::ai_handler::embedding
    ),
    components(schemas(
        RegisterRequest,
        RegisterResponse,
        LoginRequest,
        LoginResponse,
        RefreshTokenRequest,
        RefreshTokenResponse,
        LogoutRequest,
        UserResponse,
        UserRole,
        SearchRequest,
        SearchResponse,
        ThesisResponse,
        ThesisSummaryResponse,
        RelatedThesesResponse,
        ReferenceResponse,
        RecommendMethodRequest,
        RecommendMethodResponse,
        DatasetResponse,
        DatasetListResponse,
        DatasetDownloadResponse,
        CreateTransactionRequest,
        CreateTransactionResponse,
        TransactionStatusResponse,
        PaymentNotification,
        ItemType,
        TransactionStatus,
        GenerateTitleRequest,
        GenerateTitleResponse,
        GenerateOutlineRequest,
        GenerateOutlineResponse,
        EmbeddingRequest,
        EmbeddingResponse
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Authentication API endpoints"),
        (name = "Search", description = "Thesis search API endpoints"),
        (name = "Dataset", description = "Dataset catalog and download API endpoints"),
        (name = "Payment", description = "Payment API endpoints (Midtrans Snap integration)"),
        (name = "AI", description = "AI generation API endpoints")
    ),
    info(
        title = "Thesis Finder API Server",
        description = "API server for thesis search, AI-assisted writing, and dataset payments",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    // 설정 로드 (환경 변수)
    let config = Config::from_env();

    // DB 연결
    let db = Database::new(&config.database_url)
        .await
        .expect("Failed to connect to database");

    db.initialize()
        .await
        .expect("Failed to initialize database");

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(db, &config)
        .expect("Failed to initialize AppState");

    // CORS 설정
    use axum::http::HeaderValue;
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("Invalid CORS_ORIGIN"),
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(
            SwaggerUi::new("/api")
                .url("/api-docs/openapi.json", ApiDoc::openapi())
        )
        .layer(cors)
        .with_state(app_state);

    // 서버 시작
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server port");

    log::info!("Server running on http://localhost:{}", config.port);
    log::info!("Swagger UI available at http://localhost:{}/api", config.port);

    // 서버 실행
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
