// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합하고 공통 레이어(CORS, 로깅, Swagger)를 적용
// Routes module: combines all domain routers and shared layers

use crate::api_docs::ApiDoc;
use crate::shared::config::AppConfig;
use crate::shared::services::AppState;
use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domains::menu_image::routes::{create_menu_image_router, create_page_router};

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(create_page_router())
        .merge(create_menu_image_router())
}

/// CORS 설정: 허용 Origin이 없으면 모든 Origin 허용 (개발용)
/// CORS layer built from configuration
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if config.cors_allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let mut allowed_origins = Vec::new();
    for origin in &config.cors_allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => allowed_origins.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }

    // 설정된 Origin이 전부 잘못된 경우 모든 요청이 거부되지 않도록 전체 허용
    if allowed_origins.is_empty() {
        tracing::warn!("No valid CORS origin in CORS_ALLOWED_ORIGINS, allowing any origin");
        return cors.allow_origin(Any);
    }
    cors.allow_origin(allowed_origins)
}

/// 전체 애플리케이션 생성 (라우터 + Swagger + CORS + 요청 로깅)
/// Build the full application from state
pub fn build_app(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config);

    Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
