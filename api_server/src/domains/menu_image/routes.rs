// Menu image domain routes
// 메뉴 이미지 도메인 라우터
use crate::domains::menu_image::handlers::{menu_image_handler, page_handler};
use crate::shared::services::AppState;
use axum::{Router, routing::get};

/// Create menu image router
/// 메뉴 이미지 라우터 생성
pub fn create_menu_image_router() -> Router<AppState> {
    Router::new()
        .route("/get-menu-image", get(menu_image_handler::get_menu_image))
        .route("/get-menu-images", get(menu_image_handler::get_menu_images))
}

/// Create page router (landing page)
pub fn create_page_router() -> Router<AppState> {
    Router::new().route("/", get(page_handler::index))
}
