use axum::{Json, http::StatusCode};
use serde_json::json;
use thiserror::Error;

pub const MISSING_MENU_MESSAGE: &str =
    "Menu name is required. Include the 'menu' query parameter.";
pub const IMAGE_NOT_FOUND_MESSAGE: &str = "No image could be found for this menu.";
pub const PROVIDER_UNAVAILABLE_MESSAGE: &str = "The image provider is currently unavailable.";

/// 메뉴 이미지 API 에러 (HTTP 응답으로 변환됨)
/// Menu image API errors
#[derive(Error, Debug)]
pub enum MenuImageError {
    /// `menu` 파라미터가 없거나 비어 있음
    #[error("Menu name is required")]
    MissingMenu,

    /// 쿼리 문자열 파싱 실패
    #[error("Invalid query parameters: {0}")]
    InvalidParameters(String),

    /// `count`가 1..=100 범위를 벗어남
    #[error("Invalid count: {0} (expected 1..=100)")]
    InvalidCount(u32),

    /// 이미지를 찾지 못함 (공급자 오류도 기본적으로 여기로 매핑)
    #[error("Image not found")]
    ImageNotFound,

    /// 공급자 오류 (REPORT_PROVIDER_ERRORS=true 일 때만 사용)
    #[error("Image provider unavailable")]
    ProviderUnavailable,

    /// 목록 조회 중 공급자 오류
    /// `reported`: true면 502, false면 404
    #[error("Image list unavailable (reported: {reported})")]
    ImageListUnavailable { reported: bool },
}

/// MenuImageError를 HTTP 응답으로 변환
impl From<MenuImageError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: MenuImageError) -> Self {
        match err {
            MenuImageError::MissingMenu => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": MISSING_MENU_MESSAGE })),
            ),
            MenuImageError::InvalidParameters(_) | MenuImageError::InvalidCount(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            ),
            MenuImageError::ImageNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "imageUrl": null, "message": IMAGE_NOT_FOUND_MESSAGE })),
            ),
            MenuImageError::ProviderUnavailable => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "imageUrl": null, "message": PROVIDER_UNAVAILABLE_MESSAGE })),
            ),
            MenuImageError::ImageListUnavailable { reported: true } => (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "imageUrls": [], "message": PROVIDER_UNAVAILABLE_MESSAGE })),
            ),
            MenuImageError::ImageListUnavailable { reported: false } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "imageUrls": [], "message": IMAGE_NOT_FOUND_MESSAGE })),
            ),
        }
    }
}
