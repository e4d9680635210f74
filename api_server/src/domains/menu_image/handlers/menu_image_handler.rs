use crate::domains::menu_image::models::{
    DEFAULT_IMAGE_COUNT, LookupOutcome, MAX_IMAGE_COUNT, MenuImageRequest, MenuImageResponse,
    MenuImagesRequest, MenuImagesResponse, SINGLE_IMAGE_LIMIT,
};
use crate::shared::errors::{LookupError, MenuImageError};
use crate::shared::services::AppState;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};

type ApiError = (StatusCode, Json<serde_json::Value>);
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

// `menu`가 없거나 빈 문자열이면 외부 호출 없이 400
fn require_menu(menu: Option<String>) -> Result<String, ApiError> {
    match menu {
        Some(menu) if !menu.is_empty() => Ok(menu),
        _ => Err(MenuImageError::MissingMenu.into()),
    }
}

// 키/값 목록으로 받음: 같은 키가 반복돼도 첫 번째 값을 쓰기 위해
fn query_pairs(params: QueryPairs) -> Result<Vec<(String, String)>, ApiError> {
    params
        .map(|Query(pairs)| pairs)
        .map_err(|e| MenuImageError::InvalidParameters(e.body_text()).into())
}

// 메뉴 이미지 조회 핸들러
// Handler: returns the first thumbnail found for a menu name
#[utoipa::path(
    get,
    path = "/get-menu-image",
    params(MenuImageRequest),
    responses(
        (status = 200, description = "Image found", body = MenuImageResponse),
        (status = 400, description = "Missing or empty 'menu' parameter", body = crate::domains::menu_image::models::ErrorResponse),
        (status = 404, description = "No image found (or provider failure)", body = crate::domains::menu_image::models::ImageNotFoundResponse),
        (status = 502, description = "Provider failure, only with REPORT_PROVIDER_ERRORS=true", body = crate::domains::menu_image::models::ImageNotFoundResponse)
    ),
    tag = "Menu Images"
)]
pub async fn get_menu_image(
    State(app_state): State<AppState>,
    params: QueryPairs,
) -> Result<Json<MenuImageResponse>, ApiError> {
    let params = MenuImageRequest::from_pairs(&query_pairs(params)?);
    let menu = require_menu(params.menu)?;

    tracing::info!(menu = %menu, "Menu image requested");

    let outcome = app_state
        .menu_image_state
        .menu_image_service
        .lookup(&menu, SINGLE_IMAGE_LIMIT)
        .await;

    match outcome {
        LookupOutcome::Found(image_url) => Ok(Json(MenuImageResponse { image_url })),
        LookupOutcome::NotFound => Err(MenuImageError::ImageNotFound.into()),
        // 기본값: 공급자 오류도 404 (응답만으로는 "결과 없음"과 구분 불가)
        LookupOutcome::ProviderError(_) if app_state.config.report_provider_errors => {
            Err(MenuImageError::ProviderUnavailable.into())
        }
        LookupOutcome::ProviderError(_) => Err(MenuImageError::ImageNotFound.into()),
    }
}

// 메뉴 이미지 목록 조회 핸들러
// Handler: returns the full ranked list of thumbnails
#[utoipa::path(
    get,
    path = "/get-menu-images",
    params(MenuImagesRequest),
    responses(
        (status = 200, description = "Ranked thumbnails (may be empty)", body = MenuImagesResponse),
        (status = 400, description = "Missing 'menu' or invalid 'count'", body = crate::domains::menu_image::models::ErrorResponse),
        (status = 404, description = "Provider failure"),
        (status = 502, description = "Provider failure, only with REPORT_PROVIDER_ERRORS=true")
    ),
    tag = "Menu Images"
)]
pub async fn get_menu_images(
    State(app_state): State<AppState>,
    params: QueryPairs,
) -> Result<Json<MenuImagesResponse>, ApiError> {
    let params = MenuImagesRequest::from_pairs(&query_pairs(params)?)
        .map_err(|e| -> ApiError { MenuImageError::InvalidParameters(e).into() })?;
    let menu = require_menu(params.menu)?;

    let count = params.count.unwrap_or(DEFAULT_IMAGE_COUNT);
    if count == 0 || count > MAX_IMAGE_COUNT {
        return Err(MenuImageError::InvalidCount(count).into());
    }

    tracing::info!(menu = %menu, count, "Menu images requested");

    let images = app_state
        .menu_image_state
        .menu_image_service
        .search(&menu, count)
        .await
        .map_err(|e: LookupError| -> ApiError {
            match e {
                LookupError::InvalidLimit(limit) => MenuImageError::InvalidCount(limit).into(),
                LookupError::EmptyQuery => MenuImageError::MissingMenu.into(),
                _ => MenuImageError::ImageListUnavailable {
                    reported: app_state.config.report_provider_errors,
                }
                .into(),
            }
        })?;

    Ok(Json(MenuImagesResponse {
        image_urls: images.into_urls(),
    }))
}
