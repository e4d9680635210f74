use utoipa::OpenApi;

use crate::domains::menu_image::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::menu_image::handlers::menu_image_handler::get_menu_image,
        crate::domains::menu_image::handlers::menu_image_handler::get_menu_images
    ),
    components(schemas(
        MenuImageRequest,
        MenuImagesRequest,
        MenuImageResponse,
        MenuImagesResponse,
        ImageNotFoundResponse,
        ErrorResponse
    )),
    tags(
        (name = "Menu Images", description = "Menu image lookup (Naver image search)")
    ),
    info(
        title = "Menu Image Server",
        description = "Finds a representative image for a menu name",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
