use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 단일 이미지 요청에서 네이버 API에 요청하는 개수
pub const SINGLE_IMAGE_LIMIT: u32 = 1;
/// 목록 요청 기본 개수
pub const DEFAULT_IMAGE_COUNT: u32 = 10;
/// 네이버 API `display` 최대값
pub const MAX_IMAGE_COUNT: u32 = 100;

// 메뉴 이미지 조회 요청 파라미터
// `menu`는 Option: 없거나 비어 있으면 핸들러에서 400 응답
#[derive(Debug, Serialize, Deserialize, ToSchema, utoipa::IntoParams)]
#[schema(as = MenuImageRequest)]
#[into_params(parameter_in = Query)]
pub struct MenuImageRequest {
    /// Menu name to search for
    /// 메뉴 이름
    #[param(example = "kimchi")]
    #[schema(example = "kimchi")]
    pub menu: Option<String>,
}

// 메뉴 이미지 목록 조회 요청 파라미터
#[derive(Debug, Serialize, Deserialize, ToSchema, utoipa::IntoParams)]
#[schema(as = MenuImagesRequest)]
#[into_params(parameter_in = Query)]
pub struct MenuImagesRequest {
    /// Menu name to search for
    /// 메뉴 이름
    #[param(example = "bibimbap")]
    #[schema(example = "bibimbap")]
    pub menu: Option<String>,

    /// Number of images to request (1..=100, default: 10)
    /// 요청할 이미지 개수
    #[param(example = 5)]
    #[schema(example = 5)]
    pub count: Option<u32>,
}

/// 같은 키가 여러 번 오면 첫 번째 값 사용
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

impl MenuImageRequest {
    /// 쿼리 문자열 키/값 목록에서 생성
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            menu: first_value(pairs, "menu"),
        }
    }
}

impl MenuImagesRequest {
    /// 쿼리 문자열 키/값 목록에서 생성, `count`가 숫자가 아니면 에러 메시지 반환
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, String> {
        let count = match first_value(pairs, "count") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u32>()
                    .map_err(|_| format!("count must be a number, got '{}'", raw))?,
            ),
            None => None,
        };

        Ok(Self {
            menu: first_value(pairs, "menu"),
            count,
        })
    }
}

// 메뉴 이미지 조회 응답 (200)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = MenuImageResponse)]
pub struct MenuImageResponse {
    /// Thumbnail URL of the first matching image
    #[serde(rename = "imageUrl")]
    #[schema(example = "https://search.pstatic.net/common/?src=kimchi.jpg")]
    pub image_url: String,
}

// 메뉴 이미지 목록 조회 응답 (200)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = MenuImagesResponse)]
pub struct MenuImagesResponse {
    /// Thumbnail URLs in provider relevance order
    #[serde(rename = "imageUrls")]
    pub image_urls: Vec<String>,
}

// 이미지를 찾지 못했을 때의 응답 (404 / 502), Swagger 문서용
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = ImageNotFoundResponse)]
pub struct ImageNotFoundResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub message: String,
}

// 잘못된 요청 응답 (400), Swagger 문서용
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = ErrorResponse)]
pub struct ErrorResponse {
    pub error: String,
}

/// 공급자가 돌려준 이미지 후보 목록 (관련도순)
/// Ranked candidate image URLs; request-local, may be empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResult {
    urls: Vec<String>,
}

impl ImageResult {
    pub fn new(urls: Vec<String>) -> Self {
        Self { urls }
    }

    pub fn first(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn into_urls(self) -> Vec<String> {
        self.urls
    }
}

/// 이미지 조회 결과: 찾음 / 없음 / 공급자 오류
/// Outcome of a single image lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(String),
    NotFound,
    ProviderError(String),
}

impl From<ImageResult> for LookupOutcome {
    fn from(result: ImageResult) -> Self {
        match result.into_urls().into_iter().next() {
            Some(url) => LookupOutcome::Found(url),
            None => LookupOutcome::NotFound,
        }
    }
}
