use crate::domains::menu_image::models::ImageResult;
use crate::shared::errors::LookupError;
use async_trait::async_trait;

/// 이미지 검색 공급자 추상화
/// Image search provider seam
///
/// 실제 구현은 `NaverImageClient`, 테스트에서는 호출 횟수를 세는 가짜 구현을 사용
#[async_trait]
pub trait ImageLookup: Send + Sync {
    /// `query`로 최대 `limit`개의 이미지 URL을 관련도순으로 검색
    ///
    /// - `query`는 비어 있으면 안 됨
    /// - `limit`은 1..=100
    async fn search_images(&self, query: &str, limit: u32) -> Result<ImageResult, LookupError>;
}
