use crate::domains::menu_image::models::{ImageResult, LookupOutcome};
use crate::domains::menu_image::services::ImageLookup;
use crate::shared::errors::LookupError;
use std::sync::Arc;

// 메뉴 이미지 서비스
// MenuImageService: turns provider results into lookup outcomes
#[derive(Clone)]
pub struct MenuImageService {
    provider: Arc<dyn ImageLookup>,
}

impl MenuImageService {
    // 생성자
    pub fn new(provider: Arc<dyn ImageLookup>) -> Self {
        Self { provider }
    }

    /// 첫 번째 이미지 조회
    /// Look up the first image for `query`
    ///
    /// 공급자 오류와 "결과 없음"은 서로 다른 로그로 남김
    pub async fn lookup(&self, query: &str, limit: u32) -> LookupOutcome {
        match self.provider.search_images(query, limit).await {
            Ok(result) => {
                let outcome = LookupOutcome::from(result);
                match &outcome {
                    LookupOutcome::Found(url) => {
                        tracing::info!(query, image_url = %url, "Menu image found")
                    }
                    _ => tracing::info!(query, "No image found for menu"),
                }
                outcome
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "Image provider error");
                LookupOutcome::ProviderError(err.to_string())
            }
        }
    }

    /// 관련도순 이미지 목록 조회
    /// Full ranked result, for the list endpoint
    pub async fn search(&self, query: &str, count: u32) -> Result<ImageResult, LookupError> {
        let result = self.provider.search_images(query, count).await;
        match &result {
            Ok(images) => tracing::info!(query, count = images.len(), "Menu images found"),
            Err(err) => tracing::warn!(query, error = %err, "Image provider error"),
        }
        result
    }
}
