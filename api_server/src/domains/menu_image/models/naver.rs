use serde::Deserialize;

// 네이버 이미지 검색 API 원시 응답 모델 (내부용)
// Raw Naver image search response
// Note: `items`가 없는 응답은 빈 목록으로 취급
#[derive(Debug, Deserialize)]
pub struct NaverImageSearchResponse {
    #[serde(default)]
    pub items: Vec<NaverImageItem>,
}

#[derive(Debug, Deserialize)]
pub struct NaverImageItem {
    #[serde(default)]
    pub title: Option<String>,
    /// 원본 이미지 URL (썸네일 대체용으로는 사용하지 않음)
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub sizeheight: Option<String>,
    #[serde(default)]
    pub sizewidth: Option<String>,
}

impl NaverImageSearchResponse {
    /// 썸네일 URL만 순서대로 추출 (썸네일이 없는 항목은 건너뜀)
    /// Thumbnail URLs in provider order; items without one are skipped
    pub fn thumbnail_urls(self) -> Vec<String> {
        self.items
            .into_iter()
            .filter_map(|item| item.thumbnail)
            .filter(|url| !url.trim().is_empty())
            .collect()
    }
}
