use crate::domains::menu_image::models::{ImageResult, MAX_IMAGE_COUNT, NaverImageSearchResponse};
use crate::domains::menu_image::services::ImageLookup;
use crate::shared::config::{AppConfig, NaverCredentials, SortOrder};
use crate::shared::errors::LookupError;
use async_trait::async_trait;
use secrecy::ExposeSecret;
use std::time::Duration;

const IMAGE_SEARCH_PATH: &str = "/v1/search/image";
const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

// 네이버 이미지 검색 API 클라이언트
// Naver image search API client
// 자격 증명은 생성 시 주입되고 이후 변경되지 않음
pub struct NaverImageClient {
    http_client: reqwest::Client,
    base_url: String,
    credentials: NaverCredentials,
    sort: SortOrder,
}

impl NaverImageClient {
    // 클라이언트 생성
    // Create new Naver client with an explicit request timeout
    pub fn new(
        base_url: impl Into<String>,
        credentials: NaverCredentials,
        sort: SortOrder,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(LookupError::Transport)?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            credentials,
            sort,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, LookupError> {
        Self::new(
            config.naver_api_base_url.clone(),
            config.credentials.clone(),
            config.sort,
            config.request_timeout,
        )
    }

    fn search_url(&self) -> String {
        format!("{}{}", self.base_url, IMAGE_SEARCH_PATH)
    }
}

#[async_trait]
impl ImageLookup for NaverImageClient {
    // 이미지 검색: 네이버 API 호출 (재시도 없음)
    // Search images: single GET, no retries
    async fn search_images(&self, query: &str, limit: u32) -> Result<ImageResult, LookupError> {
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        if limit == 0 || limit > MAX_IMAGE_COUNT {
            return Err(LookupError::InvalidLimit(limit));
        }
        if !self.credentials.is_configured() {
            tracing::warn!("NAVER_CLIENT_ID or NAVER_CLIENT_SECRET is not configured");
            return Err(LookupError::MissingCredentials);
        }

        tracing::debug!(query, limit, sort = self.sort.as_str(), "Requesting Naver image search");

        // HTTP GET 요청
        let display = limit.to_string();
        let response = self
            .http_client
            .get(self.search_url())
            .header(CLIENT_ID_HEADER, &self.credentials.client_id)
            .header(
                CLIENT_SECRET_HEADER,
                self.credentials.client_secret.expose_secret(),
            )
            .query(&[
                ("query", query),
                ("display", display.as_str()),
                ("sort", self.sort.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                let err = LookupError::from_send_error(e);
                match &err {
                    LookupError::Timeout => {
                        tracing::warn!(query, "Naver API request timed out")
                    }
                    _ => tracing::warn!(query, error = %err, "Naver API request failed"),
                }
                err
            })?;

        // HTTP 상태 코드 확인
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(query, %status, body = %body, "Naver API returned error status");
            return Err(LookupError::UpstreamStatus { status, body });
        }

        // 본문을 먼저 읽고 나서 파싱 (파싱 실패 시 원문을 로그에 남기기 위해)
        let body = response.text().await.map_err(|e| {
            let err = LookupError::from_send_error(e);
            tracing::warn!(query, error = %err, "Failed to read Naver API response body");
            err
        })?;

        let parsed: NaverImageSearchResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(query, error = %e, body = %body, "Failed to parse Naver API response");
            LookupError::Format(e)
        })?;

        Ok(ImageResult::new(parsed.thumbnail_urls()))
    }
}
