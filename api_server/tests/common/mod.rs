// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 가짜 네이버 API 서버(wiremock)와 라우터 호출 헬퍼 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let server = MockServer::start().await;
//     let app = build_test_app(&server.uri());
//     let (status, body) = get(app, "/get-menu-image?menu=kimchi").await;
// }
// ```
// =====================================================
#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use menu_image_server::domains::menu_image::models::ImageResult;
use menu_image_server::domains::menu_image::services::ImageLookup;
use menu_image_server::shared::errors::LookupError;
use menu_image_server::{AppConfig, AppState, build_app};
use serde_json::{Value, json};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tracing_subscriber::fmt::MakeWriter;

// 테스트용 상수
pub const TEST_CLIENT_ID: &str = "test-client-id";
pub const TEST_CLIENT_SECRET: &str = "test-client-secret";
pub const SEARCH_PATH: &str = "/v1/search/image";

/// 가짜 네이버 API 서버를 바라보는 설정
pub fn test_config(base_url: &str) -> AppConfig {
    test_config_with(base_url, &[])
}

/// 추가 환경 변수를 덮어쓴 설정
pub fn test_config_with(base_url: &str, overrides: &[(&str, &str)]) -> AppConfig {
    AppConfig::from_lookup(|key| {
        if let Some((_, v)) = overrides.iter().find(|(k, _)| *k == key) {
            return Some(v.to_string());
        }
        match key {
            "NAVER_CLIENT_ID" => Some(TEST_CLIENT_ID.to_string()),
            "NAVER_CLIENT_SECRET" => Some(TEST_CLIENT_SECRET.to_string()),
            "NAVER_API_BASE_URL" => Some(base_url.to_string()),
            "NAVER_REQUEST_TIMEOUT_SECS" => Some("2".to_string()),
            _ => None,
        }
    })
    .expect("Failed to build test config")
}

/// 실제 NaverImageClient + 가짜 서버로 앱 생성
pub fn build_test_app(base_url: &str) -> Router {
    build_app(AppState::new(test_config(base_url)).expect("Failed to create AppState"))
}

/// 네이버 이미지 검색 응답 형태의 JSON
pub fn naver_response(items: Vec<Value>) -> Value {
    json!({
        "lastBuildDate": "Mon, 01 Jan 2024 12:00:00 +0900",
        "total": items.len(),
        "start": 1,
        "display": items.len(),
        "items": items,
    })
}

/// 썸네일이 있는 항목
pub fn item_with_thumbnail(title: &str, thumbnail: &str) -> Value {
    json!({
        "title": title,
        "link": format!("https://full.example/{}.jpg", title),
        "thumbnail": thumbnail,
        "sizeheight": "600",
        "sizewidth": "800",
    })
}

/// 썸네일이 없는 항목 (원본 링크만 있음)
pub fn item_without_thumbnail(title: &str) -> Value {
    json!({
        "title": title,
        "link": format!("https://full.example/{}.jpg", title),
    })
}

/// 라우터에 GET 요청을 보내고 (상태 코드, JSON 본문) 반환
/// 본문이 JSON이 아니면 Value::Null
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get_raw(app, uri).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Origin 헤더를 붙여 GET 요청, 응답의 Access-Control-Allow-Origin 값 반환
pub async fn get_with_origin(app: Router, uri: &str, origin: &str) -> (StatusCode, Option<String>) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .header("Origin", origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .map(|v| v.to_str().unwrap().to_string());
    (response.status(), allow_origin)
}

pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

/// 호출 횟수를 세는 가짜 이미지 공급자
pub struct CountingLookup {
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
    response: Result<Vec<String>, u16>,
}

impl CountingLookup {
    /// 항상 주어진 URL 목록을 반환
    pub fn returning(urls: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            response: Ok(urls.iter().map(|u| u.to_string()).collect()),
        })
    }

    /// 항상 주어진 HTTP 상태 코드로 실패
    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            response: Err(status),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 공급자에 전달된 검색어 목록 (호출 순서대로)
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageLookup for CountingLookup {
    async fn search_images(&self, query: &str, limit: u32) -> Result<ImageResult, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        match &self.response {
            Ok(urls) => Ok(ImageResult::new(
                urls.iter().take(limit as usize).cloned().collect(),
            )),
            Err(status) => Err(LookupError::UpstreamStatus {
                status: reqwest::StatusCode::from_u16(*status).unwrap(),
                body: "stub failure".to_string(),
            }),
        }
    }
}

/// 가짜 공급자로 앱 생성
pub fn build_app_with(provider: Arc<CountingLookup>, overrides: &[(&str, &str)]) -> Router {
    let config = test_config_with("http://127.0.0.1:9", overrides);
    build_app(AppState::with_provider(config, provider))
}

/// tracing 출력을 모으는 버퍼 (로그 레벨/메시지 검증용)
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// 이 버퍼에 INFO 이상을 기록하는 subscriber
    /// `future.with_subscriber(logs.subscriber())`로 사용
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
