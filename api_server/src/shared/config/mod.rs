// Config module: 프로세스 시작 시 한 번 로딩되는 설정
// Config module: loaded once at start-up, read-only afterwards

use crate::shared::errors::ConfigError;
use secrecy::{ExposeSecret, Secret};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_NAVER_API_BASE_URL: &str = "https://openapi.naver.com";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// 이미지 정렬 순서 (네이버 API `sort` 파라미터)
/// Image sort order (Naver API `sort` parameter)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// 정확도순 (relevance)
    #[default]
    Sim,
    /// 날짜순
    Date,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Sim => "sim",
            SortOrder::Date => "date",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sim" => Ok(SortOrder::Sim),
            "date" => Ok(SortOrder::Date),
            other => Err(ConfigError::InvalidValue {
                key: "NAVER_IMAGE_SORT",
                value: other.to_string(),
                reason: "expected 'sim' or 'date'".to_string(),
            }),
        }
    }
}

/// 네이버 API 자격 증명 (Client ID / Client Secret)
/// Provider credentials; the secret never shows up in Debug output
#[derive(Clone)]
pub struct NaverCredentials {
    pub client_id: String,
    pub client_secret: Secret<String>,
}

impl NaverCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret.into()),
        }
    }

    /// 둘 중 하나라도 비어 있으면 외부 호출을 하지 않는다
    pub fn is_configured(&self) -> bool {
        !self.client_id.trim().is_empty() && !self.client_secret.expose_secret().trim().is_empty()
    }
}

impl std::fmt::Debug for NaverCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaverCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Application configuration
/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub credentials: NaverCredentials,
    pub naver_api_base_url: String,
    pub request_timeout: Duration,
    pub sort: SortOrder,
    /// 비어 있으면 모든 Origin 허용
    pub cors_allowed_origins: Vec<String>,
    /// true: 공급자 오류를 502로 응답 (기본값 false: 404)
    pub report_provider_errors: bool,
}

impl AppConfig {
    /// 환경 변수에서 설정 로딩
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정 생성 (테스트에서 환경 변수 없이 사용)
    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = match var("HOST") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HOST",
                value: v.clone(),
                reason: "expected an IP address".to_string(),
            })?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match var("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: v.clone(),
                reason: "expected a port number".to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let request_timeout = match var("NAVER_REQUEST_TIMEOUT_SECS") {
            Some(v) => match v.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "NAVER_REQUEST_TIMEOUT_SECS",
                        value: v,
                        reason: "expected a positive number of seconds".to_string(),
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let sort = match var("NAVER_IMAGE_SORT") {
            Some(v) => v.parse()?,
            None => SortOrder::default(),
        };

        let report_provider_errors = match var("REPORT_PROVIDER_ERRORS") {
            Some(v) => parse_bool("REPORT_PROVIDER_ERRORS", &v)?,
            None => false,
        };

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty() && o != "*")
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            credentials: NaverCredentials::new(
                var("NAVER_CLIENT_ID").unwrap_or_default(),
                var("NAVER_CLIENT_SECRET").unwrap_or_default(),
            ),
            naver_api_base_url: var("NAVER_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_NAVER_API_BASE_URL.to_string()),
            request_timeout,
            sort,
            cors_allowed_origins,
            report_provider_errors,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
