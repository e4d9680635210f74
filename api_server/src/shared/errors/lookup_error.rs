use thiserror::Error;

/// 이미지 검색 공급자(네이버) 관련 에러
/// Image provider errors
#[derive(Error, Debug)]
pub enum LookupError {
    /// Client ID 또는 Client Secret이 설정되지 않음
    /// Credentials are not configured, no request was sent
    #[error("Naver API credentials are not configured")]
    MissingCredentials,

    /// 검색어가 비어 있음
    /// Empty query, no request was sent
    #[error("Search query must not be empty")]
    EmptyQuery,

    /// 요청 개수가 허용 범위를 벗어남
    /// Requested result count is outside 1..=100
    #[error("Invalid result limit: {0} (expected 1..=100)")]
    InvalidLimit(u32),

    /// 응답 대기 시간 초과
    /// Provider did not answer within the configured timeout
    #[error("Naver API request timed out")]
    Timeout,

    /// 네트워크/연결 오류
    /// Network or connection failure
    #[error("Failed to send request to Naver API: {0}")]
    Transport(#[source] reqwest::Error),

    /// 2xx가 아닌 HTTP 상태 코드
    /// Non-success HTTP status from the provider
    #[error("Naver API returned error: {status} - {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// 응답 본문 파싱 실패
    /// Response body is not the expected JSON document
    #[error("Failed to parse Naver API response: {0}")]
    Format(#[source] serde_json::Error),
}

impl LookupError {
    /// 요청 전송 중 발생한 reqwest 에러 분류 (타임아웃은 별도 variant)
    pub fn from_send_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout
        } else {
            LookupError::Transport(err)
        }
    }
}
