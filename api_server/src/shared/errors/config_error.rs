use thiserror::Error;

/// 설정 에러
/// Configuration errors (reported at start-up, process exits)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
