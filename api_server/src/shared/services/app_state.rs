use crate::domains::menu_image::services::{ImageLookup, MenuImageState};
use crate::shared::clients::NaverImageClient;
use crate::shared::config::AppConfig;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Application state (combines all domain states)
/// 애플리케이션 상태
///
/// 설정은 시작 시 한 번 로딩되어 Arc로 공유되고, 요청 처리 중에는 읽기만 함
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub menu_image_state: MenuImageState,
}

impl AppState {
    /// Create AppState backed by the Naver image search API
    pub fn new(config: AppConfig) -> Result<Self> {
        if !config.credentials.is_configured() {
            tracing::warn!(
                "NAVER_CLIENT_ID / NAVER_CLIENT_SECRET not set, image lookups will fail"
            );
        }

        let client = NaverImageClient::from_config(&config)
            .context("Failed to create Naver image client")?;

        Ok(Self::with_provider(config, Arc::new(client)))
    }

    /// Create AppState with any image provider (used by tests)
    pub fn with_provider(config: AppConfig, provider: Arc<dyn ImageLookup>) -> Self {
        Self {
            config: Arc::new(config),
            menu_image_state: MenuImageState::new(provider),
        }
    }
}
