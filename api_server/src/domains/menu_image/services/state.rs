// Menu image domain state
// 메뉴 이미지 도메인 상태
use crate::domains::menu_image::services::{ImageLookup, MenuImageService};
use std::sync::Arc;

/// Menu image domain state
/// 메뉴 이미지 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct MenuImageState {
    pub menu_image_service: MenuImageService,
}

impl MenuImageState {
    /// Create MenuImageState with an image provider
    pub fn new(provider: Arc<dyn ImageLookup>) -> Self {
        Self {
            menu_image_service: MenuImageService::new(provider),
        }
    }
}
