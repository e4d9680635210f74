// Menu image domain models
pub mod menu_image;
pub mod naver;

pub use menu_image::*;
pub use naver::*;
