// External API clients
pub mod naver_image;

pub use naver_image::*;
