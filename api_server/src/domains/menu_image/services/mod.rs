// Menu image domain services
pub mod image_lookup;
pub mod menu_image_service;
pub mod state;

pub use image_lookup::*;
pub use menu_image_service::*;
pub use state::*;
