// Menu image domain handlers
pub mod menu_image_handler;
pub mod page_handler;

pub use menu_image_handler::*;
pub use page_handler::*;
