// Shared errors
pub mod config_error;
pub mod lookup_error;
pub mod menu_image_error;

pub use config_error::*;
pub use lookup_error::*;
pub use menu_image_error::*;
