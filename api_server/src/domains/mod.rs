// Domains module
pub mod menu_image;
