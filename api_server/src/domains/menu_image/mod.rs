// Menu image domain module
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::*;
pub use routes::*;
