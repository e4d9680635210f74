pub mod api_docs;
pub mod domains;
pub mod routes;
pub mod shared;

pub use routes::build_app;
pub use shared::config::AppConfig;
pub use shared::services::AppState;
