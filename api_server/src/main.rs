use anyhow::{Context, Result};
use menu_image_server::{AppConfig, AppState, build_app};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // 로깅 초기화
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_image_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 설정 로딩 (.env 파일이 있으면 먼저 읽음)
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let addr = config.socket_addr();

    // AppState 생성 (네이버 클라이언트 초기화)
    let app_state = AppState::new(config)?;
    let app = build_app(app_state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/api", addr);
    tracing::info!("Try: http://{}/get-menu-image?menu=갈비찜", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
