pub mod handlers;

use crate::core::relay::ContactRelay;
use crate::core::{ConfigProvider, MailTransport};
use crate::utils::error::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

pub const CONTACT_ROUTE: &str = "/api/contact";
pub const HEALTH_ROUTE: &str = "/health";

pub fn router<T, C>(relay: Arc<ContactRelay<T, C>>) -> Router
where
    T: MailTransport + 'static,
    C: ConfigProvider + 'static,
{
    Router::new()
        .route(HEALTH_ROUTE, get(handlers::health_check))
        .route(CONTACT_ROUTE, post(handlers::submit_contact::<T, C>))
        .with_state(relay)
}

/// 啟動 HTTP 服務，收到 Ctrl-C 後優雅關閉
pub async fn serve<T, C>(relay: Arc<ContactRelay<T, C>>, addr: SocketAddr) -> Result<()>
where
    T: MailTransport + 'static,
    C: ConfigProvider + 'static,
{
    let app = router(relay);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Contact relay listening on http://{}{}", listener.local_addr()?, CONTACT_ROUTE);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Contact relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
