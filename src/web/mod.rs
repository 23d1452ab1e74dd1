mod api;
mod site;

use crate::config::Config;
use crate::frontend::routes::AppRouter;
use axum::{Router, routing::get};
use std::{path::PathBuf, sync::Arc};
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub struct SiteState {
    pub router: Arc<AppRouter>,
    /// Directory holding the compiled single-page application.
    pub site_root: PathBuf,
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

pub fn app(state: Arc<SiteState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .fallback(site::serve_site)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

pub async fn serve(config: &Config, router: Arc<AppRouter>) -> anyhow::Result<()> {
    let state = Arc::new(SiteState {
        router,
        site_root: config.site_root.clone(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        "Listening on http://{}{}/",
        config.bind_addr,
        state.router.history().base()
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
