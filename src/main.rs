#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use game_app::{config::Config, frontend::routes, web};
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    // Load configuration from environment
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(
            |_| "game_app=debug,tower_http=debug".into(),
        )))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::info!("Configuration loaded successfully");

    // Build the route table once and share it with the server
    let router = Arc::new(routes::build(&config.base_url).context("Failed to build route table")?);
    for route in router.routes() {
        tracing::info!(
            name = %route.name,
            path = %route.path,
            deferred = route.component.is_deferred(),
            "Route registered"
        );
    }

    tracing::info!("Starting web server...");
    web::serve(&config, router).await?;

    Ok(())
}

// The browser bundle starts from `game_app::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
