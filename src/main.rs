mod app;
mod config;
mod layout;
mod library;
mod plan;
mod playback;
mod runtime;
mod server;
mod votes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting giftbox v{}", env!("CARGO_PKG_VERSION"));

    runtime::run().await
}
