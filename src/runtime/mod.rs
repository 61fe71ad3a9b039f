use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::app::App;
use crate::server::build_router;

mod settings;
mod startup;

pub async fn run() -> anyhow::Result<()> {
    let mut settings = settings::load_settings();

    // An explicit directory argument wins over configuration.
    if let Some(dir) = env::args_os().nth(1) {
        settings.library.dir = PathBuf::from(dir);
    }

    let bind = settings.server.bind.clone();
    let app = App::new(settings);
    startup::load_catalog(&app);

    let router = build_router(app);
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("giftbox listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    info!("giftbox stopped");
    Ok(())
}
