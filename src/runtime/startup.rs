use tracing::{info, warn};

use crate::app::App;

/// Fill the player from the audio directory once at startup.
pub fn load_catalog(app: &App) {
    let dir = app.settings.library.dir.display().to_string();
    let count = app.reload_player();
    if count == 0 {
        warn!(%dir, "no tracks found; player starts empty");
    } else {
        let player = app.player();
        info!(
            %dir,
            count,
            shuffle = player.shuffle(),
            repeat = ?player.repeat_mode(),
            "catalog loaded"
        );
    }
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
