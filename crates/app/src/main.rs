//! TimeNow - Main Entry Point
//!
//! Initializes logging, loads the clock settings and starts the UI event
//! loop.

use timenow_domain::ClockSettings;
use timenow_infrastructure::SettingsRepository;
use timenow_ui::AppWindow;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TimeNow v{}", env!("CARGO_PKG_VERSION"));

    let settings = load_settings()?;

    // Initialize the application window
    let app = AppWindow::new(&settings)?;

    // Run the event loop (blocks until window closes)
    app.run()?;

    tracing::info!("Window closed, shutting down");
    Ok(())
}

/// Reads settings once, before the UI thread takes over.
fn load_settings() -> Result<ClockSettings, std::io::Error> {
    let repo = SettingsRepository::new();
    if let Some(path) = repo.path() {
        tracing::info!(path = %path.display(), "Reading settings");
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(repo.load_or_default()))
}
