use anyhow::{Context, Result};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use doorway::config::Config;
use doorway::ui::DoorwayApp;

fn main() -> Result<ExitCode> {
    // RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("doorway=debug")),
        )
        .init();

    info!("Starting Doorway kiosk");

    let config = Config::load().context("Failed to load configuration")?;
    info!("Media server: {}", config.server.base_url);

    gtk4::init().context("Failed to initialize GTK")?;

    // HTTP requests run here; the GTK main loop awaits their handles
    let runtime = Arc::new(
        tokio::runtime::Runtime::new().context("Failed to start the tokio runtime")?,
    );

    let app = DoorwayApp::new(config, runtime).context("Failed to create the application")?;
    let exit_code = app.run();

    info!("Doorway exited with code {}", exit_code.value());
    Ok(exit_status(exit_code.value()))
}

/// Map the GApplication status onto a process exit code. Values that do not
/// fit a byte report plain failure.
fn exit_status(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
