use std::time::Duration;
use tracing::{error, info};

use super::view::StatusLine;
use crate::api::{ApiError, MediaServer};
use crate::constants::{REFRESH_NETWORK_FAILURE, REFRESH_OK, refresh_error_message};

/// Ask the server to reload its media table and report the outcome in the
/// status line. Independent of the sequencer; both may run at once.
pub async fn refresh_server_data(
    server: &dyn MediaServer,
    status: &dyn StatusLine,
    notice: Duration,
) {
    info!("Sending refresh request to server...");

    match server.refresh().await {
        Ok(response) => {
            info!("Server refresh response: {}", response.message);
            status.flash(REFRESH_OK, notice);
        }
        Err(ApiError::Status { status: code, message }) => {
            let message = message.unwrap_or_else(|| format!("HTTP {}", code));
            error!("Server refresh failed: {}", message);
            status.set_text(&refresh_error_message(&message));
            status.show();
        }
        Err(other) => {
            error!("Network error during server refresh: {}", other);
            status.set_text(REFRESH_NETWORK_FAILURE);
            status.show();
        }
    }
}
