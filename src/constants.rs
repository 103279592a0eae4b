// User-facing status texts shown in the title line.
// Kept together so the kiosk wording can be adjusted in one place.

pub const LOADING_PREFIX: &str = "Loading media for ID:";
pub const NETWORK_FAILURE: &str = "Failed to load media (network error or invalid ID).";
pub const UNKNOWN_MEDIA_TYPE: &str = "Unknown media type.";
pub const EMPTY_INPUT: &str = "Please enter a Content ID.";
pub const AUTOPLAY_BLOCKED_SUFFIX: &str = "(Autoplay blocked, click to play)";

pub const REFRESH_OK: &str = "Data Refreshed!";
pub const REFRESH_ERROR_PREFIX: &str = "Refresh Error:";
pub const REFRESH_NETWORK_FAILURE: &str = "Network Error: Could not refresh data.";

// Server routes
pub const MEDIA_ROUTE: &str = "media";
pub const REFRESH_ROUTE: &str = "refresh_data";
pub const STATIC_ROUTE: &str = "static";

pub fn loading_message(id: &str) -> String {
    format!("{} {}...", LOADING_PREFIX, id)
}

pub fn lookup_fallback_message(id: &str) -> String {
    format!("Error fetching media for ID: {}.", id)
}

pub fn autoplay_blocked_message(title: &str) -> String {
    format!("{} {}", title, AUTOPLAY_BLOCKED_SUFFIX)
}

pub fn refresh_error_message(message: &str) -> String {
    format!("{} {}", REFRESH_ERROR_PREFIX, message)
}
