use thiserror::Error;

use crate::api::ApiError;
use crate::constants::{NETWORK_FAILURE, UNKNOWN_MEDIA_TYPE, lookup_fallback_message};
use crate::models::ContentId;

/// Everything that can stop a content id from being displayed.
///
/// The `Display` text of each variant is exactly what the kiosk shows in
/// its title line; details only go to the log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShowError {
    /// The server answered the lookup with an error status
    #[error("{0}")]
    Lookup(String),

    /// No answer from the server at all
    #[error("{}", NETWORK_FAILURE)]
    Network(String),

    /// The success body could not be decoded
    #[error("{}", NETWORK_FAILURE)]
    Malformed(String),

    /// The descriptor declared a kind this viewer cannot show
    #[error("{}", UNKNOWN_MEDIA_TYPE)]
    UnknownType(String),

    #[error("Error loading image: {title}")]
    ImageLoad { title: String, reason: String },

    #[error("Error loading video: {title}")]
    VideoLoad { title: String, reason: String },
}

impl ShowError {
    pub fn from_api(id: &ContentId, error: ApiError) -> Self {
        match error {
            ApiError::Status {
                message: Some(message),
                ..
            } => ShowError::Lookup(message),
            ApiError::Status { message: None, .. } => {
                ShowError::Lookup(lookup_fallback_message(id.as_str()))
            }
            ApiError::ParseError(detail) => ShowError::Malformed(detail),
            other => ShowError::Network(other.to_string()),
        }
    }
}

/// Errors returned to callers of the sequencer handle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequencerError {
    /// One sequence is running and another is already waiting
    #[error("Sequencer busy, request for {0} dropped")]
    Busy(ContentId),

    #[error("Sequencer controller disconnected")]
    Disconnected,
}
