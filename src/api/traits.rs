use async_trait::async_trait;

use super::errors::ApiError;
use super::types::{MediaDescriptor, RefreshResponse};
use crate::models::ContentId;

/// The two server endpoints the kiosk talks to, plus static asset addressing
#[async_trait]
pub trait MediaServer: Send + Sync {
    /// Resolve a content id into its media descriptor
    async fn lookup(&self, id: &ContentId) -> Result<MediaDescriptor, ApiError>;

    /// Ask the server to reload its media table
    async fn refresh(&self) -> Result<RefreshResponse, ApiError>;

    /// Full address of a file below the static root
    fn asset_url(&self, file_path: &str) -> String;
}
