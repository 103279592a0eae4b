use async_trait::async_trait;
use std::sync::Arc;
use tokio::runtime::Handle;

use super::errors::ApiError;
use super::traits::MediaServer;
use super::types::{MediaDescriptor, RefreshResponse};
use crate::models::ContentId;

/// Runs requests of a [`MediaServer`] on a tokio runtime.
///
/// The GLib main loop has no tokio reactor, so reqwest futures cannot be
/// polled there directly. Each request is spawned onto the runtime and the
/// caller awaits the join handle from whatever executor it lives on.
pub struct RuntimeBound<S> {
    inner: Arc<S>,
    runtime: Handle,
}

impl<S> RuntimeBound<S> {
    pub fn new(inner: Arc<S>, runtime: Handle) -> Self {
        Self { inner, runtime }
    }
}

fn join_error(error: tokio::task::JoinError) -> ApiError {
    ApiError::Other(format!("Request task failed: {}", error))
}

#[async_trait]
impl<S: MediaServer + 'static> MediaServer for RuntimeBound<S> {
    async fn lookup(&self, id: &ContentId) -> Result<MediaDescriptor, ApiError> {
        let inner = self.inner.clone();
        let id = id.clone();
        self.runtime
            .spawn(async move { inner.lookup(&id).await })
            .await
            .map_err(join_error)?
    }

    async fn refresh(&self) -> Result<RefreshResponse, ApiError> {
        let inner = self.inner.clone();
        self.runtime
            .spawn(async move { inner.refresh().await })
            .await
            .map_err(join_error)?
    }

    fn asset_url(&self, file_path: &str) -> String {
        self.inner.asset_url(file_path)
    }
}
