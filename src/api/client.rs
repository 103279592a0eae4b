use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::errors::ApiError;
use super::traits::MediaServer;
use super::types::{MediaDescriptor, RefreshResponse};
use crate::config::ServerConfig;
use crate::constants::{MEDIA_ROUTE, REFRESH_ROUTE, STATIC_ROUTE};
use crate::models::ContentId;

/// Characters escaped inside a single path segment. `/` is included so a
/// scanned id can never address a different route.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client for the kiosk media server
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!(
                "{}: not usable as a base address",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(Self::standard_headers())
            .build()
            .map_err(|e| ApiError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn standard_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Lookup address for a content id, the id encoded as one path segment
    pub fn media_url(&self, id: &ContentId) -> String {
        self.build_url(&format!(
            "/{}/{}",
            MEDIA_ROUTE,
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        ))
    }

    /// Address of a file below the server's static root. The path is used as
    /// given; only characters invalid in a URL (spaces) get escaped, so
    /// pre-encoded names and query suffixes pass through untouched.
    pub fn static_url(&self, file_path: &str) -> String {
        let raw = format!(
            "{}/{}/{}",
            self.base_url,
            STATIC_ROUTE,
            file_path.trim_start_matches('/')
        );
        match Url::parse(&raw) {
            Ok(url) => url.into(),
            Err(e) => {
                warn!("Static path {:?} is not a valid address: {}", file_path, e);
                raw
            }
        }
    }

    /// Turn a non-success response into a typed error, keeping the server message
    async fn check_status(
        response: reqwest::Response,
        operation_name: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        debug!("[{}] Response: {}", operation_name, status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read response body>".to_string());

        warn!(
            "[{}] Error response - Status: {}, Body: {}",
            operation_name,
            status.as_u16(),
            body
        );

        Err(ApiError::from_status(status.as_u16(), &body))
    }

    /// `GET /media/{id}`
    pub async fn fetch_media(&self, id: &ContentId) -> Result<MediaDescriptor, ApiError> {
        let url = self.media_url(id);
        debug!("[fetch_media] GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        let response = Self::check_status(response, "fetch_media").await?;

        let body = response.text().await.map_err(ApiError::from_reqwest)?;
        let descriptor: MediaDescriptor = serde_json::from_str(&body)?;

        debug!(
            "[fetch_media] {} resolved to {} '{}' at {}",
            id, descriptor.kind, descriptor.title, descriptor.file_path
        );
        Ok(descriptor)
    }

    /// `POST /refresh_data` with an empty JSON object
    pub async fn refresh_data(&self) -> Result<RefreshResponse, ApiError> {
        let url = self.build_url(&format!("/{}", REFRESH_ROUTE));
        debug!("[refresh_data] POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        let response = Self::check_status(response, "refresh_data").await?;

        let body = response.text().await.map_err(ApiError::from_reqwest)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Download a static asset, used by frontends that decode images themselves
    pub async fn fetch_asset(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        debug!("[fetch_asset] GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        let response = Self::check_status(response, "fetch_asset").await?;

        let bytes = response.bytes().await.map_err(ApiError::from_reqwest)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl MediaServer for ApiClient {
    async fn lookup(&self, id: &ContentId) -> Result<MediaDescriptor, ApiError> {
        self.fetch_media(id).await
    }

    async fn refresh(&self) -> Result<RefreshResponse, ApiError> {
        self.refresh_data().await
    }

    fn asset_url(&self, file_path: &str) -> String {
        self.static_url(file_path)
    }
}
