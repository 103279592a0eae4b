use serde::{Deserialize, Serialize};

use crate::models::{ContentId, MediaKind, MediaRecord};

/// Success body of `GET /media/{id}`
///
/// `type` stays a plain string so that unsupported kinds reach the
/// sequencer and can be reported instead of failing the decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    pub file_path: String,
}

impl MediaDescriptor {
    /// Resolve into a record, handing back the declared type when it is not supported
    pub fn into_record(self, id: ContentId) -> Result<MediaRecord, String> {
        match MediaKind::from_declared(&self.kind) {
            Some(kind) => Ok(MediaRecord {
                id,
                kind,
                title: self.title,
                file_path: self.file_path,
            }),
            None => Err(self.kind),
        }
    }
}

/// Body of `POST /refresh_data`, on success and on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Error body shape shared by both endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|e| !e.is_empty())
            .or(self.message.filter(|m| !m.is_empty()))
    }
}
