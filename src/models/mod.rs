mod identifiers;

pub use identifiers::ContentId;

use std::fmt;

/// Kind of content a record points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Parse the `type` field of a media descriptor
    pub fn from_declared(declared: &str) -> Option<Self> {
        match declared {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A media item resolved from the lookup endpoint. Fetched fresh for every
/// request and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRecord {
    pub id: ContentId,
    pub kind: MediaKind,
    pub title: String,
    /// Asset path relative to the server's `/static/` root
    pub file_path: String,
}

/// Which leg of the door animation the transition player is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    Closing,
    Opening,
}
