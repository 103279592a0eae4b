use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::errors::ShowError;
use super::view::{KioskView, StatusLine};
use crate::api::MediaServer;
use crate::config::TransitionConfig;
use crate::constants::{autoplay_blocked_message, loading_message};
use crate::models::{ContentId, MediaKind, MediaRecord, TransitionState};
use crate::player::{PlayFailure, VideoSettings, play_transition, reset_transition};

/// What ended up on the display surface after a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rendered {
    Image,
    Video,
    /// Video attached but waiting for a click before it plays
    AwaitingClick,
}

/// Owns the close / fetch / render / open lifecycle for one content id at a time
pub struct MediaSequencer {
    server: Arc<dyn MediaServer>,
    view: KioskView,
    close_clip: Option<String>,
    open_clip: Option<String>,
    state: TransitionState,
}

impl std::fmt::Debug for MediaSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaSequencer")
            .field("server", &"Arc<dyn MediaServer>")
            .field("close_clip", &self.close_clip)
            .field("open_clip", &self.open_clip)
            .field("state", &self.state)
            .finish()
    }
}

impl MediaSequencer {
    pub fn new(
        server: Arc<dyn MediaServer>,
        view: KioskView,
        transitions: &TransitionConfig,
    ) -> Self {
        let close_clip = transitions.close_clip().map(|path| server.asset_url(path));
        let open_clip = transitions.open_clip().map(|path| server.asset_url(path));

        Self {
            server,
            view,
            close_clip,
            open_clip,
            state: TransitionState::Idle,
        }
    }

    pub fn transition_state(&self) -> TransitionState {
        self.state
    }

    /// Run the full sequence for `id`. Never fails: every error ends up as
    /// text in the status line.
    pub async fn show_media(&mut self, id: &ContentId) {
        info!("Showing media for {}", id);

        self.view.status.hide();
        self.view.input.clear();

        match self.close_clip.clone() {
            Some(uri) => {
                self.state = TransitionState::Closing;
                play_transition(self.view.transition.as_ref(), &uri).await;
            }
            None => warn!("Door close clip not configured, skipping closing transition"),
        }

        self.view.display.clear();
        self.view.status.set_text(&loading_message(id.as_str()));
        self.view.status.show();

        match self.load(id).await {
            Ok(Rendered::AwaitingClick) => {
                debug!("{} is waiting for a click to start playback", id);
            }
            Ok(rendered) => {
                debug!("{} rendered as {:?}", id, rendered);
                self.view.status.hide();
            }
            Err(error) => {
                warn!("Failed to show {}: {:?}", id, error);
                self.view.status.set_text(&error.to_string());
                self.view.status.show();
                self.view.display.clear();
            }
        }

        // A missing open clip takes the same path as an empty display
        match (self.view.display.has_media(), self.open_clip.clone()) {
            (true, Some(uri)) => {
                self.state = TransitionState::Opening;
                play_transition(self.view.transition.as_ref(), &uri).await;
            }
            _ => warn!("Door open transition skipped due to no media loaded or clip missing"),
        }

        reset_transition(self.view.transition.as_ref());
        self.state = TransitionState::Idle;
        debug!("Sequence for {} settled", id);
    }

    async fn load(&self, id: &ContentId) -> Result<Rendered, ShowError> {
        let descriptor = self
            .server
            .lookup(id)
            .await
            .map_err(|e| ShowError::from_api(id, e))?;

        let record = descriptor
            .into_record(id.clone())
            .map_err(ShowError::UnknownType)?;
        let uri = self.server.asset_url(&record.file_path);
        info!("Showing {} '{}' for {}", record.kind, record.title, record.id);

        match record.kind {
            MediaKind::Image => self.show_image(&record, &uri).await,
            MediaKind::Video => self.show_video(&record, &uri).await,
        }
    }

    async fn show_image(&self, record: &MediaRecord, uri: &str) -> Result<Rendered, ShowError> {
        debug!("Attaching image {}", uri);
        let loaded = self.view.display.attach_image(uri, &record.title);

        match loaded.await {
            Ok(Ok(())) => Ok(Rendered::Image),
            Ok(Err(reason)) => Err(ShowError::ImageLoad {
                title: record.title.clone(),
                reason,
            }),
            Err(_) => Err(ShowError::ImageLoad {
                title: record.title.clone(),
                reason: "image element dropped its load signal".to_string(),
            }),
        }
    }

    async fn show_video(&self, record: &MediaRecord, uri: &str) -> Result<Rendered, ShowError> {
        debug!("Attaching video {}", uri);
        let video = self.view.display.attach_video(uri, VideoSettings::kiosk());

        match video.play().await {
            Ok(Ok(())) => {
                info!("Video autoplayed successfully");
                Ok(Rendered::Video)
            }
            Ok(Err(PlayFailure::Blocked(reason))) => {
                warn!("Autoplay was prevented: {}", reason);
                video.set_controls_visible(true);
                self.view
                    .status
                    .set_text(&autoplay_blocked_message(&record.title));
                self.view.status.show();

                let status: Rc<dyn StatusLine> = self.view.status.clone();
                video.await_manual_start(Box::new(move || status.hide()));
                Ok(Rendered::AwaitingClick)
            }
            Ok(Err(PlayFailure::Load(reason))) => Err(ShowError::VideoLoad {
                title: record.title.clone(),
                reason,
            }),
            Err(_) => Err(ShowError::VideoLoad {
                title: record.title.clone(),
                reason: "video element dropped its start signal".to_string(),
            }),
        }
    }
}
