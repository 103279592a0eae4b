use thiserror::Error;
use tokio::sync::oneshot;

/// Why a playback request did not start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayFailure {
    /// The environment refused to start playback without a user gesture
    #[error("Playback blocked: {0}")]
    Blocked(String),

    /// The media itself could not be loaded or decoded
    #[error("Failed to load media: {0}")]
    Load(String),
}

/// Start signal of one playback request; resolves once playback begins or fails
pub type StartSignal = oneshot::Receiver<Result<(), PlayFailure>>;

/// Load signal of one image attachment; the error carries the toolkit's reason
pub type LoadSignal = oneshot::Receiver<Result<(), String>>;

/// Signals of one play request on the transition player
#[derive(Debug)]
pub struct PlaybackAttempt {
    pub started: StartSignal,
    pub ended: oneshot::Receiver<()>,
}

/// Full-window clip player used for the door animations
pub trait TransitionPlayer {
    fn set_source(&self, uri: &str);
    fn rewind(&self);
    /// Show or hide the overlay
    fn set_active(&self, active: bool);
    fn play(&self) -> PlaybackAttempt;
    fn pause(&self);
}

/// How a content video element is configured when attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSettings {
    pub muted: bool,
    pub looping: bool,
    pub autoplay: bool,
    pub inline: bool,
    pub controls: bool,
}

impl VideoSettings {
    /// Silent looping autoplay without visible controls
    pub fn kiosk() -> Self {
        Self {
            muted: true,
            looping: true,
            autoplay: true,
            inline: true,
            controls: false,
        }
    }
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self::kiosk()
    }
}

/// A video attached to the display surface
pub trait VideoElement {
    fn play(&self) -> StartSignal;
    fn set_controls_visible(&self, visible: bool);
    /// Wait for the visitor to start playback, by clicking the video or
    /// through the revealed controls. `on_started` runs once, for whichever
    /// starts it first.
    fn await_manual_start(&self, on_started: Box<dyn FnOnce()>);
}
