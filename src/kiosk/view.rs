use std::rc::Rc;
use std::time::Duration;

use crate::player::{LoadSignal, TransitionPlayer, VideoElement, VideoSettings};

/// The title line used for loading, error and hint messages
pub trait StatusLine {
    fn set_text(&self, text: &str);
    fn show(&self);
    fn hide(&self);
    /// Show `text` and hide the line again after `duration`
    fn flash(&self, text: &str, duration: Duration);
}

/// The manual content id input
pub trait EntryField {
    fn clear(&self);
}

/// Region holding at most one rendered media element
pub trait DisplaySurface {
    /// Drop whatever is displayed
    fn clear(&self);

    /// Attach an image right away so loading starts; the signal reports the
    /// outcome of that load.
    fn attach_image(&self, uri: &str, alt: &str) -> LoadSignal;

    fn attach_video(&self, uri: &str, settings: VideoSettings) -> Rc<dyn VideoElement>;

    fn has_media(&self) -> bool;
}

/// Long-lived handles of the kiosk window, owned by the sequencer.
///
/// Everything is reference counted so the refresh trigger and click
/// handlers can hold on to the status line independently.
#[derive(Clone)]
pub struct KioskView {
    pub status: Rc<dyn StatusLine>,
    pub input: Rc<dyn EntryField>,
    pub display: Rc<dyn DisplaySurface>,
    pub transition: Rc<dyn TransitionPlayer>,
}

impl std::fmt::Debug for KioskView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KioskView")
            .field("status", &"Rc<dyn StatusLine>")
            .field("input", &"Rc<dyn EntryField>")
            .field("display", &"Rc<dyn DisplaySurface>")
            .field("transition", &"Rc<dyn TransitionPlayer>")
            .finish()
    }
}
