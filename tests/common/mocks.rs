use doorway::kiosk::{DisplaySurface, EntryField, KioskView, StatusLine};
use doorway::player::{
    Completion, LoadSignal, PlaybackAttempt, StartSignal, TransitionPlayer, VideoElement,
    VideoSettings,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

#[derive(Default)]
pub struct MockStatus {
    text: RefCell<String>,
    visible: Cell<bool>,
    flashes: RefCell<Vec<String>>,
}

impl MockStatus {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn flashes(&self) -> Vec<String> {
        self.flashes.borrow().clone()
    }
}

impl StatusLine for MockStatus {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }

    fn show(&self) {
        self.visible.set(true);
    }

    fn hide(&self) {
        self.visible.set(false);
    }

    fn flash(&self, text: &str, _duration: Duration) {
        self.set_text(text);
        self.flashes.borrow_mut().push(text.to_string());
        self.visible.set(false);
    }
}

#[derive(Default)]
pub struct MockInput {
    clears: Cell<usize>,
}

impl MockInput {
    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }
}

impl EntryField for MockInput {
    fn clear(&self) {
        self.clears.set(self.clears.get() + 1);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Image { uri: String, alt: String },
    Video { uri: String, settings: VideoSettings },
}

/// Display that accepts everything: images load, videos start
#[derive(Default)]
pub struct MockDisplay {
    shown: RefCell<Vec<Shown>>,
}

impl MockDisplay {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.borrow().clone()
    }
}

impl DisplaySurface for MockDisplay {
    fn clear(&self) {
        self.shown.borrow_mut().clear();
    }

    fn attach_image(&self, uri: &str, alt: &str) -> LoadSignal {
        self.shown.borrow_mut().push(Shown::Image {
            uri: uri.to_string(),
            alt: alt.to_string(),
        });
        let (loaded, signal) = Completion::channel();
        loaded.complete(Ok(()));
        signal
    }

    fn attach_video(&self, uri: &str, settings: VideoSettings) -> Rc<dyn VideoElement> {
        self.shown.borrow_mut().push(Shown::Video {
            uri: uri.to_string(),
            settings,
        });
        Rc::new(MockVideo)
    }

    fn has_media(&self) -> bool {
        !self.shown.borrow().is_empty()
    }
}

pub struct MockVideo;

impl VideoElement for MockVideo {
    fn play(&self) -> StartSignal {
        let (started, signal) = Completion::channel();
        started.complete(Ok(()));
        signal
    }

    fn set_controls_visible(&self, _visible: bool) {}

    fn await_manual_start(&self, _on_started: Box<dyn FnOnce()>) {}
}

/// Transition player whose clips only end once the gate is opened
#[derive(Default)]
pub struct GatedTransition {
    sources: RefCell<Vec<String>>,
    pending: RefCell<Vec<Completion<()>>>,
    open: Cell<bool>,
    active: Cell<bool>,
}

impl GatedTransition {
    pub fn opened() -> Self {
        let transition = Self::default();
        transition.open.set(true);
        transition
    }

    pub fn sources(&self) -> Vec<String> {
        self.sources.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Hold every clip started from now on until the gate opens again
    pub fn close_gate(&self) {
        self.open.set(false);
    }

    /// Finish every clip that is playing and let later clips run through
    pub fn open_gate(&self) {
        self.open.set(true);
        for ended in self.pending.borrow_mut().drain(..) {
            ended.complete(());
        }
    }
}

impl TransitionPlayer for GatedTransition {
    fn set_source(&self, uri: &str) {
        self.sources.borrow_mut().push(uri.to_string());
    }

    fn rewind(&self) {}

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }

    fn play(&self) -> PlaybackAttempt {
        let (started, started_signal) = Completion::channel();
        let (ended, ended_signal) = Completion::channel();
        started.complete(Ok(()));

        if self.open.get() {
            ended.complete(());
        } else {
            self.pending.borrow_mut().push(ended);
        }

        PlaybackAttempt {
            started: started_signal,
            ended: ended_signal,
        }
    }

    fn pause(&self) {}
}

/// Concrete handles behind a [`KioskView`], kept for assertions
pub struct MockView {
    pub status: Rc<MockStatus>,
    pub input: Rc<MockInput>,
    pub display: Rc<MockDisplay>,
    pub transition: Rc<GatedTransition>,
}

impl MockView {
    pub fn new(transition: GatedTransition) -> Self {
        Self {
            status: Rc::new(MockStatus::default()),
            input: Rc::new(MockInput::default()),
            display: Rc::new(MockDisplay::default()),
            transition: Rc::new(transition),
        }
    }

    pub fn kiosk_view(&self) -> KioskView {
        KioskView {
            status: self.status.clone(),
            input: self.input.clone(),
            display: self.display.clone(),
            transition: self.transition.clone(),
        }
    }
}
