use gtk4::{self, gio, prelude::*};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::player::{Completion, PlayFailure, PlaybackAttempt, TransitionPlayer};

#[derive(Debug, Default)]
struct Attempt {
    started: Option<Completion<Result<(), PlayFailure>>>,
    ended: Option<Completion<()>>,
}

/// Full-window picture layered above the page for the door clips.
///
/// Each source gets a fresh `MediaFile` because a stream that errored once
/// stays in the error state.
#[derive(Debug)]
pub struct TransitionOverlay {
    picture: gtk4::Picture,
    media: RefCell<Option<gtk4::MediaFile>>,
    attempt: Rc<RefCell<Attempt>>,
}

impl TransitionOverlay {
    pub fn new() -> Self {
        let picture = gtk4::Picture::builder()
            .content_fit(gtk4::ContentFit::Cover)
            .hexpand(true)
            .vexpand(true)
            .can_target(false)
            .visible(false)
            .build();
        picture.add_css_class("kiosk-transition");

        Self {
            picture,
            media: RefCell::new(None),
            attempt: Rc::new(RefCell::new(Attempt::default())),
        }
    }

    pub fn widget(&self) -> &gtk4::Picture {
        &self.picture
    }

    fn watch(&self, media: &gtk4::MediaFile) {
        let attempt = self.attempt.clone();
        media.connect_prepared_notify(move |media| {
            if media.is_prepared() {
                let started = attempt.borrow_mut().started.take();
                if let Some(started) = started {
                    started.complete(Ok(()));
                }
            }
        });

        let attempt = self.attempt.clone();
        media.connect_ended_notify(move |media| {
            if media.is_ended() {
                let ended = attempt.borrow_mut().ended.take();
                if let Some(ended) = ended {
                    ended.complete(());
                }
            }
        });

        let attempt = self.attempt.clone();
        media.connect_error_notify(move |media| {
            let Some(error) = media.error() else {
                return;
            };
            let Attempt { started, ended } = std::mem::take(&mut *attempt.borrow_mut());
            if let Some(started) = started {
                started.complete(Err(PlayFailure::Load(error.to_string())));
            }
            // Nothing will play to the end now
            if let Some(ended) = ended {
                ended.complete(());
            }
        });
    }
}

impl Default for TransitionOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionPlayer for TransitionOverlay {
    fn set_source(&self, uri: &str) {
        debug!("Transition source: {}", uri);
        let media = gtk4::MediaFile::for_file(&gio::File::for_uri(uri));
        self.watch(&media);
        self.picture.set_paintable(Some(&media));

        if let Some(previous) = self.media.replace(Some(media)) {
            previous.pause();
        }
    }

    fn rewind(&self) {
        if let Some(media) = self.media.borrow().as_ref() {
            if media.is_seekable() {
                media.seek(0);
            }
        }
    }

    fn set_active(&self, active: bool) {
        self.picture.set_visible(active);
    }

    fn play(&self) -> PlaybackAttempt {
        let (started, started_signal) = Completion::channel();
        let (ended, ended_signal) = Completion::channel();

        let Some(media) = self.media.borrow().clone() else {
            started.complete(Err(PlayFailure::Load("no transition source".to_string())));
            return PlaybackAttempt {
                started: started_signal,
                ended: ended_signal,
            };
        };

        if let Some(error) = media.error() {
            started.complete(Err(PlayFailure::Load(error.to_string())));
        } else if media.is_prepared() {
            started.complete(Ok(()));
        }

        *self.attempt.borrow_mut() = Attempt {
            started: (!started.is_completed()).then_some(started),
            ended: Some(ended),
        };
        media.play();

        PlaybackAttempt {
            started: started_signal,
            ended: ended_signal,
        }
    }

    fn pause(&self) {
        if let Some(media) = self.media.borrow().as_ref() {
            media.pause();
        }
    }
}
