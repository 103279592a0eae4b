use gtk4::{self, gdk, gio, glib, prelude::*};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::kiosk::DisplaySurface;
use crate::player::{
    Completion, LoadSignal, OnceCallback, PlayFailure, StartSignal, VideoElement, VideoSettings,
};

type StartSlot = Rc<RefCell<Option<Completion<Result<(), PlayFailure>>>>>;

/// Media region below the status line
#[derive(Debug)]
pub struct DisplayBox {
    container: gtk4::Box,
    client: Arc<ApiClient>,
    runtime: Handle,
    current_video: RefCell<Option<gtk4::MediaFile>>,
}

impl DisplayBox {
    pub fn new(client: Arc<ApiClient>, runtime: Handle) -> Self {
        let container = gtk4::Box::builder()
            .orientation(gtk4::Orientation::Vertical)
            .hexpand(true)
            .vexpand(true)
            .build();
        container.add_css_class("kiosk-display");

        Self {
            container,
            client,
            runtime,
            current_video: RefCell::new(None),
        }
    }

    pub fn widget(&self) -> &gtk4::Box {
        &self.container
    }

    fn media_picture() -> gtk4::Picture {
        gtk4::Picture::builder()
            .content_fit(gtk4::ContentFit::Contain)
            .hexpand(true)
            .vexpand(true)
            .build()
    }
}

impl DisplaySurface for DisplayBox {
    fn clear(&self) {
        if let Some(media) = self.current_video.borrow_mut().take() {
            media.pause();
        }
        while let Some(child) = self.container.first_child() {
            self.container.remove(&child);
        }
    }

    fn attach_image(&self, uri: &str, alt: &str) -> LoadSignal {
        let picture = Self::media_picture();
        picture.set_alternative_text(Some(alt));
        self.container.append(&picture);

        let (loaded, receiver) = Completion::channel();
        let client = self.client.clone();
        let runtime = self.runtime.clone();
        let uri = uri.to_string();

        glib::spawn_future_local(async move {
            debug!("Fetching image {}", uri);
            let request_uri = uri.clone();
            let fetched = runtime
                .spawn(async move { client.fetch_asset(&request_uri).await })
                .await;

            let result = match fetched {
                Ok(Ok(bytes)) => {
                    let bytes = glib::Bytes::from_owned(bytes);
                    match gdk::Texture::from_bytes(&bytes) {
                        Ok(texture) => {
                            picture.set_paintable(Some(&texture));
                            Ok(())
                        }
                        Err(e) => Err(format!("Failed to create texture: {}", e)),
                    }
                }
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => Err(format!("Image download task failed: {}", e)),
            };

            if let Err(reason) = &result {
                warn!("Image {} failed to load: {}", uri, reason);
            }
            loaded.complete(result);
        });

        receiver
    }

    fn attach_video(&self, uri: &str, settings: VideoSettings) -> Rc<dyn VideoElement> {
        let media = gtk4::MediaFile::for_file(&gio::File::for_uri(uri));
        media.set_muted(settings.muted);
        media.set_loop(settings.looping);

        let picture = Self::media_picture();
        picture.set_paintable(Some(&media));

        let controls = gtk4::MediaControls::new(Some(&media));
        controls.set_visible(settings.controls);

        // Pictures never escape their parent, so playback is always inline
        let column = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
        column.append(&picture);
        column.append(&controls);
        self.container.append(&column);

        self.current_video.replace(Some(media.clone()));
        Rc::new(GtkVideo::new(media, picture, controls))
    }

    fn has_media(&self) -> bool {
        self.container.first_child().is_some()
    }
}

/// Ask a prepared stream to play. GTK has no autoplay policy, so a refusal
/// here only happens when the backend declines to start.
fn start_playing(media: &gtk4::MediaFile) -> Result<(), PlayFailure> {
    media.play();
    if media.is_playing() {
        Ok(())
    } else {
        Err(PlayFailure::Blocked("stream refused to start".to_string()))
    }
}

/// A content video backed by a `MediaFile`
#[derive(Debug)]
pub struct GtkVideo {
    media: gtk4::MediaFile,
    picture: gtk4::Picture,
    controls: gtk4::MediaControls,
    pending_start: StartSlot,
}

impl GtkVideo {
    fn new(media: gtk4::MediaFile, picture: gtk4::Picture, controls: gtk4::MediaControls) -> Self {
        let pending_start: StartSlot = Rc::new(RefCell::new(None));

        let slot = pending_start.clone();
        media.connect_prepared_notify(move |media| {
            if !media.is_prepared() {
                return;
            }
            let Some(started) = slot.borrow_mut().take() else {
                return;
            };
            started.complete(start_playing(media));
        });

        let slot = pending_start.clone();
        media.connect_error_notify(move |media| {
            let Some(error) = media.error() else {
                return;
            };
            if let Some(started) = slot.borrow_mut().take() {
                started.complete(Err(PlayFailure::Load(error.to_string())));
            }
        });

        Self {
            media,
            picture,
            controls,
            pending_start,
        }
    }
}

impl VideoElement for GtkVideo {
    fn play(&self) -> StartSignal {
        let (started, receiver) = Completion::channel();

        if let Some(error) = self.media.error() {
            started.complete(Err(PlayFailure::Load(error.to_string())));
            return receiver;
        }

        if self.media.is_prepared() {
            started.complete(start_playing(&self.media));
            return receiver;
        }

        // Resolved by the prepared/error notifications
        self.pending_start.replace(Some(started));
        self.media.play();
        receiver
    }

    fn set_controls_visible(&self, visible: bool) {
        self.controls.set_visible(visible);
    }

    fn await_manual_start(&self, on_started: Box<dyn FnOnce()>) {
        let on_started = OnceCallback::new(on_started);

        // Covers the revealed controls as well as clicks
        let started = on_started.clone();
        self.media.connect_playing_notify(move |media| {
            if media.is_playing() && started.fire() {
                debug!("Video started by the visitor");
            }
        });

        let gesture = gtk4::GestureClick::new();
        let media = self.media.clone();
        gesture.connect_released(move |gesture, _, _, _| {
            media.play();
            if !media.is_playing() {
                warn!("Manual play attempt failed");
                return;
            }
            on_started.fire();
            if let Some(widget) = gesture.widget() {
                widget.remove_controller(gesture);
            }
        });

        self.picture.add_controller(gesture);
    }
}
