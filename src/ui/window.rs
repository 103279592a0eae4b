use gtk4::{self, gdk, glib, prelude::*};
use std::rc::Rc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::debug;

use super::display::DisplayBox;
use super::status::{InputEntry, StatusLabel};
use super::transition::TransitionOverlay;
use crate::api::ApiClient;
use crate::config::DisplayConfig;
use crate::kiosk::{Hotkey, KeyInput, KioskView};

/// The single kiosk window: an optional input row, the status line and the
/// display area, with the transition picture layered on top.
#[derive(Debug, Clone)]
pub struct KioskWindow {
    window: gtk4::ApplicationWindow,
    controls: gtk4::Box,
    submit_button: gtk4::Button,
    input: Rc<InputEntry>,
    status: Rc<StatusLabel>,
    display: Rc<DisplayBox>,
    transition: Rc<TransitionOverlay>,
}

impl KioskWindow {
    pub fn new(
        app: &gtk4::Application,
        config: &DisplayConfig,
        client: Arc<ApiClient>,
        runtime: Handle,
    ) -> Self {
        let input = Rc::new(InputEntry::new());
        let status = Rc::new(StatusLabel::new());
        let display = Rc::new(DisplayBox::new(client, runtime));
        let transition = Rc::new(TransitionOverlay::new());

        let submit_button = gtk4::Button::with_label("Show");
        submit_button.add_css_class("suggested-action");

        let controls = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);
        controls.add_css_class("kiosk-controls");
        controls.append(input.widget());
        controls.append(&submit_button);
        controls.set_visible(config.show_controls);

        let page = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
        page.add_css_class("kiosk-page");
        page.append(&controls);
        page.append(status.widget());
        page.append(display.widget());

        let overlay = gtk4::Overlay::new();
        overlay.set_child(Some(&page));
        overlay.add_overlay(transition.widget());

        let window = gtk4::ApplicationWindow::builder()
            .application(app)
            .title("Doorway")
            .default_width(1280)
            .default_height(720)
            .child(&overlay)
            .build();

        Self {
            window,
            controls,
            submit_button,
            input,
            status,
            display,
            transition,
        }
    }

    pub fn window(&self) -> &gtk4::ApplicationWindow {
        &self.window
    }

    /// Handles handed to the sequencer
    pub fn kiosk_view(&self) -> KioskView {
        KioskView {
            status: self.status.clone(),
            input: self.input.clone(),
            display: self.display.clone(),
            transition: self.transition.clone(),
        }
    }

    /// Run `callback` with the entry text on button click or Enter
    pub fn connect_submit<F>(&self, callback: F)
    where
        F: Fn(&str) + 'static,
    {
        let callback = Rc::new(callback);

        let input = self.input.clone();
        let on_click = callback.clone();
        self.submit_button.connect_clicked(move |_| {
            on_click(&input.text());
        });

        let input = self.input.clone();
        self.input.widget().connect_activate(move |_| {
            callback(&input.text());
        });
    }

    /// Dispatch kiosk shortcuts. The controller runs in the capture phase so
    /// the entry never sees the keys, and Tab does not move focus.
    pub fn connect_hotkey<F>(&self, callback: F)
    where
        F: Fn(Hotkey) + 'static,
    {
        let key_controller = gtk4::EventControllerKey::new();
        key_controller.set_propagation_phase(gtk4::PropagationPhase::Capture);

        key_controller.connect_key_pressed(move |_controller, keyval, _keycode, _state| {
            match Hotkey::from_key(key_input(keyval)) {
                Some(hotkey) => {
                    debug!("Hotkey {:?}", hotkey);
                    callback(hotkey);
                    glib::Propagation::Stop
                }
                None => glib::Propagation::Proceed,
            }
        });

        self.window.add_controller(key_controller);
    }

    pub fn toggle_controls(&self) {
        let visible = !self.controls.is_visible();
        self.controls.set_visible(visible);
        if visible {
            self.input.widget().grab_focus();
        }
    }

    pub fn toggle_fullscreen(&self) {
        if self.window.is_fullscreen() {
            self.window.unfullscreen();
        } else {
            self.window.fullscreen();
        }
    }

    pub fn present(&self) {
        self.window.present();
    }
}

fn key_input(keyval: gdk::Key) -> KeyInput {
    match keyval {
        gdk::Key::Tab | gdk::Key::ISO_Left_Tab | gdk::Key::KP_Tab => KeyInput::Tab,
        _ => keyval.to_unicode().map_or(KeyInput::Other, KeyInput::Char),
    }
}
