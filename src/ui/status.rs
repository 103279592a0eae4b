use gtk4::{self, glib, prelude::*};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::kiosk::{EntryField, StatusLine};

/// The title label above the display area
#[derive(Debug)]
pub struct StatusLabel {
    label: gtk4::Label,
    hide_timer: Rc<RefCell<Option<glib::SourceId>>>,
}

impl StatusLabel {
    pub fn new() -> Self {
        let label = gtk4::Label::builder()
            .wrap(true)
            .justify(gtk4::Justification::Center)
            .visible(false)
            .build();
        label.add_css_class("kiosk-status");

        Self {
            label,
            hide_timer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn widget(&self) -> &gtk4::Label {
        &self.label
    }

    fn cancel_timer(&self) {
        if let Some(timer) = self.hide_timer.borrow_mut().take() {
            timer.remove();
        }
    }
}

impl Default for StatusLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLine for StatusLabel {
    fn set_text(&self, text: &str) {
        self.label.set_text(text);
    }

    fn show(&self) {
        // A pending flash must not hide newer text
        self.cancel_timer();
        self.label.set_visible(true);
    }

    fn hide(&self) {
        self.cancel_timer();
        self.label.set_visible(false);
    }

    fn flash(&self, text: &str, duration: Duration) {
        self.set_text(text);
        self.show();

        let label = self.label.clone();
        let slot = self.hide_timer.clone();
        let timer = glib::timeout_add_local_once(duration, move || {
            // Fired sources must not be removed again
            slot.borrow_mut().take();
            label.set_visible(false);
        });
        self.hide_timer.replace(Some(timer));
    }
}

/// The manual content id entry
#[derive(Debug, Clone)]
pub struct InputEntry {
    entry: gtk4::Entry,
}

impl InputEntry {
    pub fn new() -> Self {
        let entry = gtk4::Entry::builder()
            .placeholder_text("Content ID")
            .hexpand(true)
            .build();
        Self { entry }
    }

    pub fn widget(&self) -> &gtk4::Entry {
        &self.entry
    }

    pub fn text(&self) -> String {
        self.entry.text().to_string()
    }
}

impl Default for InputEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryField for InputEntry {
    fn clear(&self) {
        self.entry.set_text("");
    }
}
