// Library entry shared by the GTK binary and the tests.
// Everything outside `ui` is toolkit independent.

pub mod api;
pub mod config;
pub mod constants;
pub mod kiosk;
pub mod models;
pub mod player;

#[cfg(feature = "gtk")]
pub mod ui;
