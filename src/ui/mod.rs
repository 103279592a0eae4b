//! GTK frontend. Each widget wrapper implements one of the kiosk view
//! traits so the sequencer never touches GTK directly.

mod app;
mod display;
mod status;
mod transition;
mod window;

pub use app::DoorwayApp;
pub use display::{DisplayBox, GtkVideo};
pub use status::{InputEntry, StatusLabel};
pub use transition::TransitionOverlay;
pub use window::KioskWindow;
