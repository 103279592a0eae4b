mod controller;
mod errors;
mod hotkeys;
mod refresh;
mod sequencer;
mod triggers;
mod view;

pub use controller::{SequencerCommand, SequencerController, SequencerHandle};
pub use errors::{SequencerError, ShowError};
pub use hotkeys::{Hotkey, KeyInput};
pub use refresh::refresh_server_data;
pub use sequencer::MediaSequencer;
pub use triggers::submit_input;
pub use view::{DisplaySurface, EntryField, KioskView, StatusLine};
