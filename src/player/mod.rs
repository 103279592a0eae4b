mod completion;
pub mod traits;
mod transition;

pub use completion::{Completion, OnceCallback};
pub use traits::{
    LoadSignal, PlayFailure, PlaybackAttempt, StartSignal, TransitionPlayer, VideoElement,
    VideoSettings,
};
pub use transition::{play_transition, reset_transition};
