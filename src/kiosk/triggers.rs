use tokio::sync::oneshot;
use tracing::{debug, warn};

use super::controller::SequencerHandle;
use super::view::StatusLine;
use crate::constants::EMPTY_INPUT;
use crate::models::ContentId;

/// Submit the manual input (button click or Enter).
///
/// Blank input only prompts for an id. Returns the completion of the queued
/// sequence, `None` when nothing was started.
pub fn submit_input(
    handle: &SequencerHandle,
    status: &dyn StatusLine,
    raw: &str,
) -> Option<oneshot::Receiver<()>> {
    let Some(id) = ContentId::parse_input(raw) else {
        debug!("Ignoring blank submit");
        status.set_text(EMPTY_INPUT);
        status.show();
        return None;
    };

    match handle.show_media(id) {
        Ok(settled) => Some(settled),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}
