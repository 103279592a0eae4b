use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

use super::errors::SequencerError;
use super::sequencer::MediaSequencer;
use crate::models::ContentId;

/// Commands that can be sent to the sequencer controller
#[derive(Debug)]
pub enum SequencerCommand {
    /// Run the full sequence for one content id
    ShowMedia {
        id: ContentId,
        respond_to: oneshot::Sender<()>,
    },
}

/// Controller that owns the sequencer and runs one sequence at a time.
///
/// The command channel holds a single slot: while a sequence runs, one more
/// request can wait; anything beyond that is refused with
/// [`SequencerError::Busy`] instead of racing on the shared view.
pub struct SequencerController {
    sequencer: MediaSequencer,
    receiver: mpsc::Receiver<SequencerCommand>,
}

impl SequencerController {
    pub fn new(sequencer: MediaSequencer) -> (SequencerHandle, SequencerController) {
        let (sender, receiver) = mpsc::channel(1);
        let controller = SequencerController {
            sequencer,
            receiver,
        };
        (SequencerHandle { sender }, controller)
    }

    /// Run the controller event loop until every handle is dropped
    pub async fn run(mut self) {
        debug!("SequencerController event loop started");

        while let Some(command) = self.receiver.recv().await {
            match command {
                SequencerCommand::ShowMedia { id, respond_to } => {
                    trace!("Starting sequence for {}", id);
                    self.sequencer.show_media(&id).await;
                    let _ = respond_to.send(());
                }
            }
        }

        debug!("SequencerController event loop terminated");
    }
}

/// Handle to send requests to the sequencer controller
#[derive(Clone, Debug)]
pub struct SequencerHandle {
    sender: mpsc::Sender<SequencerCommand>,
}

impl SequencerHandle {
    /// Queue a sequence for `id`. The returned receiver resolves once that
    /// sequence has settled.
    pub fn show_media(&self, id: ContentId) -> Result<oneshot::Receiver<()>, SequencerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .try_send(SequencerCommand::ShowMedia {
                id: id.clone(),
                respond_to,
            })
            .map_err(|e| match e {
                mpsc::error::TrySendError::Full(_) => SequencerError::Busy(id),
                mpsc::error::TrySendError::Closed(_) => SequencerError::Disconnected,
            })?;
        Ok(response)
    }
}
