use tracing::{debug, warn};

use super::traits::TransitionPlayer;

/// Play one door clip to its end.
///
/// Transitions never fail the caller: a clip that cannot start (blocked by
/// policy, missing asset) is logged and skipped straight away.
pub async fn play_transition(player: &dyn TransitionPlayer, uri: &str) {
    debug!("Playing transition {}", uri);
    player.set_source(uri);
    player.rewind();
    player.set_active(true);

    let attempt = player.play();
    match attempt.started.await {
        Ok(Ok(())) => {
            if attempt.ended.await.is_err() {
                debug!("Transition {} dropped its ended signal", uri);
            }
        }
        Ok(Err(failure)) => {
            warn!("Transition {} could not play: {}", uri, failure);
            player.set_active(false);
        }
        Err(_) => {
            warn!("Transition {} dropped its start signal", uri);
            player.set_active(false);
        }
    }
}

/// Hide, pause and rewind the transition player
pub fn reset_transition(player: &dyn TransitionPlayer) {
    player.set_active(false);
    player.pause();
    player.rewind();
}
