use crate::common::mocks::{GatedTransition, Shown};
use crate::common::{TestContext, wait_for_async};
use doorway::kiosk::{SequencerController, SequencerError};
use doorway::models::{ContentId, TransitionState};
use doorway::player::VideoSettings;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

#[tokio::test]
async fn test_image_sequence_end_to_end() {
    let mut ctx = TestContext::new(GatedTransition::opened()).await;
    let mock = ctx
        .server
        .mock("GET", "/media/42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"type": "image", "title": "Cat", "file_path": "cat.png"}"#)
        .create_async()
        .await;

    let mut sequencer = ctx.sequencer();
    sequencer.show_media(&ContentId::new("42")).await;

    mock.assert_async().await;
    assert_eq!(
        ctx.view.display.shown(),
        vec![Shown::Image {
            uri: ctx.asset("cat.png"),
            alt: "Cat".to_string(),
        }]
    );
    assert!(!ctx.view.status.is_visible());
    assert_eq!(ctx.view.input.clear_count(), 1);
    assert_eq!(
        ctx.view.transition.sources(),
        vec![
            ctx.asset("videos/Door%20Close.webm"),
            ctx.asset("videos/Door%20Open.webm"),
        ]
    );
    assert!(!ctx.view.transition.is_active());
    assert_eq!(sequencer.transition_state(), TransitionState::Idle);
}

#[tokio::test]
async fn test_video_sequence_uses_kiosk_settings() {
    let mut ctx = TestContext::new(GatedTransition::opened()).await;
    let _mock = ctx
        .server
        .mock("GET", "/media/7")
        .with_status(200)
        .with_body(r#"{"type": "video", "title": "Waves", "file_path": "clips/waves.mp4"}"#)
        .create_async()
        .await;

    let mut sequencer = ctx.sequencer();
    sequencer.show_media(&ContentId::new("7")).await;

    assert_eq!(
        ctx.view.display.shown(),
        vec![Shown::Video {
            uri: ctx.asset("clips/waves.mp4"),
            settings: VideoSettings::kiosk(),
        }]
    );
    assert!(!ctx.view.status.is_visible());
}

#[tokio::test]
async fn test_not_found_shows_server_message() {
    let mut ctx = TestContext::new(GatedTransition::opened()).await;
    let _mock = ctx
        .server
        .mock("GET", "/media/999")
        .with_status(404)
        .with_body(r#"{"error": "Media not found"}"#)
        .create_async()
        .await;

    let mut sequencer = ctx.sequencer();
    sequencer.show_media(&ContentId::new("999")).await;

    assert_eq!(ctx.view.status.text(), "Media not found");
    assert!(ctx.view.status.is_visible());
    assert!(ctx.view.display.shown().is_empty());
    // Nothing to reveal, so only the close clip played
    assert_eq!(
        ctx.view.transition.sources(),
        vec![ctx.asset("videos/Door%20Close.webm")]
    );
}

#[tokio::test]
async fn test_unknown_type_reports_error() {
    let mut ctx = TestContext::new(GatedTransition::opened()).await;
    let _mock = ctx
        .server
        .mock("GET", "/media/5")
        .with_status(200)
        .with_body(r#"{"type": "audio", "title": "Song", "file_path": "song.mp3"}"#)
        .create_async()
        .await;

    let mut sequencer = ctx.sequencer();
    sequencer.show_media(&ContentId::new("5")).await;

    assert_eq!(ctx.view.status.text(), "Unknown media type.");
    assert!(ctx.view.status.is_visible());
    assert!(ctx.view.display.shown().is_empty());
}

#[tokio::test]
async fn test_controller_refuses_third_request_while_busy() {
    let mut ctx = TestContext::new(GatedTransition::default()).await;
    let first = ctx
        .server
        .mock("GET", "/media/1")
        .with_status(200)
        .with_body(r#"{"type": "image", "title": "One", "file_path": "one.png"}"#)
        .expect(1)
        .create_async()
        .await;
    let second = ctx
        .server
        .mock("GET", "/media/2")
        .with_status(200)
        .with_body(r#"{"type": "image", "title": "Two", "file_path": "two.png"}"#)
        .expect(1)
        .create_async()
        .await;
    let third = ctx
        .server
        .mock("GET", "/media/3")
        .expect(0)
        .create_async()
        .await;

    let (handle, controller) = SequencerController::new(ctx.sequencer());
    let local = tokio::task::LocalSet::new();

    local
        .run_until(async {
            tokio::task::spawn_local(controller.run());

            let first_done = handle.show_media(ContentId::new("1")).unwrap();
            // The close clip of the first sequence is held by the gate
            wait_for_async(|| ctx.view.transition.is_active()).await;

            let second_done = handle.show_media(ContentId::new("2")).unwrap();
            assert_eq!(
                handle.show_media(ContentId::new("3")).unwrap_err(),
                SequencerError::Busy(ContentId::new("3"))
            );

            ctx.view.transition.open_gate();
            first_done.await.unwrap();
            second_done.await.unwrap();
        })
        .await;

    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
    assert_eq!(
        ctx.view.display.shown(),
        vec![Shown::Image {
            uri: ctx.asset("two.png"),
            alt: "Two".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_steps_follow_close_clip_and_loading_title() {
    let mut ctx = TestContext::new(GatedTransition::opened()).await;
    let _previous = ctx
        .server
        .mock("GET", "/media/1")
        .with_status(200)
        .with_body(r#"{"type": "image", "title": "One", "file_path": "one.png"}"#)
        .create_async()
        .await;

    let requested = Arc::new(AtomicBool::new(false));
    let lookup_seen = requested.clone();
    let _next = ctx
        .server
        .mock("GET", "/media/2")
        .with_status(200)
        .with_body_from_request(move |_| {
            lookup_seen.store(true, Ordering::SeqCst);
            // Keep the lookup in flight while the test inspects the view
            std::thread::sleep(Duration::from_millis(200));
            br#"{"type": "image", "title": "Two", "file_path": "two.png"}"#.to_vec()
        })
        .create_async()
        .await;

    let mut sequencer = ctx.sequencer();
    sequencer.show_media(&ContentId::new("1")).await;
    ctx.view.transition.close_gate();

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async {
            let running = tokio::task::spawn_local(async move {
                sequencer.show_media(&ContentId::new("2")).await;
            });

            wait_for_async(|| ctx.view.transition.is_active()).await;

            // Close clip still playing: old media stays, nothing fetched yet
            assert_eq!(
                ctx.view.display.shown(),
                vec![Shown::Image {
                    uri: ctx.asset("one.png"),
                    alt: "One".to_string(),
                }]
            );
            assert!(!ctx.view.status.is_visible());
            assert_eq!(ctx.view.input.clear_count(), 2);
            assert!(!requested.load(Ordering::SeqCst));

            ctx.view.transition.open_gate();
            wait_for_async(|| requested.load(Ordering::SeqCst)).await;

            // The loading title was up before the request reached the server
            assert_eq!(ctx.view.status.text(), "Loading media for ID: 2...");
            assert!(ctx.view.status.is_visible());
            assert!(ctx.view.display.shown().is_empty());

            running.await.unwrap();
        })
        .await;

    assert_eq!(
        ctx.view.display.shown(),
        vec![Shown::Image {
            uri: ctx.asset("two.png"),
            alt: "Two".to_string(),
        }]
    );
    assert!(!ctx.view.status.is_visible());
}
