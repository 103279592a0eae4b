use crate::common::TestContext;
use crate::common::mocks::GatedTransition;
use doorway::kiosk::refresh_server_data;
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_refresh_flashes_confirmation() {
    let mut ctx = TestContext::new(GatedTransition::opened()).await;
    let mock = ctx
        .server
        .mock("POST", "/refresh_data")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body(r#"{"status": "success", "message": "Media data reloaded"}"#)
        .create_async()
        .await;

    refresh_server_data(
        ctx.client.as_ref(),
        ctx.view.status.as_ref(),
        Duration::from_millis(1500),
    )
    .await;

    mock.assert_async().await;
    assert_eq!(ctx.view.status.flashes(), vec!["Data Refreshed!".to_string()]);
    assert!(!ctx.view.status.is_visible());
}

#[tokio::test]
async fn test_refresh_failure_keeps_message_visible() {
    let mut ctx = TestContext::new(GatedTransition::opened()).await;
    let _mock = ctx
        .server
        .mock("POST", "/refresh_data")
        .with_status(500)
        .with_body(r#"{"error": "Could not read media_data.json"}"#)
        .create_async()
        .await;

    refresh_server_data(
        ctx.client.as_ref(),
        ctx.view.status.as_ref(),
        Duration::from_millis(1500),
    )
    .await;

    assert_eq!(
        ctx.view.status.text(),
        "Refresh Error: Could not read media_data.json"
    );
    assert!(ctx.view.status.is_visible());
    assert!(ctx.view.status.flashes().is_empty());
}
