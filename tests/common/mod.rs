pub mod mocks;

use doorway::api::{ApiClient, MediaServer};
use doorway::config::TransitionConfig;
use doorway::kiosk::MediaSequencer;
use std::sync::Arc;
use std::time::Duration;

use mocks::{GatedTransition, MockView};

pub struct TestContext {
    pub server: mockito::ServerGuard,
    pub client: Arc<ApiClient>,
    pub view: MockView,
}

impl TestContext {
    pub async fn new(transition: GatedTransition) -> Self {
        let server = mockito::Server::new_async().await;
        let client = Arc::new(
            ApiClient::new(&server.url(), Duration::from_secs(5))
                .expect("Failed to create API client"),
        );

        Self {
            server,
            client,
            view: MockView::new(transition),
        }
    }

    pub fn sequencer(&self) -> MediaSequencer {
        let server: Arc<dyn MediaServer> = self.client.clone();
        MediaSequencer::new(
            server,
            self.view.kiosk_view(),
            &TransitionConfig::default(),
        )
    }

    pub fn asset(&self, path: &str) -> String {
        format!("{}/static/{}", self.server.url(), path)
    }
}

/// Poll `condition` until it holds, giving local tasks a chance to run
pub async fn wait_for_async<F>(condition: F)
where
    F: Fn() -> bool,
{
    for _ in 0..500 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Condition not met within 5 seconds");
}
