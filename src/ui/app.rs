use anyhow::Result;
use gtk4::{self, gdk, glib, prelude::*};
use std::rc::Rc;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{info, warn};

use super::window::KioskWindow;
use crate::api::{ApiClient, MediaServer, RuntimeBound};
use crate::config::Config;
use crate::kiosk::{
    Hotkey, MediaSequencer, SequencerController, StatusLine, refresh_server_data, submit_input,
};

const APP_ID: &str = "io.github.doorway.Kiosk";

pub struct DoorwayApp {
    app: gtk4::Application,
}

impl DoorwayApp {
    pub fn new(config: Config, runtime: Arc<Runtime>) -> Result<Self> {
        let client = Arc::new(ApiClient::from_config(&config.server)?);

        let app = gtk4::Application::builder()
            .application_id(APP_ID)
            .build();

        app.connect_activate(move |app| {
            if let Some(window) = app.active_window() {
                window.present();
                return;
            }

            info!("Application activated - creating kiosk window");
            load_css();

            let window = KioskWindow::new(
                app,
                &config.display,
                client.clone(),
                runtime.handle().clone(),
            );
            let view = window.kiosk_view();

            let server: Arc<dyn MediaServer> = Arc::new(RuntimeBound::new(
                client.clone(),
                runtime.handle().clone(),
            ));

            let sequencer = MediaSequencer::new(server.clone(), view.clone(), &config.transitions);
            let (handle, controller) = SequencerController::new(sequencer);
            glib::spawn_future_local(controller.run());

            let status: Rc<dyn StatusLine> = view.status.clone();
            window.connect_submit({
                let status = status.clone();
                move |raw| {
                    submit_input(&handle, status.as_ref(), raw);
                }
            });

            let notice = config.display.refresh_notice();
            window.connect_hotkey({
                let window = window.clone();
                move |hotkey| match hotkey {
                    Hotkey::ToggleControls => window.toggle_controls(),
                    Hotkey::ToggleFullscreen => window.toggle_fullscreen(),
                    Hotkey::RefreshData => {
                        let server = server.clone();
                        let status = status.clone();
                        glib::spawn_future_local(async move {
                            refresh_server_data(server.as_ref(), status.as_ref(), notice).await;
                        });
                    }
                }
            });

            window.present();
            if config.display.start_fullscreen {
                window.window().fullscreen();
            }
            info!("Kiosk window presented");
        });

        Ok(Self { app })
    }

    pub fn run(&self) -> glib::ExitCode {
        info!("Running Doorway application");
        // Command line arguments belong to us, not GApplication
        self.app.run_with_args::<&str>(&[])
    }
}

fn load_css() {
    let Some(display) = gdk::Display::default() else {
        warn!("No default display, skipping stylesheet");
        return;
    };

    let css_provider = gtk4::CssProvider::new();
    css_provider.load_from_string(include_str!("style.css"));
    gtk4::style_context_add_provider_for_display(
        &display,
        &css_provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
