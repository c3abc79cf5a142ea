use crate::clock::{Clock, SystemClock};
use crate::components::toast::{ToastManager, ToastType};
use crate::config::{RuntimeConfig, CONFIG};
use crate::session::SessionController;
use crate::simulator::RandomTraffic;
use crate::storage::{FileStore, KeyValueStore};
use dioxus::prelude::*;
use futures_util::StreamExt;
use mundovpn_common::{ConnectionStatus, SecurityFeature, Server};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

pub enum SessionAction {
    Toggle,
    SelectServer(Server),
    ToggleSecurity(SecurityFeature),
    ClearData,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionTimings {
    pub handshake_delay: Duration,
    pub tick_interval: Duration,
}

impl SessionTimings {
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            handshake_delay: config.handshake_delay,
            tick_interval: config.tick_interval,
        }
    }
}

#[derive(Clone, Copy)]
pub struct SessionState {
    pub controller: Signal<SessionController>,
    pub action: Coroutine<SessionAction>,
}

pub fn use_session() -> SessionState {
    let store = use_hook(|| Arc::new(FileStore::open_default()) as Arc<dyn KeyValueStore>);
    let clock = use_hook(|| Arc::new(SystemClock) as Arc<dyn Clock>);

    use_session_internal(store, clock, SessionTimings::from_config(&CONFIG))
}

pub fn use_session_with(
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    timings: SessionTimings,
) -> SessionState {
    use_session_internal(store, clock, timings)
}

fn use_session_internal(
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    timings: SessionTimings,
) -> SessionState {
    let mut controller = use_signal(move || SessionController::load(store, clock));
    let toast_manager = use_context::<ToastManager>();

    // Traffic ticks keep running while disconnected so the chart scrolls flat.
    use_future(move || async move {
        let mut source = RandomTraffic::new();
        let mut ticker = tokio::time::interval(timings.tick_interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            controller.write().tick(&mut source);
        }
    });

    let action = use_coroutine(move |mut rx: UnboundedReceiver<SessionAction>| {
        let mut toasts = toast_manager;
        async move {
            while let Some(msg) = rx.next().await {
                match msg {
                    SessionAction::Toggle => {
                        let was_connected =
                            controller.peek().status() == ConnectionStatus::Connected;
                        let result = controller.write().toggle();
                        match result {
                            Ok(Some(ticket)) => {
                                spawn(async move {
                                    let mut toasts = toasts;
                                    tokio::time::sleep(timings.handshake_delay).await;
                                    let connected = match controller.try_write() {
                                        Ok(mut c) => c.complete_handshake(ticket),
                                        Err(_) => false,
                                    };
                                    if connected {
                                        let name = controller.peek().selected_server().name.clone();
                                        toasts.show_connected(&name);
                                    }
                                });
                            }
                            Ok(None) if was_connected => {
                                toasts.show_session_closed(controller.peek().history().first());
                            }
                            Ok(None) => {}
                            Err(e) => {
                                error!("Toggle failed: {}", e);
                                toasts.show_error(&e);
                            }
                        }
                    }
                    SessionAction::SelectServer(server) => {
                        controller.write().select_server(server);
                    }
                    SessionAction::ToggleSecurity(feature) => {
                        controller.write().toggle_security(feature);
                    }
                    SessionAction::ClearData => {
                        let result = controller.write().clear_data();
                        match result {
                            Ok(()) => {
                                info!("Local data wiped from the panel");
                                toasts.show("Local data cleared", ToastType::Success);
                            }
                            Err(e) => {
                                error!("Failed to clear local data: {}", e);
                                toasts.show_error(&e);
                            }
                        }
                    }
                }
            }
        }
    });

    use_drop(move || {
        if let Ok(mut c) = controller.try_write() {
            c.invalidate_pending();
        }
    });

    SessionState { controller, action }
}
