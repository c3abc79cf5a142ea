pub mod use_assistant;
pub mod use_session;

use crate::state::AppState;
use dioxus::prelude::*;
use mundovpn_common::{SecurityFeature, Server};
use use_session::SessionAction;

#[derive(Clone, Copy)]
pub struct MundoClient {
    state: AppState,
}

impl MundoClient {
    pub fn toggle(&self) {
        self.state.session.action.send(SessionAction::Toggle);
    }

    pub fn select_server(&self, server: Server) {
        self.state
            .session
            .action
            .send(SessionAction::SelectServer(server));
    }

    pub fn toggle_security(&self, feature: SecurityFeature) {
        self.state
            .session
            .action
            .send(SessionAction::ToggleSecurity(feature));
    }

    pub fn clear_data(&self) {
        self.state.session.action.send(SessionAction::ClearData);
    }

    /// Queues a question. Returns false when one is already pending.
    pub fn ask(&self, prompt: &str) -> bool {
        let mut busy = self.state.assistant.busy;
        if *busy.peek() || prompt.trim().is_empty() {
            return false;
        }
        busy.set(true);
        self.state.assistant.ask.send(prompt.to_string());
        true
    }
}

pub fn use_mundo_client() -> MundoClient {
    let state = use_context::<AppState>();
    MundoClient { state }
}
