use crate::assistant::AssistantBridge;
use crate::config::CONFIG;
use crate::hooks::use_session::SessionState;
use crate::services::{AssistantService, ProductionAssistantService};
use chrono::Local;
use dioxus::prelude::*;
use futures_util::StreamExt;
use mundovpn_common::ChatMessage;
use tracing::warn;

#[derive(Clone, Copy)]
pub struct AssistantState {
    pub messages: Signal<Vec<ChatMessage>>,
    pub busy: Signal<bool>,
    pub ask: Coroutine<String>,
}

pub fn use_assistant(session: SessionState) -> AssistantState {
    let bridge =
        use_hook(|| AssistantBridge::new(ProductionAssistantService, CONFIG.assistant_timeout));
    use_assistant_internal(session, bridge)
}

pub fn use_assistant_with_service<S: AssistantService>(
    session: SessionState,
    bridge: AssistantBridge<S>,
) -> AssistantState {
    use_assistant_internal(session, bridge)
}

fn use_assistant_internal<S: AssistantService>(
    session: SessionState,
    bridge: AssistantBridge<S>,
) -> AssistantState {
    let mut messages = use_signal(Vec::<ChatMessage>::new);
    let mut busy = use_signal(|| false);

    let ask = use_coroutine(move |mut rx: UnboundedReceiver<String>| {
        let bridge = bridge.clone();
        async move {
            while let Some(prompt) = rx.next().await {
                let prompt = prompt.trim().to_string();
                if prompt.is_empty() {
                    busy.set(false);
                    continue;
                }

                let history = messages.peek().clone();
                let context = session.controller.peek().context();
                messages
                    .write()
                    .push(ChatMessage::user(prompt.clone(), Local::now().timestamp_millis()));
                busy.set(true);

                match bridge.ask(&prompt, &history, context).await {
                    Ok(reply) => messages.write().push(reply),
                    Err(e) => warn!("Question dropped: {}", e),
                }
                busy.set(false);
            }
        }
    });

    AssistantState {
        messages,
        busy,
        ask,
    }
}
