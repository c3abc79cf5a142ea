use crate::hooks::use_assistant::{use_assistant, AssistantState};
use crate::hooks::use_session::{use_session, SessionState};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    pub session: SessionState,
    pub assistant: AssistantState,
}

#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let session = use_session();
    let assistant = use_assistant(session);

    use_context_provider(|| AppState { session, assistant });

    rsx! {
        {children}
    }
}
