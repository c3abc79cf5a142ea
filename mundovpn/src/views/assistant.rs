use crate::hooks::use_mundo_client;
use crate::icons::*;
use crate::state::AppState;
use dioxus::prelude::*;
use mundovpn_common::ChatRole;

#[component]
pub fn Assistant() -> Element {
    let state = use_context::<AppState>();
    let client = use_mundo_client();
    let mut input = use_signal(String::new);

    let messages = state.assistant.messages.read().clone();
    let busy = (state.assistant.busy)();
    let can_send = !busy && !input().trim().is_empty();

    let mut submit = move || {
        let text = input.peek().clone();
        if client.ask(&text) {
            input.set(String::new());
        }
    };

    rsx! {
        div { class: "flex flex-col h-full",
            div { class: "bg-blue-600/10 border border-blue-500/20 p-4 rounded-2xl mb-4 flex items-center justify-between",
                div { class: "flex items-center gap-3",
                    div { class: "p-2 bg-blue-500 rounded-lg",
                        Zap { size: 16, class: Some("text-white".to_string()) }
                    }
                    p { class: "text-xs text-blue-100 font-medium", "IA Mundo está online." }
                }
                div { class: "flex items-center gap-1.5 px-3 py-1 bg-yellow-500/10 border border-yellow-500/20 rounded-full",
                    span { class: "text-[9px] font-bold text-yellow-500 uppercase tracking-wider", "Fast Response Active" }
                }
            }

            div { class: "flex-1 overflow-y-auto space-y-4 pr-2",
                if messages.is_empty() {
                    div { class: "flex flex-col items-center justify-center py-12 text-center text-gray-600 opacity-50",
                        MessageSquare { size: 48 }
                        p { class: "text-sm font-medium mt-4", "Inicie uma conversa ultra-rápida com sua Assistência IA" }
                        p { class: "text-[10px] mt-2", "Alimentado por Gemini 2.5 Flash Lite para respostas em tempo real." }
                    }
                }
                for (i, m) in messages.iter().enumerate() {
                    {
                        let is_user = m.role == ChatRole::User;
                        let align = if is_user { "justify-end" } else { "justify-start" };
                        let bubble = if is_user { "bg-blue-600 text-white rounded-br-none shadow-lg" } else { "glass rounded-bl-none" };
                        rsx! {
                            div { key: "{i}", class: "flex {align}",
                                div { class: "max-w-[85%] p-3.5 rounded-2xl text-sm leading-relaxed {bubble}",
                                    "{m.content}"
                                    if let Some(ms) = m.latency_ms {
                                        p { class: "text-[9px] text-gray-500 mt-1 font-mono", "{ms} ms" }
                                    }
                                }
                            }
                        }
                    }
                }
                if busy {
                    div { class: "flex justify-start",
                        div { class: "glass p-3.5 rounded-2xl rounded-bl-none flex items-center gap-2",
                            span { class: "w-1.5 h-1.5 bg-blue-500 rounded-full animate-bounce" }
                            span { class: "w-1.5 h-1.5 bg-blue-500 rounded-full animate-bounce" }
                            span { class: "w-1.5 h-1.5 bg-blue-500 rounded-full animate-bounce" }
                        }
                    }
                }
            }

            div { class: "mt-4 flex gap-2",
                input {
                    class: "flex-1 glass bg-gray-900 border-gray-700 rounded-2xl px-5 py-4 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500/50 disabled:opacity-50",
                    value: "{input}",
                    disabled: busy,
                    placeholder: "Pergunte ao Mundo AI (Ultra Fast)...",
                    oninput: move |e| input.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            submit();
                        }
                    },
                }
                button {
                    class: "bg-blue-600 hover:bg-blue-500 p-4 rounded-2xl transition-all shadow-lg shadow-blue-500/20 active:scale-95 disabled:bg-gray-800 disabled:opacity-50",
                    disabled: !can_send,
                    onclick: move |_| submit(),
                    Send { size: 20, class: Some(if busy { "text-white animate-pulse".to_string() } else { "text-white".to_string() }) }
                }
            }
        }
    }
}
