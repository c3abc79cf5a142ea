use crate::components::{BackButton, StatTile};
use crate::icons::*;
use crate::state::AppState;
use crate::Route;
use dioxus::prelude::*;
use mundovpn_common::{SessionLogEntry, SessionOutcome};

#[component]
pub fn SessionLogs() -> Element {
    let state = use_context::<AppState>();
    let history = state.session.controller.read().history().to_vec();
    let nav = use_navigator();

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center gap-3",
                BackButton { to: Route::Panel {} }
                h2 { class: "text-xl font-bold", "Logs de Conexão" }
            }

            div { class: "space-y-4",
                if history.is_empty() {
                    div { class: "text-center py-20 opacity-50 flex flex-col items-center",
                        History { size: 48, class: Some("mb-4 text-gray-600".to_string()) }
                        p { "Nenhum log histórico disponível." }
                    }
                }
                for entry in history {
                    LogCard { key: "{entry.id}", entry }
                }
            }

            div { class: "py-6 flex justify-center",
                button {
                    class: "px-6 py-2.5 bg-gray-900 border border-gray-800 rounded-2xl text-xs font-bold uppercase tracking-wider text-gray-400 hover:text-white transition-colors",
                    onclick: move |_| {
                        nav.push(Route::Panel {});
                    },
                    "Voltar ao Painel"
                }
            }
        }
    }
}

#[component]
fn LogCard(entry: SessionLogEntry) -> Element {
    let finished = entry.status == SessionOutcome::Success;
    let badge = if finished {
        "bg-green-500/10 text-green-500 border border-green-500/20"
    } else {
        "bg-red-500/10 text-red-500 border border-red-500/20"
    };
    let data = entry.data_used.compact_label();

    rsx! {
        div { class: "glass rounded-3xl p-5 space-y-4 border-l-4 border-l-blue-500/50",
            div { class: "flex items-center justify-between",
                div { class: "flex items-center gap-3",
                    span { class: "text-3xl", "{entry.flag}" }
                    div {
                        h4 { class: "font-bold text-sm", "{entry.server_name}" }
                        div { class: "flex items-center gap-2 text-[10px] text-gray-500 uppercase tracking-wider font-bold",
                            Calendar { size: 12 }
                            "{entry.date}"
                        }
                    }
                }
                div { class: "flex items-center gap-1.5 px-2.5 py-1 rounded-full text-[10px] font-bold uppercase {badge}",
                    if finished {
                        CircleCheck { size: 12 }
                        "Finalizado"
                    } else {
                        CircleAlert { size: 12 }
                        "Interrompido"
                    }
                }
            }

            div { class: "grid grid-cols-3 gap-2",
                StatTile {
                    label: "Duração".to_string(),
                    value: entry.duration.clone(),
                    icon: rsx! {
                        Clock { size: 16, class: Some("text-blue-400 mb-1".to_string()) }
                    },
                }
                StatTile {
                    label: "Dados".to_string(),
                    value: data,
                    icon: rsx! {
                        Activity { size: 16, class: Some("text-purple-400 mb-1".to_string()) }
                    },
                }
                StatTile {
                    label: "Início".to_string(),
                    value: entry.start_time.clone(),
                    icon: rsx! {
                        Terminal { size: 16, class: Some("text-green-400 mb-1".to_string()) }
                    },
                }
            }

            div { class: "flex items-center justify-between px-1 pt-2 border-t border-gray-800",
                p { class: "text-[10px] text-gray-500 flex items-center gap-1 italic",
                    Clock { size: 12 }
                    "Desconectado às {entry.end_time}"
                }
            }
        }
    }
}
