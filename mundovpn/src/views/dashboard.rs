use crate::components::TrafficChart;
use crate::hooks::use_mundo_client;
use crate::icons::*;
use crate::state::AppState;
use crate::Route;
use dioxus::prelude::*;
use mundovpn_common::ConnectionStatus;

fn headline(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "CONEXÃO ATIVA",
        ConnectionStatus::Connecting => "INICIANDO TUNEL...",
        _ => "PROTEÇÃO DESATIVADA",
    }
}

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let client = use_mundo_client();
    let nav = use_navigator();

    let controller = state.session.controller.read();
    let status = controller.status();
    let server = controller.selected_server().clone();
    let window = controller.traffic().clone();
    let activity: Vec<String> = controller.activity().lines().cloned().collect();
    let session_data = controller.session_data().session_label();
    drop(controller);

    let (download, upload) = window
        .latest()
        .map(|s| (s.download, s.upload))
        .unwrap_or((0.0, 0.0));

    let is_connected = status == ConnectionStatus::Connected;
    let is_connecting = status == ConnectionStatus::Connecting;

    let title = headline(status);
    let subtitle = if is_connected {
        format!("Tunelado por {}", server.name)
    } else {
        "Toque para criptografar seu tráfego".to_string()
    };

    let glow = if is_connected { "bg-green-500" } else { "bg-blue-600" };
    let button_tone = if is_connected {
        "bg-green-600 neon-glow-active ring-4 ring-green-500/20"
    } else {
        "bg-gray-800 hover:bg-gray-700 neon-glow ring-4 ring-blue-500/10"
    };
    let pulse = if is_connecting { "animate-pulse" } else { "" };
    let power_tone = if is_connected { "text-white" } else { "text-blue-500" };
    let latency_tone = if server.is_low_latency() {
        "text-green-500"
    } else {
        "text-yellow-500"
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "relative flex flex-col items-center justify-center py-12 bg-gray-900/50 rounded-3xl border border-gray-800 overflow-hidden",
                div { class: "absolute inset-0 transition-opacity duration-1000 opacity-20 {glow}" }
                button {
                    class: "relative z-10 w-32 h-32 rounded-full flex items-center justify-center transition-all duration-500 {button_tone} {pulse}",
                    disabled: is_connecting,
                    onclick: move |_| client.toggle(),
                    if is_connecting {
                        Loader { size: 48, class: Some("animate-spin text-blue-500".to_string()) }
                    } else {
                        Power { size: 48, class: Some(power_tone.to_string()) }
                    }
                }
                div { class: "mt-8 text-center z-10",
                    h2 { class: "text-lg font-bold tracking-wide", "{title}" }
                    p { class: "text-sm text-gray-400 mt-1", "{subtitle}" }
                    if is_connected {
                        p { class: "text-[10px] text-gray-500 font-mono mt-1", "{session_data} nesta sessão" }
                    }
                }
            }

            div { class: "grid grid-cols-2 gap-4",
                RateCard {
                    label: "Download",
                    value: download,
                    icon: rsx! {
                        ArrowDown { size: 16, class: Some("text-green-500".to_string()) }
                    },
                }
                RateCard {
                    label: "Upload",
                    value: upload,
                    icon: rsx! {
                        ArrowUp { size: 16, class: Some("text-blue-500".to_string()) }
                    },
                }
            }

            div { class: "glass p-5 rounded-3xl h-44 overflow-hidden",
                div { class: "flex items-center justify-between mb-2",
                    h3 { class: "text-xs font-bold flex items-center gap-2 text-gray-400 uppercase tracking-widest",
                        Activity { size: 16, class: Some("text-blue-500".to_string()) }
                        "Atividade de Rede"
                    }
                }
                div { class: "h-32", TrafficChart { window } }
            }

            div {
                class: "glass p-5 rounded-3xl flex items-center justify-between cursor-pointer hover:bg-gray-800/50 transition-all active:scale-[0.98]",
                onclick: move |_| {
                    nav.push(Route::Servers {});
                },
                div { class: "flex items-center gap-4",
                    div { class: "text-3xl", "{server.flag}" }
                    div {
                        p { class: "text-sm font-bold", "{server.name}, {server.country}" }
                        p { class: "text-xs text-gray-500 font-mono flex items-center gap-1",
                            Wifi { size: 12, class: Some(latency_tone.to_string()) }
                            "{server.ip} • {server.latency_ms}ms"
                        }
                    }
                }
                ChevronRight { size: 20, class: Some("text-gray-600".to_string()) }
            }

            div { class: "glass p-4 rounded-3xl",
                h3 { class: "text-xs font-bold flex items-center gap-2 text-gray-400 uppercase tracking-widest mb-2",
                    Terminal { size: 14, class: Some("text-green-400".to_string()) }
                    "Console"
                }
                div { class: "font-mono text-[10px] text-gray-500 space-y-0.5",
                    for (i, line) in activity.iter().enumerate() {
                        p { key: "{i}", "{line}" }
                    }
                }
            }
        }
    }
}

#[component]
fn RateCard(label: &'static str, value: f64, icon: Element) -> Element {
    rsx! {
        div { class: "glass p-5 rounded-3xl",
            div { class: "flex items-center justify-between mb-3",
                span { class: "text-[10px] text-gray-500 font-bold uppercase tracking-wider", "{label}" }
                {icon}
            }
            p { class: "text-2xl font-mono font-bold",
                "{value:.1} "
                span { class: "text-xs font-normal text-gray-500", "Mb/s" }
            }
        }
    }
}
