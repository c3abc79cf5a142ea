use crate::data::get_default_servers;
use crate::hooks::use_mundo_client;
use crate::icons::Wifi;
use crate::state::AppState;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Servers() -> Element {
    let state = use_context::<AppState>();
    let client = use_mundo_client();
    let nav = use_navigator();
    let servers = use_hook(get_default_servers);
    let count = servers.len();
    let selected_id = state.session.controller.read().selected_server().id.clone();

    rsx! {
        div { class: "space-y-4",
            div { class: "flex items-center justify-between",
                h2 { class: "text-xl font-bold", "Nós Globais" }
                div { class: "px-3 py-1 bg-blue-600/10 border border-blue-500/20 rounded-full",
                    span { class: "text-[10px] font-bold text-blue-400 uppercase", "{count} Servidores" }
                }
            }
            div { class: "space-y-3",
                for server in servers.iter().cloned() {
                    {
                        let is_selected = server.id == selected_id;
                        let border = if is_selected { "border-l-blue-500 bg-blue-500/10" } else { "border-l-transparent" };
                        let latency_tone = if server.is_low_latency() { "text-green-500" } else { "text-yellow-500" };
                        let picked = server.clone();
                        rsx! {
                            div {
                                key: "{server.id}",
                                class: "glass p-4 rounded-2xl flex items-center justify-between cursor-pointer transition-all border-l-4 group hover:bg-gray-800/40 {border}",
                                onclick: move |_| {
                                    client.select_server(picked.clone());
                                    nav.push(Route::Dashboard {});
                                },
                                div { class: "flex items-center gap-4",
                                    span { class: "text-3xl group-hover:scale-110 transition-transform", "{server.flag}" }
                                    div {
                                        p { class: "font-bold text-sm", "{server.name}" }
                                        p { class: "text-xs text-gray-500", "{server.country}" }
                                    }
                                }
                                div { class: "text-right",
                                    div { class: "flex items-center gap-1 justify-end",
                                        Wifi { size: 12, class: Some(latency_tone.to_string()) }
                                        span { class: "text-xs font-mono font-semibold", "{server.latency_ms}ms" }
                                    }
                                    div { class: "w-16 h-1 bg-gray-800 rounded-full mt-2 overflow-hidden",
                                        div { class: "bg-blue-500 h-full", style: "width: {server.load}%" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
