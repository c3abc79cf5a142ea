use crate::icons::*;
use crate::state::AppState;
use crate::window::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::Route;
use dioxus::prelude::*;
use mundovpn_common::ConnectionStatus;

#[component]
pub fn MainLayout() -> Element {
    let state = use_context::<AppState>();
    let status = state.session.controller.read().status();
    let route = use_route::<Route>();

    let dot_class = if status == ConnectionStatus::Connected {
        "bg-green-500 animate-pulse"
    } else {
        "bg-red-500"
    };

    rsx! {
        div {
            class: "flex flex-col bg-gray-950 text-gray-100 font-sans select-none overflow-hidden relative",
            style: "height: {WINDOW_HEIGHT}px; width: {WINDOW_WIDTH}px;",

            header { class: "px-6 py-6 flex items-center justify-between border-b border-gray-800 bg-gray-950/80 backdrop-blur-xl z-50",
                div { class: "flex items-center gap-3",
                    div { class: "p-2 bg-blue-600 rounded-xl shadow-lg shadow-blue-500/20",
                        ShieldCheck { size: 24, class: Some("text-white".to_string()) }
                    }
                    div {
                        h1 { class: "text-xl font-bold tracking-tight", "Mundo VPN" }
                        p { class: "text-[10px] text-gray-500 uppercase font-bold tracking-widest flex items-center gap-1",
                            Cpu { size: 12 }
                            "AI Assisted Security"
                        }
                    }
                }
                div { class: "flex items-center gap-2",
                    span { class: "h-2 w-2 rounded-full {dot_class}" }
                    span { class: "text-xs font-medium text-gray-400 capitalize", "{status}" }
                }
            }

            main { class: "flex-1 overflow-y-auto px-6 py-4 space-y-6", Outlet::<Route> {} }

            nav { class: "glass border-t border-gray-800 px-6 py-5 flex justify-between items-center z-50 rounded-t-[40px]",
                TabItem {
                    to: Route::Dashboard {},
                    active: matches!(route, Route::Dashboard {}),
                    label: "Conectar",
                    icon: rsx! {
                        ShieldCheck { size: 24 }
                    },
                }
                TabItem {
                    to: Route::Servers {},
                    active: matches!(route, Route::Servers {}),
                    label: "Nós",
                    icon: rsx! {
                        Globe { size: 24 }
                    },
                }
                TabItem {
                    to: Route::Assistant {},
                    active: matches!(route, Route::Assistant {}),
                    label: "IA Assist",
                    icon: rsx! {
                        MessageSquare { size: 24 }
                    },
                }
                TabItem {
                    to: Route::Panel {},
                    active: matches!(route, Route::Panel {} | Route::SessionLogs {}),
                    label: "Painel",
                    icon: rsx! {
                        User { size: 24 }
                    },
                }
            }
        }
    }
}

#[component]
fn TabItem(to: Route, active: bool, label: &'static str, icon: Element) -> Element {
    let tone = if active {
        "text-blue-500 scale-110"
    } else {
        "text-gray-500 hover:text-gray-400"
    };
    rsx! {
        Link {
            to,
            class: "flex flex-col items-center gap-1.5 transition-all {tone}",
            {icon}
            span { class: "text-[10px] font-bold tracking-tighter uppercase", "{label}" }
        }
    }
}
