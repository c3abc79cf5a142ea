use crate::components::{ActionTile, SectionTitle, SecurityRow};
use crate::hooks::use_mundo_client;
use crate::icons::*;
use crate::state::AppState;
use crate::Route;
use dioxus::prelude::*;
use mundovpn_common::SecurityFeature;

fn feature_icon(feature: SecurityFeature) -> Element {
    match feature {
        SecurityFeature::KillSwitch => rsx! {
            Power { size: 16 }
        },
        SecurityFeature::DoubleVpn => rsx! {
            Eye { size: 16 }
        },
        SecurityFeature::StealthMode => rsx! {
            Zap { size: 16 }
        },
        SecurityFeature::AdBlocker => rsx! {
            ShieldCheck { size: 16 }
        },
    }
}

#[component]
pub fn Panel() -> Element {
    let state = use_context::<AppState>();
    let client = use_mundo_client();
    let nav = use_navigator();

    let controller = state.session.controller.read();
    let account = controller.account().clone();
    let recent: Vec<_> = controller
        .history()
        .iter()
        .take(3)
        .map(|e| (e.clone(), e.data_used.compact_label()))
        .collect();
    let toggles = controller.toggles();
    let usage = controller.usage_percent();
    drop(controller);

    let initial = account.initial();
    let plan = account.plan.label();
    let used = account.total_data_used.total_label();
    let limit = account.monthly_limit.total_label();

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center gap-3",
                div { class: "p-2 bg-purple-600/20 rounded-lg",
                    BarChart { size: 20, class: Some("text-purple-400".to_string()) }
                }
                h2 { class: "text-xl font-bold", "Painel de Controle" }
            }

            div { class: "glass p-6 rounded-3xl space-y-6",
                div { class: "flex items-center gap-4",
                    div { class: "w-16 h-16 rounded-2xl bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center text-2xl font-bold",
                        "{initial}"
                    }
                    div {
                        h3 { class: "font-bold text-lg", "{account.name}" }
                        p { class: "text-xs text-gray-500", "{account.email}" }
                        div { class: "mt-1 inline-flex items-center px-2 py-0.5 rounded bg-blue-500/10 border border-blue-500/20 text-[10px] font-bold text-blue-400",
                            "{plan} PLAN"
                        }
                    }
                }
                div { class: "space-y-2",
                    div { class: "flex justify-between text-xs font-bold uppercase tracking-wider text-gray-500",
                        span { "Uso de Dados" }
                        span { "{used} / {limit}" }
                    }
                    div { class: "w-full h-3 bg-gray-800 rounded-full overflow-hidden",
                        div {
                            class: "h-full bg-gradient-to-r from-blue-500 to-purple-500",
                            style: "width: {usage:.1}%",
                        }
                    }
                    p { class: "text-[10px] text-gray-500 text-right", "Renova em {account.expiry_date}" }
                }
            }

            div { class: "space-y-3",
                div { class: "flex items-center justify-between",
                    SectionTitle {
                        label: "Histórico Recente".to_string(),
                        icon: rsx! {
                            History { size: 16 }
                        },
                    }
                    button {
                        class: "text-[10px] font-bold text-blue-400 uppercase flex items-center gap-1 hover:text-blue-300 transition-colors",
                        onclick: move |_| {
                            nav.push(Route::SessionLogs {});
                        },
                        "Ver Tudo"
                        ChevronRight { size: 12 }
                    }
                }
                div { class: "space-y-2",
                    if recent.is_empty() {
                        div { class: "text-center py-6 glass rounded-2xl text-gray-500 text-xs italic",
                            "Nenhuma conexão registrada"
                        }
                    }
                    for (item, data) in recent {
                        div {
                            key: "{item.id}",
                            class: "glass p-4 rounded-2xl flex items-center justify-between hover:bg-gray-800/30 transition-colors",
                            div { class: "flex items-center gap-3",
                                span { class: "text-xl", "{item.flag}" }
                                div {
                                    p { class: "text-sm font-bold", "{item.server_name}" }
                                    p { class: "text-[10px] text-gray-500", "{item.date} • {item.start_time}" }
                                }
                            }
                            div { class: "text-right",
                                p { class: "text-xs font-mono font-bold text-blue-400", "{item.duration}" }
                                p { class: "text-[10px] text-gray-500", "{data}" }
                            }
                        }
                    }
                }
            }

            div { class: "space-y-3",
                SectionTitle {
                    label: "Segurança Avançada".to_string(),
                    icon: rsx! {
                        Lock { size: 16 }
                    },
                }
                div { class: "glass rounded-3xl divide-y divide-gray-800 overflow-hidden",
                    for feature in SecurityFeature::all().iter().copied() {
                        SecurityRow {
                            key: "{feature:?}",
                            label: feature.label().to_string(),
                            description: feature.description().to_string(),
                            icon: feature_icon(feature),
                            checked: toggles.get(feature),
                            onclick: move |_| client.toggle_security(feature),
                        }
                    }
                }
            }

            div { class: "flex gap-3",
                ActionTile {
                    label: "Assinatura".to_string(),
                    icon: rsx! {
                        CreditCard { size: 20 }
                    },
                    onclick: move |_| {},
                }
                ActionTile {
                    label: "Limpar Dados".to_string(),
                    danger: true,
                    icon: rsx! {
                        LogOut { size: 20 }
                    },
                    onclick: move |_| client.clear_data(),
                }
            }
        }
    }
}
