#![allow(non_snake_case)]

pub mod assistant;
pub mod clock;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod hooks;
pub mod icons;
pub mod layouts;
pub mod services;
pub mod session;
pub mod simulator;
pub mod state;
pub mod storage;
pub mod views;
pub mod window;

use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use components::toast::ToastProvider;
use layouts::MainLayout;
use state::AppStateProvider;
use views::{
    assistant::Assistant, dashboard::Dashboard, panel::Panel, servers::Servers,
    session_logs::SessionLogs,
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/servers")]
        Servers {},
        #[route("/assistant")]
        Assistant {},
        #[route("/panel")]
        Panel {},
        #[route("/panel/logs")]
        SessionLogs {},
}

pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        document::Script { src: "https://cdn.tailwindcss.com" }
        ToastProvider {
            AppStateProvider { Router::<Route> {} }
        }
    }
}

pub fn run_app() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mundovpn=info")),
        )
        .init();

    tracing::info!(
        "Starting Mundo VPN (assistant model {})",
        config::CONFIG.model
    );

    #[cfg(feature = "desktop")]
    LaunchBuilder::new()
        .with_cfg(window::desktop_config())
        .launch(App);
}
