use crate::error::AppError;
use crate::icons::*;
use dioxus::prelude::*;
use mundovpn_common::SessionLogEntry;

const TOAST_VISIBLE_MS: u64 = 2500;
const TOAST_FADE_MS: u64 = 300;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastType {
    Info,
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub type_: ToastType,
    pub is_closing: bool,
}

#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<usize>,
}

impl ToastManager {
    pub fn show(&mut self, message: &str, type_: ToastType) {
        let id = {
            let mut next = self.next_id.write();
            let id = *next;
            *next += 1;
            id
        };

        self.toasts.write().push(Toast {
            id,
            message: message.to_string(),
            type_,
            is_closing: false,
        });

        let mut toasts = self.toasts;
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(TOAST_VISIBLE_MS)).await;
            toasts.with_mut(|t| {
                if let Some(toast) = t.iter_mut().find(|t| t.id == id) {
                    toast.is_closing = true;
                }
            });

            tokio::time::sleep(std::time::Duration::from_millis(TOAST_FADE_MS)).await;
            toasts.write().retain(|t| t.id != id);
        });
    }
}

/// One-line recap of a finished session.
pub fn session_summary(entry: &SessionLogEntry) -> String {
    format!(
        "Disconnected from {}: {} in {}",
        entry.server_name,
        entry.data_used.compact_label(),
        entry.duration
    )
}

impl ToastManager {
    pub fn show_connected(&mut self, server_name: &str) {
        self.show(&format!("Connected securely to {}", server_name), ToastType::Success);
    }

    pub fn show_session_closed(&mut self, entry: Option<&SessionLogEntry>) {
        match entry {
            Some(entry) => self.show(&session_summary(entry), ToastType::Info),
            None => self.show("Disconnected", ToastType::Info),
        }
    }

    pub fn show_error(&mut self, error: &AppError) {
        self.show(&error.user_friendly_message(), ToastType::Error);
    }
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0);

    use_context_provider(|| ToastManager { toasts, next_id });

    rsx! {
        div { class: "contents",
            {children}

            div { class: "toast-stack",
                for toast in toasts() {
                    div {
                        key: "{toast.id}",
                        class: "toast",
                        class: if toast.is_closing { "toast-closing" },
                        match toast.type_ {
                            ToastType::Info => rsx! {
                                Info { size: 18, class: Some("text-info".to_string()) }
                            },
                            ToastType::Success => rsx! {
                                CircleCheck { size: 18, class: Some("text-success".to_string()) }
                            },
                            ToastType::Error => rsx! {
                                CircleAlert { size: 18, class: Some("text-danger".to_string()) }
                            },
                        }
                        span { "{toast.message}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mundovpn_common::{DataAmount, SessionOutcome};

    #[test]
    fn test_session_summary_names_server_and_volume() {
        let entry = SessionLogEntry {
            id: "1".to_string(),
            server_name: "Tokyo".to_string(),
            flag: "🇯🇵".to_string(),
            date: "09 Mar 2024".to_string(),
            start_time: "14:20".to_string(),
            end_time: "14:25".to_string(),
            duration: "5m".to_string(),
            data_used: DataAmount::from_mb(600.0),
            status: SessionOutcome::Success,
        };
        assert_eq!(session_summary(&entry), "Disconnected from Tokyo: 600 MB in 5m");
    }
}
