use crate::error::AppError;
use crate::services::{AssistantRequest, AssistantService};
use crate::session::ConnectionContext;
use chrono::Local;
use mundovpn_common::ChatMessage;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, warn};

pub const EMPTY_REPLY_FALLBACK: &str = "Desculpe, não consegui processar sua solicitação agora.";
pub const ERROR_REPLY_FALLBACK: &str =
    "Erro ao conectar com a inteligência artificial. Verifique sua conexão.";

struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag: flag.clone() })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Wraps an [`AssistantService`] so that callers always get text back.
///
/// Only one question may be pending per bridge; failures and timeouts turn
/// into the fixed apology strings above.
#[derive(Clone)]
pub struct AssistantBridge<S: AssistantService> {
    service: S,
    in_flight: Arc<AtomicBool>,
    timeout: Duration,
}

impl<S: AssistantService> AssistantBridge<S> {
    pub fn new(service: S, timeout: Duration) -> Self {
        Self {
            service,
            in_flight: Arc::new(AtomicBool::new(false)),
            timeout,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn ask(
        &self,
        prompt: &str,
        history: &[ChatMessage],
        context: ConnectionContext,
    ) -> Result<ChatMessage, AppError> {
        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(AppError::AssistantBusy)?;

        let request = AssistantRequest {
            prompt: prompt.to_string(),
            history: history.to_vec(),
            context,
        };

        let started = Instant::now();
        let text = match tokio::time::timeout(self.timeout, self.service.generate(&request)).await
        {
            Ok(Ok(text)) if !text.trim().is_empty() => text,
            Ok(Ok(_)) => {
                warn!("Assistant returned an empty answer");
                EMPTY_REPLY_FALLBACK.to_string()
            }
            Ok(Err(e)) => {
                error!("Assistant error: {}", e);
                ERROR_REPLY_FALLBACK.to_string()
            }
            Err(_) => {
                error!("{}", AppError::Timeout(self.timeout.as_secs()));
                ERROR_REPLY_FALLBACK.to_string()
            }
        };

        Ok(ChatMessage::assistant(
            text,
            Local::now().timestamp_millis(),
            started.elapsed().as_millis() as u64,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mundovpn_common::{ChatRole, ConnectionStatus};
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    #[derive(Clone)]
    enum Behaviour {
        Reply(&'static str),
        Empty,
        Fail,
        Hang,
        WaitFor(Arc<Notify>),
    }

    #[derive(Clone)]
    struct MockAssistant {
        behaviour: Behaviour,
        calls: Arc<AtomicUsize>,
    }

    impl MockAssistant {
        fn new(behaviour: Behaviour) -> Self {
            Self {
                behaviour,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl AssistantService for MockAssistant {
        async fn generate(&self, request: &AssistantRequest) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behaviour {
                Behaviour::Reply(text) => Ok(format!("{} ({})", text, request.context.status)),
                Behaviour::Empty => Ok("  \n".to_string()),
                Behaviour::Fail => Err(AppError::MissingApiKey),
                Behaviour::Hang => std::future::pending().await,
                Behaviour::WaitFor(gate) => {
                    gate.notified().await;
                    Ok("done".to_string())
                }
            }
        }
    }

    fn context() -> ConnectionContext {
        ConnectionContext {
            status: ConnectionStatus::Disconnected,
            server_name: Some("São Paulo".to_string()),
        }
    }

    #[tokio::test]
    async fn test_reply_is_returned_verbatim() {
        let bridge = AssistantBridge::new(
            MockAssistant::new(Behaviour::Reply("Enable the kill switch")),
            Duration::from_secs(5),
        );
        let reply = bridge.ask("help", &[], context()).await.unwrap();
        assert_eq!(reply.role, ChatRole::Assistant);
        assert_eq!(reply.content, "Enable the kill switch (disconnected)");
        assert!(reply.latency_ms.is_some());
        assert!(!bridge.is_busy());
    }

    #[tokio::test]
    async fn test_empty_answer_uses_apology() {
        let bridge =
            AssistantBridge::new(MockAssistant::new(Behaviour::Empty), Duration::from_secs(5));
        let reply = bridge.ask("q", &[], context()).await.unwrap();
        assert_eq!(reply.content, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_failure_is_absorbed() {
        let bridge =
            AssistantBridge::new(MockAssistant::new(Behaviour::Fail), Duration::from_secs(5));
        let reply = bridge.ask("q", &[], context()).await.unwrap();
        assert_eq!(reply.content, ERROR_REPLY_FALLBACK);
        assert!(!bridge.is_busy());
    }

    #[tokio::test]
    async fn test_hung_request_times_out() {
        let bridge =
            AssistantBridge::new(MockAssistant::new(Behaviour::Hang), Duration::from_millis(50));
        let reply = bridge.ask("q", &[], context()).await.unwrap();
        assert_eq!(reply.content, ERROR_REPLY_FALLBACK);
        assert!(!bridge.is_busy());
    }

    #[tokio::test]
    async fn test_second_question_rejected_while_pending() {
        let gate = Arc::new(Notify::new());
        let mock = MockAssistant::new(Behaviour::WaitFor(gate.clone()));
        let calls = mock.calls.clone();
        let bridge = AssistantBridge::new(mock, Duration::from_secs(5));

        let first = {
            let bridge = bridge.clone();
            tokio::spawn(async move { bridge.ask("first", &[], context()).await })
        };

        for _ in 0..100 {
            if calls.load(Ordering::SeqCst) == 1 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(bridge.is_busy());

        let second = bridge.ask("second", &[], context()).await;
        assert!(matches!(second, Err(AppError::AssistantBusy)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        gate.notify_one();
        let reply = first.await.unwrap().unwrap();
        assert_eq!(reply.content, "done");
        assert!(!bridge.is_busy());
    }
}
