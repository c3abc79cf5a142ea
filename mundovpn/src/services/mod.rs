pub mod gemini;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::session::ConnectionContext;
use async_trait::async_trait;
use mundovpn_common::ChatMessage;

/// Everything the text-generation backend gets for one question.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantRequest {
    pub prompt: String,
    pub history: Vec<ChatMessage>,
    pub context: ConnectionContext,
}

#[async_trait]
pub trait AssistantService: Clone + Send + Sync + 'static {
    async fn generate(&self, request: &AssistantRequest) -> Result<String, AppError>;
}

#[derive(Clone, Copy, Default)]
pub struct ProductionAssistantService;

#[async_trait]
impl AssistantService for ProductionAssistantService {
    async fn generate(&self, request: &AssistantRequest) -> Result<String, AppError> {
        gemini::GeminiService::from_config(&CONFIG)
            .generate(request)
            .await
    }
}
