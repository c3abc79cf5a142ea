use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::services::AssistantRequest;
use mundovpn_common::{ChatMessage, ChatRole};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::info;

const SYSTEM_INSTRUCTION: &str = "You are Mundo VPN's ultra-fast intelligent assistant. You provide immediate, concise, and expert advice on networking, privacy, and VPN optimization. Be extremely efficient and helpful.";

const TEMPERATURE: f32 = 0.6;
const TOP_P: f32 = 0.9;
const TOP_K: u32 = 40;

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent("MundoVPN-Desktop/1.0")
        .tcp_keepalive(std::time::Duration::from_secs(60))
        .build()
        .unwrap_or_default()
});

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug, PartialEq)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Serialize, Debug, PartialEq)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
}

#[derive(Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// The single combined instruction sent as the final user turn.
pub fn build_prompt(request: &AssistantRequest) -> String {
    let server = request.context.server_name.as_deref().unwrap_or("None");
    format!(
        "You are Mundo VPN AI Assistant.\n\
         Help the user with security, privacy, and technical issues.\n\
         Current VPN Status: {}\n\
         Selected Server: {}\n\
         User Question: {}",
        request.context.status, server, request.prompt
    )
}

fn history_turn(message: &ChatMessage) -> Content {
    let role = match message.role {
        ChatRole::User => "user",
        ChatRole::Assistant => "model",
    };
    Content {
        role: Some(role),
        parts: vec![Part {
            text: message.content.clone(),
        }],
    }
}

fn build_body(request: &AssistantRequest) -> GenerateContentRequest {
    let mut contents: Vec<Content> = request.history.iter().map(history_turn).collect();
    contents.push(Content {
        role: Some("user"),
        parts: vec![Part {
            text: build_prompt(request),
        }],
    });

    GenerateContentRequest {
        contents,
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: SYSTEM_INSTRUCTION.to_string(),
            }],
        },
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            top_p: TOP_P,
            top_k: TOP_K,
        },
    }
}

#[derive(Debug, Clone)]
pub struct GeminiService {
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl GeminiService {
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.clone(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    pub async fn generate(&self, request: &AssistantRequest) -> Result<String, AppError> {
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;
        info!(
            "Asking {} ({} prior messages)",
            self.model,
            request.history.len()
        );

        let res = CLIENT
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&build_body(request))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let message = res.text().await.unwrap_or_default();
            return Err(AppError::Api { status, message });
        }

        let body: GenerateContentResponse = res.json().await?;
        Ok(body.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ConnectionContext;
    use mundovpn_common::ConnectionStatus;

    fn request(history: Vec<ChatMessage>) -> AssistantRequest {
        AssistantRequest {
            prompt: "Is my DNS leaking?".to_string(),
            history,
            context: ConnectionContext {
                status: ConnectionStatus::Connected,
                server_name: Some("Tokyo".to_string()),
            },
        }
    }

    #[test]
    fn test_prompt_embeds_connection_context() {
        let prompt = build_prompt(&request(vec![]));
        assert!(prompt.contains("Current VPN Status: connected"));
        assert!(prompt.contains("Selected Server: Tokyo"));
        assert!(prompt.ends_with("User Question: Is my DNS leaking?"));

        let mut no_server = request(vec![]);
        no_server.context.server_name = None;
        assert!(build_prompt(&no_server).contains("Selected Server: None"));
    }

    #[test]
    fn test_body_shape() {
        let history = vec![
            ChatMessage::user("hi", 1),
            ChatMessage::assistant("hello", 2, 120),
        ];
        let body = serde_json::to_value(build_body(&request(history))).unwrap();

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[1]["parts"][0]["text"], "hello");
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert!((body["generationConfig"]["topP"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_joins_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Use "},{"text":"Stealth mode."}],"role":"model"}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text(), "Use Stealth mode.");

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn test_endpoint() {
        let svc = GeminiService::from_config(&RuntimeConfig::default());
        assert_eq!(
            svc.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-lite-latest:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_sending() {
        let svc = GeminiService::from_config(&RuntimeConfig::default());
        let err = svc.generate(&request(vec![])).await.unwrap_err();
        assert!(matches!(err, AppError::MissingApiKey));
    }
}
