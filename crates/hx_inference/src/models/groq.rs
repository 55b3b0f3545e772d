use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use hx_core::{Error, Explainer, HeadlineRecord, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::prompt;

pub const API_KEY_ENV: &str = "GROQ_API_KEY";

const BASE_URL: &str = "https://api.groq.com/openai/v1";
const MODEL_NAME: &str = "llama-3.1-8b-instant";
const SYSTEM_PROMPT: &str = "You are a neutral news explanation agent.";
const TEMPERATURE: f32 = 0.4;
const MAX_TOKENS: u32 = 350;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Chat-completion client for the Groq API (OpenAI-compatible wire format).
pub struct GroqExplainer {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GroqExplainer {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config("Groq API key is required".to_string()))?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at an OpenAI-compatible endpoint other than Groq.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read the API key from the environment, if set.
    pub fn api_key_from_env() -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}

impl fmt::Debug for GroqExplainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqExplainer")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Explainer for GroqExplainer {
    fn name(&self) -> &str {
        "Groq"
    }

    async fn explain(&self, record: &HeadlineRecord) -> Result<String> {
        let request = ChatRequest {
            model: MODEL_NAME.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt::compose(record),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Explanation(format!(
                "Completion request failed with {}: {}",
                status, body
            )));
        }

        let response: ChatResponse = response.json().await?;
        let choice = response
            .choices
            .first()
            .ok_or_else(|| Error::Explanation("No choices in response".to_string()))?;

        Ok(choice.message.content.trim().to_string())
    }
}
