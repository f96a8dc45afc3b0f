//! OpenAI-compatible chat completions client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::prompts::{ChatMessage, PromptSet};
use super::LanguageModel;
use crate::config::{Config, MODEL_MAX_TOKENS};
use crate::data::ReferenceTables;
use crate::error_handling::CapabilityError;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Talks to any server implementing `POST /chat/completions`
/// (OpenAI, Ollama, llama.cpp, vLLM, ...).
#[derive(Debug, Clone)]
pub struct ChatModel {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    prompts: PromptSet,
}

impl ChatModel {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        model: impl Into<String>,
        api_key: Option<String>,
        tables: &ReferenceTables,
    ) -> Self {
        Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model: model.into(),
            api_key,
            prompts: PromptSet::new(tables),
        }
    }

    pub fn from_config(client: reqwest::Client, config: &Config, tables: &ReferenceTables) -> Self {
        Self::new(
            client,
            &config.model_url,
            &config.model_name,
            config.model_api_key.clone(),
            tables,
        )
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, CapabilityError> {
        let body = ChatRequest {
            model: &self.model,
            messages,
            max_tokens: MODEL_MAX_TOKENS,
            stream: false,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CapabilityError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| CapabilityError::Decode(e.to_string()))?;
        let reply = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CapabilityError::Decode("response has no choices".to_string()))?;

        log::debug!("Model reply: {:?}", reply);
        Ok(reply)
    }
}

#[async_trait]
impl LanguageModel for ChatModel {
    async fn classify(&self, prompt: &str) -> Result<String, CapabilityError> {
        self.complete(self.prompts.classify(prompt)).await
    }

    async fn geolocate(&self, prompt: &str) -> Result<String, CapabilityError> {
        self.complete(self.prompts.geolocate(prompt)).await
    }
}
