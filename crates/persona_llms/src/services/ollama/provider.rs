//! Ollama service implementation

use async_trait::async_trait;
use futures::stream::StreamExt;
use reqwest::Client;

use super::types::{OllamaConfig, OllamaGenerateResponse};
use crate::error::{Result, ServiceError};
use crate::service::CompletionService;
use crate::types::{CompletionRequest, CompletionStream};

/// Self-hosted completion via an Ollama daemon
pub struct OllamaService {
    config: OllamaConfig,
    client: Client,
}

impl OllamaService {
    /// Environment variable for the daemon URL
    pub const URL_ENV: &'static str = "OLLAMA_URL";
    /// Environment variable for the default model
    pub const MODEL_ENV: &'static str = "OLLAMA_MODEL";

    /// Create a new Ollama service
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create service from environment, falling back to localhost defaults
    pub fn from_env() -> Self {
        let mut config = OllamaConfig::new();
        if let Ok(url) = std::env::var(Self::URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Ok(model) = std::env::var(Self::MODEL_ENV) {
            config = config.with_model(model);
        }
        Self::new(config)
    }

    fn body(&self, request: &CompletionRequest, stream: bool) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "prompt": request.prompt,
            "stream": stream,
            "options": {
                "num_predict": request.max_output_tokens,
                "temperature": request.temperature,
            }
        })
    }
}

#[async_trait]
impl CompletionService for OllamaService {
    fn service_id(&self) -> &str {
        "ollama"
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.config.base_url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::from_status(status, body));
        }

        let resp: serde_json::Value = response.json().await?;

        // Response format: { "models": [{ "name": "llama3.2", ... }, ...] }
        let models = resp
            .get("models")
            .and_then(|m| m.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|m| m.get("name").and_then(|n| n.as_str()))
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default();

        Ok(models)
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let url = format!("{}/api/generate", self.config.base_url);
        tracing::debug!(model = %self.config.model, "ollama completion request");

        let response = self
            .client
            .post(&url)
            .json(&self.body(&request, false))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ServiceError::from_status(status, text));
        }

        let parsed: OllamaGenerateResponse = serde_json::from_str(&text)
            .map_err(|e| ServiceError::Unknown(format!("invalid ollama response: {e}")))?;
        Ok(parsed.response)
    }

    async fn complete_streaming(&self, request: CompletionRequest) -> Result<CompletionStream> {
        let url = format!("{}/api/generate", self.config.base_url);
        tracing::debug!(model = %self.config.model, "ollama streaming request");

        let response = self
            .client
            .post(&url)
            .json(&self.body(&request, true))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::from_status(status, body));
        }

        let mut bytes = response.bytes_stream();
        let stream = async_stream::stream! {
            let mut buffer = String::new();
            while let Some(next) = bytes.next().await {
                match next {
                    Ok(chunk) => {
                        buffer.push_str(&String::from_utf8_lossy(&chunk));
                        while let Some(pos) = buffer.find('\n') {
                            let line: String = buffer.drain(..=pos).collect();
                            if let Some(text) = parse_line(line.trim()) {
                                yield text;
                            }
                        }
                    }
                    Err(e) => {
                        yield format!("stream error: {e}");
                        break;
                    }
                }
            }
            if let Some(text) = parse_line(buffer.trim()) {
                yield text;
            }
        };

        Ok(CompletionStream::new(Box::pin(stream)))
    }
}

/// Extract the text delta from one NDJSON line of `/api/generate` output.
fn parse_line(line: &str) -> Option<String> {
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str::<OllamaGenerateResponse>(line) {
        Ok(parsed) if !parsed.response.is_empty() => Some(parsed.response),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(error = %e, "skipping unparseable stream line");
            None
        }
    }
}
