use std::time::Duration;

use futures::StreamExt;
use reqwest::Client;
use roast_core::error::AppError;
use roast_core::prompt::CRITIQUE_PERSONA;
use roast_core::traits::Critic;
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api-inference.modelscope.cn/v1";
const DEFAULT_MODEL: &str = "deepseek-ai/DeepSeek-V3";
const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(120);

/// OpenAI-compatible streaming chat client for critique generation.
///
/// Works with any OpenAI-compatible API. The completion is requested with
/// `stream: true` and the SSE delta chunks are concatenated before the full
/// text is returned to the caller.
#[derive(Clone, Debug)]
pub struct OpenAiCritic {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout_secs: u64,
    system_prompt: String,
}

impl OpenAiCritic {
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        Self::with_base_url(api_key, DEFAULT_MODEL, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, model: &str, base_url: &str) -> Result<Self, AppError> {
        Self::build(api_key, model, base_url, DEFAULT_LLM_TIMEOUT)
    }

    pub fn with_timeout(self, timeout: Duration) -> Result<Self, AppError> {
        Self::build(&self.api_key, &self.model, &self.base_url, timeout)
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    fn build(
        api_key: &str,
        model: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError(
                "LLM API key is not set; critique generation requires one".into(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout_secs: timeout.as_secs(),
            system_prompt: CRITIQUE_PERSONA.to_string(),
        })
    }
}

// ---- OpenAI API types ----

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Deserialize, Default)]
struct Delta {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl Critic for OpenAiCritic {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: self.system_prompt.clone(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            stream: true,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    AppError::NetworkError(format!("Connection failed: {e}"))
                } else {
                    AppError::HttpError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();

            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {status_code}: {body}"));

            if status_code == 429 {
                return Err(AppError::RateLimitExceeded);
            }

            return Err(AppError::LlmError {
                message,
                status_code,
                retryable: status_code >= 500,
            });
        }

        let mut stream = response.bytes_stream();
        let mut parser = SseLineParser::default();
        let mut content = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|e| AppError::HttpError(format!("Stream read failed: {e}")))?;
            for data in parser.push(&chunk) {
                if data == "[DONE]" {
                    return Ok(content);
                }
                let parsed: ChatChunk = match serde_json::from_str(&data) {
                    Ok(parsed) => parsed,
                    Err(e) => {
                        tracing::debug!(error = %e, "skipping unparseable stream event");
                        continue;
                    }
                };
                if let Some(delta) = parsed.choices.first().and_then(|c| c.delta.content.as_deref())
                {
                    content.push_str(delta);
                }
            }
        }

        Ok(content)
    }
}

/// Incremental parser for `text/event-stream` bodies.
///
/// Buffers partial lines across network chunks and yields the payload of
/// each complete `data:` line. Working on bytes (not text) keeps multi-byte
/// characters split across chunks intact, since `\n` never occurs inside a
/// UTF-8 sequence.
#[derive(Default)]
struct SseLineParser {
    buf: Vec<u8>,
}

impl SseLineParser {
    fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(chunk);
        let mut payloads = Vec::new();

        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches(['\r', '\n']);
            if let Some(data) = line.strip_prefix("data:") {
                payloads.push(data.trim_start().to_string());
            }
        }

        payloads
    }
}
