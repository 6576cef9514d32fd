// src/summarizer/client.rs
use crate::config::Settings;
use crate::summarizer::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::summarizer::prompt::build_prompt;
use crate::summarizer::Summarizer;
use crate::utils::error::SummarizeError;
use reqwest::header;
use std::time::Duration;

const USER_AGENT: &str = concat!("heading-summarizer/", env!("CARGO_PKG_VERSION"));

/// Client for an OpenAI-compatible chat completion API.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    prompt: String,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self, SummarizeError> {
        let api_key = settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(SummarizeError::MissingApiKey)?
            .to_string();

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key,
            endpoint: completions_url(&settings.api_base_url),
            model: settings.model.clone(),
            prompt: settings.prompt.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

impl Summarizer for OpenAiClient {
    async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        let content = build_prompt(&self.prompt, text);
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage { role: "user", content: &content }],
        };

        tracing::info!("Requesting summary from {} (model {})", self.endpoint, self.model);
        tracing::debug!("Prompt is {} bytes", content.len());

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await?; // Propagates reqwest::Error as SummarizeError::Network

        // Check if the request was successful (status code 2xx)
        let status = response.status();
        if !status.is_success() {
            tracing::error!("HTTP error status: {} from {}", status, self.endpoint);
            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(SummarizeError::Unauthorized);
            }
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                tracing::warn!("Received 429 Too Many Requests - check quota and rate limits.");
                return Err(SummarizeError::RateLimited);
            }
            return Err(SummarizeError::Http(status));
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes from {}", body.len(), self.endpoint);

        let completion: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| SummarizeError::Parse(e.to_string()))?;

        completion.first_content().ok_or(SummarizeError::EmptyResponse)
    }
}
