//! Oracle Providers
//!
//! Defines the provider trait and the generative-text backends behind it.

use std::time::Duration;

use async_trait::async_trait;

use super::types::OracleError;

/// Generative text provider
#[async_trait]
pub trait OracleProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Send one prompt, return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, OracleError>;
}

/// Google Generative Language (`generateContent`) provider
pub struct GeminiProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl GeminiProvider {
    /// Create a provider; every request is bounded by `timeout`
    pub fn new(endpoint: &str, api_key: Option<String>, timeout: Duration) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OracleError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key,
            timeout,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> OracleError {
        if err.is_timeout() {
            OracleError::Timeout(self.timeout.as_secs())
        } else {
            OracleError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl OracleProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        let request = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("x-goog-api-key", key);
        }

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(OracleError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let result: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| OracleError::MalformedResponse(format!("invalid JSON: {}", e)))?;

        generated_text(&result)
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response
pub fn generated_text(response: &serde_json::Value) -> Result<String, OracleError> {
    let text = response
        .pointer("/candidates/0/content/parts/0/text")
        .ok_or_else(|| OracleError::MalformedResponse("missing candidates[0].content.parts[0].text".into()))?
        .as_str()
        .ok_or_else(|| OracleError::MalformedResponse("generated text is not a string".into()))?
        .trim();

    if text.is_empty() {
        return Err(OracleError::EmptyResponse);
    }

    Ok(text.to_string())
}

/// Provider used when no API key is configured
pub struct DisabledProvider;

#[async_trait]
impl OracleProvider for DisabledProvider {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, OracleError> {
        Err(OracleError::Disabled)
    }
}

/// Mock provider for testing
#[cfg(test)]
pub struct MockProvider {
    pub response: Option<String>,
    pub calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl OracleProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        self.calls.lock().unwrap().push(prompt.to_string());
        self.response
            .clone()
            .ok_or_else(|| OracleError::Transport("connection refused".into()))
    }
}
