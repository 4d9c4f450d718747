//! Text Repair Oracle
//!
//! Wraps a provider with the two operations the report needs and their
//! fallbacks: a failed repair keeps the original text, a failed summary is
//! empty.

use std::sync::Arc;
use std::time::Duration;

use super::{
    provider::{DisabledProvider, GeminiProvider, OracleProvider},
    types::{OracleError, OracleTask},
};
use crate::config::OracleConfig;

/// Summary input is cut to this many characters before sending
pub const SUMMARY_CHAR_LIMIT: usize = 4000;

/// Best-effort text repair and summarization
#[derive(Clone)]
pub struct TextOracle {
    provider: Arc<dyn OracleProvider>,
    summary_char_limit: usize,
}

impl TextOracle {
    /// Create an oracle around any provider
    pub fn new(provider: Arc<dyn OracleProvider>) -> Self {
        Self {
            provider,
            summary_char_limit: SUMMARY_CHAR_LIMIT,
        }
    }

    /// Oracle that never calls out; repair is the identity, summaries are empty
    pub fn disabled() -> Self {
        Self::new(Arc::new(DisabledProvider))
    }

    /// Build from configuration. Without an API key the oracle is disabled.
    pub fn from_config(config: &OracleConfig) -> Result<Self, OracleError> {
        match &config.api_key {
            Some(key) => {
                let provider = GeminiProvider::new(
                    &config.endpoint,
                    Some(key.clone()),
                    Duration::from_secs(config.timeout_secs),
                )?;
                Ok(Self::new(Arc::new(provider)))
            }
            None => Ok(Self::disabled()),
        }
    }

    /// Provider name for logs
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Repair one fragment, reporting why it failed
    pub async fn try_repair(&self, fragment: &str) -> Result<String, OracleError> {
        if fragment.trim().is_empty() {
            return Ok(String::new());
        }
        self.provider.generate(&OracleTask::Repair.prompt(fragment)).await
    }

    /// Summarize a corpus, reporting why it failed
    pub async fn try_summarize(&self, corpus: &str) -> Result<String, OracleError> {
        if corpus.trim().is_empty() {
            return Ok(String::new());
        }
        let truncated = truncate_chars(corpus, self.summary_char_limit);
        self.provider.generate(&OracleTask::Summarize.prompt(truncated)).await
    }

    /// Repair one fragment; on failure the fragment comes back unchanged
    pub async fn repair(&self, fragment: &str) -> String {
        match self.try_repair(fragment).await {
            Ok(text) => text,
            Err(e) => {
                self.log_failure(OracleTask::Repair, &e);
                fragment.to_string()
            }
        }
    }

    /// Summarize a corpus; on failure the summary is empty
    pub async fn summarize(&self, corpus: &str) -> String {
        match self.try_summarize(corpus).await {
            Ok(text) => text,
            Err(e) => {
                self.log_failure(OracleTask::Summarize, &e);
                String::new()
            }
        }
    }

    fn log_failure(&self, task: OracleTask, err: &OracleError) {
        match err {
            OracleError::Disabled => {
                tracing::debug!(?task, "Oracle disabled, using fallback")
            }
            _ => tracing::warn!(
                ?task,
                provider = self.provider.name(),
                "Oracle call failed, using fallback: {}",
                err
            ),
        }
    }
}

/// First `limit` characters of `text`, never splitting a character
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
