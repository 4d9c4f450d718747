//! Oracle Types

use serde::{Deserialize, Serialize};

/// What the generative service is asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleTask {
    /// Fix cut-off words and OCR noise in one passage
    Repair,
    /// Summarize the themes of all passages
    Summarize,
}

impl OracleTask {
    /// Wrap the input text in the task's instruction
    pub fn prompt(self, text: &str) -> String {
        match self {
            Self::Repair => format!(
                "Fix this broken PDF highlight: '{}'. Correct cut-off words. Output ONLY the fixed text.",
                text
            ),
            Self::Summarize => format!(
                "Summarize the main themes of these book highlights in 3 interesting sentences: '{}'",
                text
            ),
        }
    }
}

/// Oracle failure reasons
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("Oracle disabled: no API key configured")]
    Disabled,

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response contained no generated text")]
    EmptyResponse,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_prompt_wraps_text() {
        let prompt = OracleTask::Repair.prompt("The qu- ick");
        assert!(prompt.starts_with("Fix this broken PDF highlight: 'The qu- ick'."));
        assert!(prompt.ends_with("Output ONLY the fixed text."));
    }

    #[test]
    fn test_summary_prompt_wraps_text() {
        let prompt = OracleTask::Summarize.prompt("a b");
        assert!(prompt.contains("3 interesting sentences"));
        assert!(prompt.ends_with("'a b'"));
    }
}
