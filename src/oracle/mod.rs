//! Text Repair Oracle
//!
//! Repairs extraction artifacts in highlighted passages and summarizes the
//! result through a generative-text service. Every call is best effort:
//! the report is complete without it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use highlight_report_server::oracle::TextOracle;
//!
//! let oracle = TextOracle::from_config(&config.oracle)?;
//!
//! // Falls back to the input on any failure
//! let fixed = oracle.repair("The qu- ick brown fox").await;
//!
//! // Falls back to "" on any failure
//! let summary = oracle.summarize(&corpus).await;
//! ```

mod provider;
mod service;
mod types;

pub use provider::{generated_text, DisabledProvider, GeminiProvider, OracleProvider};
pub use service::{truncate_chars, TextOracle, SUMMARY_CHAR_LIMIT};
pub use types::{OracleError, OracleTask};

#[cfg(test)]
pub(crate) use provider::MockProvider;
