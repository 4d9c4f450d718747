//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::oracle::{OracleError, TextOracle};
use crate::pipeline::ReportPipeline;
use crate::storage::UploadStore;

/// Error type for state initialization
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to prepare upload directory: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Failed to initialize oracle: {0}")]
    Oracle(#[from] OracleError),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: UploadStore,
    pipeline: ReportPipeline,
}

impl AppState {
    /// Create the state from configuration.
    ///
    /// Creates the upload directory and picks the oracle provider (disabled
    /// when no API key is configured).
    pub async fn new(config: Config) -> Result<Self, StateError> {
        let oracle = TextOracle::from_config(&config.oracle)?;
        Self::with_oracle(config, oracle).await
    }

    /// Create the state with an explicit oracle
    pub async fn with_oracle(config: Config, oracle: TextOracle) -> Result<Self, StateError> {
        let store = UploadStore::open(config.storage.upload_dir.clone(), config.storage.retention()).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                pipeline: ReportPipeline::new(oracle),
            }),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the upload store
    pub fn store(&self) -> &UploadStore {
        &self.inner.store
    }

    /// Get the report pipeline
    pub fn pipeline(&self) -> &ReportPipeline {
        &self.inner.pipeline
    }
}
