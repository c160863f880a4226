//! Error types for the engine binary.

use xiuxian_core::ConfigError;

/// Errors that can occur during engine startup.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },
}
