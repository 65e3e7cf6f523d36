//! Error types for data-model generation

use thiserror::Error;

/// Errors that can occur while building or rendering a data model
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A model kind or configuration is unusable
    ///
    /// Raised at construction time, never per render call.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The named template could not be found, read or compiled
    #[error("Template resolution failed for {template}: {reason}")]
    TemplateResolutionError {
        /// Template identifier as declared by the model kind
        template: String,
        /// What went wrong while resolving it
        reason: String,
    },

    /// The template compiled but substitution failed
    #[error("Render error: {0}")]
    RenderError(String),

    /// Layered configuration could not be loaded
    #[error("Config error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Configuration could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(#[from] toml::ser::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result alias for generation operations
pub type Result<T> = std::result::Result<T, GenerationError>;
