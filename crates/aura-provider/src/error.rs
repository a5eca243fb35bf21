//! Error types for provider calls

use async_openai::error::OpenAIError;
use thiserror::Error;

/// Provider errors
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The outbound chat completion request failed
    #[error("Request failed: {0}")]
    Request(#[from] OpenAIError),

    /// The provider returned no choices
    #[error("Provider returned no choices")]
    EmptyResponse,

    /// The target schema could not be serialized for the request
    #[error("Failed to build schema for '{schema}': {details}")]
    Schema {
        /// Schema name
        schema: String,
        /// Serialization details
        details: String,
    },

    /// The reply did not conform to the target schema
    #[error("Response did not match the '{schema}' schema: {source}")]
    SchemaDecode {
        /// Schema name
        schema: String,
        /// Decode failure
        #[source]
        source: serde_json::Error,
    },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ProviderError>;
