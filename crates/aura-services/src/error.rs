//! Error types for the generation services.
//!
//! Both services surface the same typed error; provider and schema
//! failures keep their original kind instead of being collapsed into a
//! generic message.

use aura_provider::ProviderError;
use aura_types::CatalogError;
use thiserror::Error;

/// Service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    /// API credential missing or empty at construction
    #[error("OPENAI_API_KEY is required")]
    MissingApiKey,

    /// Configured model name is not in the catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Provider call or schema validation failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ServiceError>;
