//! Model catalog mapping friendly model names to provider identifiers
//! and per-1K-token pricing.
//!
//! Unknown names are a hard error rather than a silent fallback, so a
//! typo in configuration surfaces at construction time instead of
//! quietly running against the wrong model.

use thiserror::Error;

/// Catalog lookup errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The friendly model name is not in the catalog
    #[error("Unknown model '{0}' (known models: sonnet, haiku, gpt-4o-mini)")]
    UnknownModel(String),
}

/// Provider identifier plus pricing for one catalog entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSpec {
    /// Provider-facing model identifier
    pub id: &'static str,
    /// Cost per 1K input tokens, in USD
    pub input_cost_per_1k: f64,
    /// Cost per 1K output tokens, in USD
    pub output_cost_per_1k: f64,
}

const CATALOG: &[(&str, ModelSpec)] = &[
    (
        "sonnet",
        ModelSpec {
            id: "claude-3-sonnet-20240229",
            input_cost_per_1k: 0.003,
            output_cost_per_1k: 0.015,
        },
    ),
    (
        "haiku",
        ModelSpec {
            id: "claude-3-haiku-20240307",
            input_cost_per_1k: 0.00025,
            output_cost_per_1k: 0.00125,
        },
    ),
    (
        "gpt-4o-mini",
        ModelSpec {
            id: "gpt-4o-mini",
            input_cost_per_1k: 0.00015,
            output_cost_per_1k: 0.0006,
        },
    ),
];

impl ModelSpec {
    /// Look up a catalog entry by friendly name
    pub fn lookup(name: &str) -> Result<&'static ModelSpec, CatalogError> {
        CATALOG
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, spec)| spec)
            .ok_or_else(|| CatalogError::UnknownModel(name.to_string()))
    }
}
