//! AURA Types - Data contracts for the AURA generation pipeline
//!
//! This crate defines the structured-output schemas exchanged with the
//! LLM provider (campaign briefs and media plans), the model catalog with
//! token pricing, and the typed feature access table.

pub mod access;
pub mod campaign;
pub mod catalog;
pub mod media;
pub mod usage;

pub use access::AccessTable;
pub use campaign::CampaignBrief;
pub use catalog::{CatalogError, ModelSpec};
pub use media::{MediaChannel, MediaPlan};
pub use usage::{TokenUsage, TOKENS_UNSET};
