//! AURA Services - Brief and media plan generation
//!
//! Two collaborating services sharing the same shape: compose a
//! system/user prompt pair, wait on a per-service rate limiter, issue
//! one structured-output call, and attach the provider's token usage to
//! the parsed result. [`Pipeline`] runs them sequentially with explicit
//! request/response objects.

pub mod brief;
pub mod error;
pub mod media;
pub mod pipeline;
pub mod prompts;
pub mod settings;

pub use brief::BriefService;
pub use error::ServiceError;
pub use media::{format_brief, MediaService};
pub use pipeline::{Pipeline, PipelineOutput, PipelineRequest};
pub use settings::Settings;
