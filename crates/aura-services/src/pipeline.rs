//! Two-stage generation pipeline.
//!
//! Explicit request and response objects carry state between the
//! stages; nothing lives in ambient session state. The brief stage must
//! complete before the media stage starts, which the pipeline enforces
//! by running them sequentially.

use serde::{Deserialize, Serialize};
use tracing::info;

use aura_types::{CampaignBrief, MediaPlan};

use crate::brief::BriefService;
use crate::error::Result;
use crate::media::MediaService;
use crate::settings::Settings;

/// Input to a full pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRequest {
    /// Concatenated extracted document text; may be empty
    pub research_text: String,
    /// Marketing objectives; validated non-empty by the caller
    pub objectives: String,
}

/// Output of a full pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub brief: CampaignBrief,
    pub plan: MediaPlan,
}

/// Sequential brief → media plan pipeline
pub struct Pipeline {
    brief_service: BriefService,
    media_service: MediaService,
}

impl Pipeline {
    /// Create both stages from shared settings; each stage keeps its own
    /// rate limiter
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            brief_service: BriefService::new(settings)?,
            media_service: MediaService::new(settings)?,
        })
    }

    /// Run both stages, feeding the brief into the media stage
    pub async fn run(&self, request: &PipelineRequest) -> Result<PipelineOutput> {
        info!("Starting generation pipeline");
        let brief = self
            .brief_service
            .generate_brief(&request.research_text, &request.objectives, None)
            .await?;

        let plan = self
            .media_service
            .generate_media_plan(&brief, None)
            .await?;

        Ok(PipelineOutput { brief, plan })
    }
}
