use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::usage::{tokens_unset, TokenUsage, TOKENS_UNSET};

/// A specific media channel within a media plan.
///
/// Owned by its parent [`MediaPlan`]; channels have no independent
/// identity or lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MediaChannel {
    pub channel_name: String,
    pub description: String,
    pub budget_allocation: String,
    pub target_audience: String,
    pub content_strategy: String,
    pub timing: String,
    pub expected_reach: String,
    pub success_metrics: Vec<String>,
}

/// Complete media plan produced by the media stage
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MediaPlan {
    pub title: String,
    pub overview: String,
    pub total_budget: String,
    pub campaign_duration: String,
    pub primary_objectives: Vec<String>,
    pub media_channels: Vec<MediaChannel>,
    pub integrated_strategy: String,
    pub risk_mitigation: Vec<String>,
    pub success_measurement: Vec<String>,
    pub implementation_timeline: String,

    // token accounting
    #[serde(default = "tokens_unset")]
    #[schemars(skip)]
    pub input_tokens: i64,
    #[serde(default = "tokens_unset")]
    #[schemars(skip)]
    pub output_tokens: i64,
}

impl MediaPlan {
    /// Record provider-reported usage, or reset both counts to the
    /// sentinel when none was reported. Both fields always move together.
    pub fn set_usage(&mut self, usage: Option<TokenUsage>) {
        match usage {
            Some(u) => {
                self.input_tokens = u.input_tokens;
                self.output_tokens = u.output_tokens;
            }
            None => {
                self.input_tokens = TOKENS_UNSET;
                self.output_tokens = TOKENS_UNSET;
            }
        }
    }

    /// Whether both token counts were filled from usage metadata
    pub fn has_usage(&self) -> bool {
        self.input_tokens >= 0 && self.output_tokens >= 0
    }
}
