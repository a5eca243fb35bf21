use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::usage::{tokens_unset, TokenUsage, TOKENS_UNSET};

/// Structured marketing campaign brief produced by the brief stage.
///
/// Token accounting fields are filled in after the call from provider
/// usage metadata; they are hidden from the LLM-facing schema and stay
/// at the -1 sentinel when the provider reports no usage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CampaignBrief {
    pub title: String,
    pub objective_summary: String,
    pub target_audience: Vec<String>,
    pub key_insights: Vec<String>,
    pub value_proposition: String,
    pub messaging_pillars: Vec<String>,
    pub channels: Vec<String>,
    pub recommendations: Vec<String>,
    pub kpis: Vec<String>,
    #[serde(default)]
    pub budget_guidance: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,

    // token accounting
    #[serde(default = "tokens_unset")]
    #[schemars(skip)]
    pub input_tokens: i64,
    #[serde(default = "tokens_unset")]
    #[schemars(skip)]
    pub output_tokens: i64,
}

impl CampaignBrief {
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
