//! Campaign brief generation from research text and objectives

use std::time::Duration;

use tracing::info;

use aura_provider::{AsyncLimiter, ChatParams, StructuredClient};
use aura_types::{CampaignBrief, ModelSpec};

use crate::error::{Result, ServiceError};
use crate::prompts;
use crate::settings::Settings;

/// Service to generate a marketing campaign brief from research and
/// objectives
pub struct BriefService {
    llm: StructuredClient,
    limiter: AsyncLimiter,
}

impl BriefService {
    /// Create the service, failing fast on a missing credential or an
    /// unknown model name
    pub fn new(settings: &Settings) -> Result<Self> {
        if settings.llm.api_key.is_empty() {
            return Err(ServiceError::MissingApiKey);
        }
        let spec = ModelSpec::lookup(&settings.llm.model)?;

        let params = ChatParams {
            model: spec.id.to_string(),
            temperature: settings.llm.temperature,
            top_p: settings.llm.top_p,
            max_tokens: settings.llm.max_tokens,
        };

        Ok(Self {
            llm: StructuredClient::new(
                &settings.llm.api_key,
                settings.llm.base_url.as_deref(),
                params,
            ),
            limiter: AsyncLimiter::new(
                settings.rate_limit.max_rate,
                Duration::from_secs(settings.rate_limit.time_period_secs),
            ),
        })
    }

    /// Generate a structured campaign brief.
    ///
    /// Schema or provider failures propagate as-is; nothing is retried.
    pub async fn generate_brief(
        &self,
        research_text: &str,
        objectives: &str,
        system_prompt: Option<&str>,
    ) -> Result<CampaignBrief> {
        let prompt = system_prompt.unwrap_or(prompts::CAMPAIGN_BRIEF_SYSTEM_PROMPT);
        let user = format!(
            "Objectives:\n{}\n\nMarket Research:\n{}",
            objectives.trim(),
            research_text.trim()
        );

        self.limiter.acquire().await;
        let response = self.llm.generate::<CampaignBrief>(prompt, &user).await?;

        let mut brief = response.parsed;
        brief.set_usage(response.usage);
        info!(
            "Generated campaign brief '{}' ({} input / {} output tokens)",
            brief.title, brief.input_tokens, brief.output_tokens
        );
        Ok(brief)
    }
}
