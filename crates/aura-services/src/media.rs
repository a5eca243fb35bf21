//! Media plan generation from a campaign brief

use std::time::Duration;

use tracing::info;

use aura_provider::{AsyncLimiter, ChatParams, StructuredClient};
use aura_types::{CampaignBrief, MediaPlan, ModelSpec};

use crate::error::{Result, ServiceError};
use crate::prompts;
use crate::settings::Settings;

/// Service to generate a media plan from a campaign brief
pub struct MediaService {
    llm: StructuredClient,
    limiter: AsyncLimiter,
}

impl MediaService {
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

    /// Generate a structured media plan based on the campaign brief.
    ///
    /// The brief's fields are assumed valid; no re-validation happens
    /// here. Failures keep their typed kind rather than being wrapped
    /// into a generic error.
    pub async fn generate_media_plan(
        &self,
        campaign_brief: &CampaignBrief,
        custom_prompt: Option<&str>,
    ) -> Result<MediaPlan> {
        let prompt = custom_prompt.unwrap_or(prompts::MEDIA_PLAN_SYSTEM_PROMPT);
        let user = format!("Campaign Brief:\n{}", format_brief(campaign_brief));

        self.limiter.acquire().await;
        let response = self.llm.generate::<MediaPlan>(prompt, &user).await?;

        let mut plan = response.parsed;
        plan.set_usage(response.usage);
        info!(
            "Generated media plan '{}' with {} channels",
            plan.title,
            plan.media_channels.len()
        );
        Ok(plan)
    }
}

/// Flatten a campaign brief into the field-labeled text block fed to the
/// media stage.
///
/// Deterministic: fixed field order, list fields joined with `", "`,
/// empty lists and absent optionals omitted entirely.
pub fn format_brief(brief: &CampaignBrief) -> String {
    let mut parts = vec![
        format!("Title: {}", brief.title),
        format!("Objective Summary: {}", brief.objective_summary),
        format!("Value Proposition: {}", brief.value_proposition),
    ];

    let mut push_list = |label: &str, items: &[String]| {
        if !items.is_empty() {
            parts.push(format!("{}: {}", label, items.join(", ")));
        }
    };

    push_list("Target Audience", &brief.target_audience);
    push_list("Key Insights", &brief.key_insights);
    push_list("Messaging Pillars", &brief.messaging_pillars);
    push_list("Recommended Channels", &brief.channels);
    push_list("Recommendations", &brief.recommendations);
    push_list("KPIs", &brief.kpis);

    if let Some(budget) = &brief.budget_guidance {
        parts.push(format!("Budget Guidance: {budget}"));
    }
    if let Some(timeline) = &brief.timeline {
        parts.push(format!("Timeline: {timeline}"));
    }

    parts.join("\n")
}
