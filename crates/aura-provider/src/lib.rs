//! AURA Provider - Structured-output LLM client
//!
//! One call shape for the whole pipeline: submit a system/user prompt
//! pair plus a target schema, receive the parsed object together with
//! the provider's token usage metadata. The client is provider-shape
//! agnostic: any OpenAI-compatible endpoint works through the base-URL
//! override.

pub mod error;
pub mod limiter;

use async_openai::{config::OpenAIConfig, Client};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use aura_types::TokenUsage;

pub use error::ProviderError;
pub use limiter::AsyncLimiter;

use error::Result;

/// Sampling parameters for chat completion calls
#[derive(Debug, Clone)]
pub struct ChatParams {
    /// Provider-facing model identifier
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

/// A schema-conformant reply plus the raw usage metadata it came with
#[derive(Debug, Clone)]
pub struct Structured<T> {
    pub parsed: T,
    pub usage: Option<TokenUsage>,
}

/// Chat client constrained to schema-guided structured output
pub struct StructuredClient {
    client: Client<OpenAIConfig>,
    params: ChatParams,
}

impl StructuredClient {
    /// Create a client for the given credential and endpoint
    pub fn new(api_key: &str, base_url: Option<&str>, params: ChatParams) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(url) = base_url {
            config = config.with_api_base(url);
        }
        info!("Structured client initialized for model {}", params.model);
        Self {
            client: Client::with_config(config),
            params,
        }
    }

    /// Submit a system/user message pair and coerce the reply into `T`.
    ///
    /// A reply that is not schema-conformant JSON is a
    /// [`ProviderError::SchemaDecode`]; nothing is retried or repaired
    /// here.
    pub async fn generate<T>(&self, system_prompt: &str, user_message: &str) -> Result<Structured<T>>
    where
        T: DeserializeOwned + JsonSchema,
    {
        use async_openai::types::chat::{
            ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
            CreateChatCompletionRequestArgs, ResponseFormat, ResponseFormatJsonSchema,
        };

        let schema_name = T::schema_name().to_string();
        let schema =
            serde_json::to_value(schemars::schema_for!(T)).map_err(|e| ProviderError::Schema {
                schema: schema_name.clone(),
                details: e.to_string(),
            })?;

        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system_prompt)
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_message)
                .build()?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.params.model)
            .messages(messages)
            .temperature(self.params.temperature)
            .top_p(self.params.top_p)
            .max_completion_tokens(self.params.max_tokens)
            .response_format(ResponseFormat::JsonSchema {
                json_schema: ResponseFormatJsonSchema {
                    name: schema_name.clone(),
                    description: None,
                    schema: Some(schema),
                    strict: None,
                },
            })
            .build()?;

        debug!("Submitting structured call for schema '{}'", schema_name);
        let response = self.client.chat().create(request).await?;

        let usage = response
            .usage
            .as_ref()
            .map(|u| TokenUsage::new(i64::from(u.prompt_tokens), i64::from(u.completion_tokens)));

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(ProviderError::EmptyResponse)?;

        let parsed: T =
            serde_json::from_str(&content).map_err(|source| ProviderError::SchemaDecode {
                schema: schema_name,
                source,
            })?;

        Ok(Structured { parsed, usage })
    }
}
