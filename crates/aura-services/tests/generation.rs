//! Integration tests for the generation services against a mock
//! OpenAI-compatible endpoint.

use mockito::{Mock, ServerGuard};
use serde_json::json;

use aura_provider::ProviderError;
use aura_services::{BriefService, MediaService, Pipeline, PipelineRequest, ServiceError, Settings};
use aura_types::{CampaignBrief, CatalogError, TOKENS_UNSET};

fn test_settings(base_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.llm.api_key = "test-key".to_string();
    settings.llm.base_url = Some(base_url.to_string());
    // Subscriber is process-global; only the first test's call installs it
    let _ = aura_logging::init_logging(&settings.logging.level);
    settings
}

fn brief_content() -> String {
    json!({
        "title": "Summer Launch",
        "objective_summary": "Grow awareness among young renters",
        "target_audience": ["Urban renters", "Students"],
        "key_insights": ["Price sensitivity is high"],
        "value_proposition": "Move in within a week",
        "messaging_pillars": ["Speed", "Trust"],
        "channels": ["Paid social"],
        "recommendations": ["Lead with video"],
        "kpis": ["CTR"],
        "budget_guidance": "$100k",
        "timeline": "Q3"
    })
    .to_string()
}

fn plan_content() -> String {
    json!({
        "title": "Summer Launch Media Plan",
        "overview": "Digital-first rollout",
        "total_budget": "$100k",
        "campaign_duration": "12 weeks",
        "primary_objectives": ["Awareness"],
        "media_channels": [{
            "channel_name": "Paid social",
            "description": "Short-form video",
            "budget_allocation": "60%",
            "target_audience": "Urban renters",
            "content_strategy": "UGC-led",
            "timing": "Weeks 1-8",
            "expected_reach": "2M",
            "success_metrics": ["CPM"]
        }],
        "integrated_strategy": "Sequenced funnel",
        "risk_mitigation": ["Creative fatigue rotation"],
        "success_measurement": ["Brand lift"],
        "implementation_timeline": "Phased"
    })
    .to_string()
}

fn completion_body(content: &str, usage: Option<(u32, u32)>) -> String {
    let mut body = json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "claude-3-sonnet-20240229",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    });
    if let Some((prompt, completion)) = usage {
        body["usage"] = json!({
            "prompt_tokens": prompt,
            "completion_tokens": completion,
            "total_tokens": prompt + completion
        });
    }
    body.to_string()
}

async fn mock_completion(server: &mut ServerGuard, body: String) -> Mock {
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn generate_brief_fills_both_token_counts() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_completion(
        &mut server,
        completion_body(&brief_content(), Some((120, 480))),
    )
    .await;

    let service = BriefService::new(&test_settings(&server.url())).unwrap();
    let brief = service
        .generate_brief("Renters want speed.", "Grow awareness", None)
        .await
        .unwrap();

    assert_eq!(brief.title, "Summer Launch");
    assert_eq!(brief.input_tokens, 120);
    assert_eq!(brief.output_tokens, 480);
    assert!(brief.has_usage());
    mock.assert_async().await;
}

#[tokio::test]
async fn generate_brief_without_usage_leaves_sentinels() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_completion(&mut server, completion_body(&brief_content(), None)).await;

    let service = BriefService::new(&test_settings(&server.url())).unwrap();
    let brief = service
        .generate_brief("Renters want speed.", "Grow awareness", None)
        .await
        .unwrap();

    assert_eq!(brief.input_tokens, TOKENS_UNSET);
    assert_eq!(brief.output_tokens, TOKENS_UNSET);
    assert!(!brief.has_usage());
}

#[tokio::test]
async fn schema_violation_surfaces_as_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_completion(
        &mut server,
        completion_body("this is not the requested schema", Some((10, 10))),
    )
    .await;

    let service = BriefService::new(&test_settings(&server.url())).unwrap();
    let err = service
        .generate_brief("Research", "Objectives", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Provider(ProviderError::SchemaDecode { .. })
    ));
}

#[tokio::test]
async fn generate_media_plan_from_brief() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_completion(
        &mut server,
        completion_body(&plan_content(), Some((300, 900))),
    )
    .await;

    let brief: CampaignBrief = serde_json::from_str(&brief_content()).unwrap();
    let service = MediaService::new(&test_settings(&server.url())).unwrap();
    let plan = service.generate_media_plan(&brief, None).await.unwrap();

    assert_eq!(plan.title, "Summer Launch Media Plan");
    assert_eq!(plan.media_channels.len(), 1);
    assert_eq!(plan.input_tokens, 300);
    assert_eq!(plan.output_tokens, 900);
}

#[tokio::test]
async fn media_service_preserves_error_kind() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_completion(&mut server, completion_body("{}", Some((10, 10)))).await;

    let brief: CampaignBrief = serde_json::from_str(&brief_content()).unwrap();
    let service = MediaService::new(&test_settings(&server.url())).unwrap();
    let err = service.generate_media_plan(&brief, None).await.unwrap_err();

    // The original failure kind stays distinguishable; no generic
    // wrap-and-rethrow on the media stage.
    assert!(matches!(
        err,
        ServiceError::Provider(ProviderError::SchemaDecode { .. })
    ));
}

#[test]
fn missing_api_key_fails_fast() {
    let settings = Settings::default();
    assert!(matches!(
        BriefService::new(&settings),
        Err(ServiceError::MissingApiKey)
    ));
    assert!(matches!(
        MediaService::new(&settings),
        Err(ServiceError::MissingApiKey)
    ));
}

#[test]
fn unknown_model_name_fails_fast() {
    let mut settings = Settings::default();
    settings.llm.api_key = "test-key".to_string();
    settings.llm.model = "sonet".to_string();

    let err = BriefService::new(&settings)
        .err()
        .expect("construction must fail");
    match err {
        ServiceError::Catalog(CatalogError::UnknownModel(name)) => assert_eq!(name, "sonet"),
        other => panic!("expected catalog error, got {other:?}"),
    }
}

#[tokio::test]
async fn pipeline_feeds_brief_into_media_stage() {
    let mut server = mockito::Server::new_async().await;

    let brief_mock = server
        .mock("POST", "/chat/completions")
        .match_body(mockito::Matcher::Regex("Objectives:".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&brief_content(), Some((120, 480))))
        .create_async()
        .await;
    let plan_mock = server
        .mock("POST", "/chat/completions")
        .match_body(mockito::Matcher::Regex("Campaign Brief:".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(&plan_content(), Some((300, 900))))
        .create_async()
        .await;

    let pipeline = Pipeline::new(&test_settings(&server.url())).unwrap();
    let output = pipeline
        .run(&PipelineRequest {
            research_text: "Renters want speed.".to_string(),
            objectives: "Grow awareness".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.brief.title, "Summer Launch");
    assert_eq!(output.plan.title, "Summer Launch Media Plan");
    brief_mock.assert_async().await;
    plan_mock.assert_async().await;
}
