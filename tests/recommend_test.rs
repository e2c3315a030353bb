mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{FakeClaude, FakeModel, claude_config, recommendations_json, spawn};
use vibefm::{
    Error,
    claude::{ClaudeClient, CompletionModel},
    recommendation::RecommendationEngine,
    types::Track,
};

fn track(id: &str, name: &str, artist: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artist: artist.to_string(),
        album: "Album".to_string(),
        album_art_url: None,
        external_link: format!("https://open.spotify.com/track/{}", id),
    }
}

fn history() -> Vec<Track> {
    vec![
        track("a", "Song A", "Artist A"),
        track("b", "Song B", "Artist B"),
        track("c", "Song C", "Artist C"),
    ]
}

#[tokio::test]
async fn test_empty_history_never_calls_model() {
    let model = FakeModel::replying(recommendations_json(12));
    let engine = RecommendationEngine::new(model.clone());

    let err = engine.recommend(&[]).await.unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn test_recommendations_end_to_end() {
    let model = FakeModel::replying(recommendations_json(12));
    let engine = RecommendationEngine::new(model.clone());

    let songs = engine.recommend(&history()).await.unwrap();

    assert_eq!(songs.len(), 12);
    assert_eq!(model.calls(), 1);
    for (i, song) in songs.iter().enumerate() {
        assert_eq!(song.name, format!("New Song {}", i + 1));
        assert!(!song.reason.is_empty());
        assert!(
            song.external_link
                .starts_with("https://open.spotify.com/search/")
        );
        assert!(song.external_link.contains(&urlencoding::encode(&song.name).into_owned()));
        assert!(
            song.external_link
                .contains(&urlencoding::encode(&song.artist).into_owned())
        );
    }

    let prompts = model.prompts.lock().unwrap();
    assert!(prompts[0].contains("Song A - Artist A\nSong B - Artist B\nSong C - Artist C"));
}

#[tokio::test]
async fn test_fenced_reply_matches_plain_reply() {
    let plain = recommendations_json(3);
    let fenced = format!("```json\n{}\n```", plain);

    let from_plain = RecommendationEngine::new(FakeModel::replying(plain))
        .recommend(&history())
        .await
        .unwrap();
    let from_fenced = RecommendationEngine::new(FakeModel::replying(fenced))
        .recommend(&history())
        .await
        .unwrap();

    assert_eq!(from_plain, from_fenced);
}

#[tokio::test]
async fn test_prose_reply_is_malformed() {
    let reply = "Sure! Here are some songs you might enjoy: Midnight City by M83.";
    let engine = RecommendationEngine::new(FakeModel::replying(reply));

    let err = engine.recommend(&history()).await.unwrap_err();

    match err {
        Error::MalformedAiResponse { raw, .. } => assert_eq!(raw, reply),
        other => panic!("expected MalformedAiResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn test_claude_client_returns_reply_text() {
    let fake = FakeClaude::replying("[]");
    let base = spawn(fake.router()).await;
    let client = ClaudeClient::new(claude_config(&base), reqwest::Client::new());

    let reply = client.complete("recommend me something").await.unwrap();

    assert_eq!(reply, "[]");
    let request = fake.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request["model"], "claude-test");
    assert_eq!(request["max_tokens"], 1024);
    assert_eq!(request["messages"].as_array().map(Vec::len), Some(1));
    assert_eq!(request["messages"][0]["role"], "user");
    assert_eq!(request["messages"][0]["content"], "recommend me something");
}

#[tokio::test]
async fn test_claude_engine_over_http() {
    let fake = FakeClaude::replying(&format!("```\n{}\n```", recommendations_json(10)));
    let base = spawn(fake.router()).await;
    let model = Arc::new(ClaudeClient::new(claude_config(&base), reqwest::Client::new()));

    let songs = RecommendationEngine::new(model)
        .recommend(&history())
        .await
        .unwrap();

    assert_eq!(songs.len(), 10);
    assert_eq!(fake.calls(), 1);
}

#[tokio::test]
async fn test_claude_failures_are_classified() {
    let cases = [
        (StatusCode::TOO_MANY_REQUESTS, "rate_limit"),
        (StatusCode::INTERNAL_SERVER_ERROR, "invocation"),
        (StatusCode::SERVICE_UNAVAILABLE, "invocation"),
    ];

    for (status, expected) in cases {
        let fake = FakeClaude::failing(status);
        let base = spawn(fake.router()).await;
        let client = ClaudeClient::new(claude_config(&base), reqwest::Client::new());

        let err = client.complete("prompt").await.unwrap_err();
        let ok = match expected {
            "rate_limit" => matches!(err, Error::ModelRateLimit(_)),
            _ => matches!(err, Error::ModelInvocation(_)),
        };
        assert!(ok, "{} gave {:?}", status, err);
    }
}

#[tokio::test]
async fn test_rejected_api_key_is_model_auth() {
    let fake = FakeClaude::replying("[]");
    let base = spawn(fake.router()).await;
    let mut config = claude_config(&base);
    config.api_key = "sk-ant-revoked".to_string();

    let err = ClaudeClient::new(config, reqwest::Client::new())
        .complete("prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ModelAuth(_)), "got {:?}", err);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_unreachable_model_is_invocation() {
    let client = ClaudeClient::new(claude_config("http://127.0.0.1:9"), reqwest::Client::new());

    let err = client.complete("prompt").await.unwrap_err();
    assert!(matches!(err, Error::ModelInvocation(_)));
    assert!(err.is_retryable());
}
