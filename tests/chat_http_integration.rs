//! Integration tests for the gateway HTTP surface.
//!
//! Wires the real handlers to mock ports and checks the end-to-end
//! contracts: envelopes, the bounding/reset policy as observed through HTTP,
//! and that invalid requests never reach an upstream.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;

use lana_gateway::adapters::ai::MockChatProvider;
use lana_gateway::adapters::http::chat::dto::ChatTurnParams;
use lana_gateway::adapters::http::chat::handlers::{chat_turn_json, chat_turn_query};
use lana_gateway::adapters::http::passthrough::handlers::passthrough;
use lana_gateway::adapters::http::passthrough::table;
use lana_gateway::adapters::http::GatewayState;
use lana_gateway::adapters::storage::InMemoryHistoryStore;
use lana_gateway::domain::{ConversationHistories, Turn, DEFAULT_MAX_TURNS};
use lana_gateway::ports::{ChatProviderError, HistoryStore};

fn gateway(
    store: Arc<InMemoryHistoryStore>,
    provider: Arc<MockChatProvider>,
) -> GatewayState {
    GatewayState::new(store, provider, reqwest::Client::new(), DEFAULT_MAX_TURNS)
}

fn chat_params(q: Option<&str>, user_id: Option<&str>) -> ChatTurnParams {
    ChatTurnParams {
        q: q.map(String::from),
        user_id: user_id.map(String::from),
    }
}

#[tokio::test]
async fn fresh_user_gets_reply_and_two_turn_history() {
    let store = Arc::new(InMemoryHistoryStore::new());
    let provider = Arc::new(MockChatProvider::new().with_reply("hi there"));
    let state = gateway(store.clone(), provider.clone());

    let (status, Json(body)) =
        chat_turn_query(State(state), Query(chat_params(Some("hello"), Some("u1"))))
            .await
            .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.status, 200);
    assert_eq!(body.reply, "hi there");
    assert_eq!(
        body.history,
        vec![Turn::user("hello"), Turn::assistant("hi there")]
    );

    // Persisted sequence matches the envelope.
    let persisted = store.load().await;
    assert_eq!(persisted.turns("u1"), body.history.as_slice());
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn full_history_resets_instead_of_growing() {
    let mut seeded = ConversationHistories::new();
    for i in 0..100 {
        seeded.append_assistant_turn("u1", format!("old {i}"));
    }
    let store = Arc::new(InMemoryHistoryStore::with_histories(seeded));
    let provider = Arc::new(MockChatProvider::new().with_reply("pong"));
    let state = gateway(store.clone(), provider);

    let (_, Json(body)) =
        chat_turn_query(State(state), Query(chat_params(Some("ping"), Some("u1"))))
            .await
            .unwrap();

    // Length 2, not 102.
    assert_eq!(
        body.history,
        vec![Turn::user("ping"), Turn::assistant("pong")]
    );
    assert_eq!(store.load().await.turns("u1").len(), 2);
}

#[tokio::test]
async fn missing_parameters_never_reach_the_upstream() {
    let provider = Arc::new(MockChatProvider::new().with_reply("unused"));
    let store = Arc::new(InMemoryHistoryStore::new());

    for (q, user_id, expected) in [
        (None, Some("u1"), "Missing required parameter: q"),
        (Some("hello"), None, "Missing required parameter: userId"),
        (None, None, "Missing required parameter: q"),
    ] {
        let state = gateway(store.clone(), provider.clone());
        let result = chat_turn_query(State(state), Query(chat_params(q, user_id))).await;

        let (status, Json(body)) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.status, 400);
        assert_eq!(body.message.as_deref(), Some(expected));
    }

    assert_eq!(provider.call_count(), 0);
    assert_eq!(store.load().await, ConversationHistories::new());
}

#[tokio::test]
async fn upstream_failure_surfaces_detail_and_persists_nothing() {
    let mut seeded = ConversationHistories::new();
    seeded.append_user_turn("u1", "before", DEFAULT_MAX_TURNS);
    seeded.append_assistant_turn("u1", "before reply");
    let store = Arc::new(InMemoryHistoryStore::with_histories(seeded.clone()));
    let provider = Arc::new(
        MockChatProvider::new()
            .with_error(ChatProviderError::upstream(502, "bad credential")),
    );
    let state = gateway(store.clone(), provider);

    let result =
        chat_turn_query(State(state), Query(chat_params(Some("hello"), Some("u1")))).await;

    let (status, Json(body)) = result.unwrap_err();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.status, 500);
    assert!(body.error.unwrap().contains("bad credential"));

    // History unchanged from before the request.
    assert_eq!(store.load().await, seeded);
}

#[tokio::test]
async fn post_body_works_with_content_alias() {
    let store = Arc::new(InMemoryHistoryStore::new());
    let provider = Arc::new(MockChatProvider::new().with_reply("ok"));
    let state = gateway(store, provider);

    let params: ChatTurnParams =
        serde_json::from_str(r#"{"content":"hello","userId":"u1"}"#).unwrap();
    let (status, Json(body)) = chat_turn_json(State(state), Json(params)).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.reply, "ok");
}

#[tokio::test]
async fn consecutive_turns_accumulate_context() {
    let store = Arc::new(InMemoryHistoryStore::new());
    let provider = Arc::new(
        MockChatProvider::new()
            .with_reply("first reply")
            .with_reply("second reply"),
    );

    for content in ["first", "second"] {
        let state = gateway(store.clone(), provider.clone());
        chat_turn_query(State(state), Query(chat_params(Some(content), Some("u1"))))
            .await
            .unwrap();
    }

    let persisted = store.load().await;
    assert_eq!(
        persisted.turns("u1"),
        &[
            Turn::user("first"),
            Turn::assistant("first reply"),
            Turn::user("second"),
            Turn::assistant("second reply"),
        ]
    );

    // Second dispatch carried the first exchange as context.
    let calls = provider.calls();
    assert_eq!(calls[1].len(), 3);
}

#[tokio::test]
async fn stateless_routes_reject_missing_parameters_without_calling_out() {
    let store = Arc::new(InMemoryHistoryStore::new());
    let provider = Arc::new(MockChatProvider::new());

    for path in ["/ai/gptweb", "/ai/gemini", "/ai/logic", "/ai/chat"] {
        let route = table::find(path).unwrap();
        let state = gateway(store.clone(), provider.clone());

        let result = passthrough(route, state, table::Params::new()).await;

        let (status, Json(body)) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST, "route {path}");
        assert_eq!(body.status, 400);
        assert!(body
            .message
            .unwrap()
            .starts_with("Missing required parameter"));
    }
}
