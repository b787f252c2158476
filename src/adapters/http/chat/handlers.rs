//! HTTP handlers for the stateful chat route.
//!
//! Validation happens here, before the history store or the upstream is
//! touched: a missing `q`/`content` or `userId` fails fast with a 400 naming
//! the parameter.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;

use crate::application::handlers::{ChatTurnCommand, ChatTurnError};

use super::super::dto::ErrorResponse;
use super::super::GatewayState;
use super::dto::{ChatTurnParams, ChatTurnResponse};

type ChatTurnReply = Result<(StatusCode, Json<ChatTurnResponse>), (StatusCode, Json<ErrorResponse>)>;

/// Chat turn via query string.
///
/// GET /ai/groq?q=...&userId=...
pub async fn chat_turn_query(
    State(state): State<GatewayState>,
    Query(params): Query<ChatTurnParams>,
) -> ChatTurnReply {
    chat_turn(state, params).await
}

/// Chat turn via JSON body.
///
/// POST /ai/groq
pub async fn chat_turn_json(
    State(state): State<GatewayState>,
    Json(params): Json<ChatTurnParams>,
) -> ChatTurnReply {
    chat_turn(state, params).await
}

async fn chat_turn(state: GatewayState, params: ChatTurnParams) -> ChatTurnReply {
    let content = match params.q {
        Some(q) if !q.trim().is_empty() => q,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::missing_parameter("q")),
            ))
        }
    };
    let user_id = match params.user_id {
        Some(id) if !id.trim().is_empty() => id,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::missing_parameter("userId")),
            ))
        }
    };

    let handler = state.chat_turn_handler();
    let result = handler
        .handle(ChatTurnCommand { user_id, content })
        .await
        .map_err(|e| match e {
            ChatTurnError::Provider(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::upstream(err.to_string())),
            ),
        })?;

    Ok((
        StatusCode::OK,
        Json(ChatTurnResponse {
            status: 200,
            reply: result.reply,
            history: result.history,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockChatProvider;
    use crate::adapters::storage::InMemoryHistoryStore;
    use crate::domain::{Turn, DEFAULT_MAX_TURNS};
    use std::sync::Arc;

    fn test_state(provider: MockChatProvider) -> GatewayState {
        GatewayState::new(
            Arc::new(InMemoryHistoryStore::new()),
            Arc::new(provider),
            reqwest::Client::new(),
            DEFAULT_MAX_TURNS,
        )
    }

    fn params(q: Option<&str>, user_id: Option<&str>) -> ChatTurnParams {
        ChatTurnParams {
            q: q.map(String::from),
            user_id: user_id.map(String::from),
        }
    }

    #[tokio::test]
    async fn successful_turn_returns_reply_and_history() {
        let state = test_state(MockChatProvider::new().with_reply("hi there"));

        let (status, Json(body)) =
            chat_turn_query(State(state), Query(params(Some("hello"), Some("u1"))))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, 200);
        assert_eq!(body.reply, "hi there");
        assert_eq!(
            body.history,
            vec![Turn::user("hello"), Turn::assistant("hi there")]
        );
    }

    #[tokio::test]
    async fn missing_q_is_rejected_before_dispatch() {
        let provider = MockChatProvider::new().with_reply("unused");
        let state = test_state(provider.clone());

        let result = chat_turn_query(State(state), Query(params(None, Some("u1")))).await;

        let (status, Json(body)) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message.as_deref(), Some("Missing required parameter: q"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_user_id_is_rejected_before_dispatch() {
        let provider = MockChatProvider::new().with_reply("unused");
        let state = test_state(provider.clone());

        let result = chat_turn_query(State(state), Query(params(Some("hello"), None))).await;

        let (status, Json(body)) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.message.as_deref(),
            Some("Missing required parameter: userId")
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn blank_parameters_count_as_missing() {
        let provider = MockChatProvider::new();
        let state = test_state(provider.clone());

        let result = chat_turn_query(State(state), Query(params(Some("  "), Some("u1")))).await;

        assert!(result.is_err());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn provider_failure_maps_to_500_with_detail() {
        use crate::ports::ChatProviderError;
        let state = test_state(
            MockChatProvider::new().with_error(ChatProviderError::upstream(503, "overloaded")),
        );

        let result = chat_turn_query(State(state), Query(params(Some("hello"), Some("u1")))).await;

        let (status, Json(body)) = result.unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.status, 500);
        assert!(body.error.unwrap().contains("overloaded"));
    }

    #[tokio::test]
    async fn json_body_accepts_content_alias() {
        let state = test_state(MockChatProvider::new().with_reply("ok"));
        let params: ChatTurnParams =
            serde_json::from_str(r#"{"content":"hello","userId":"u1"}"#).unwrap();

        let (status, Json(body)) = chat_turn_json(State(state), Json(params)).await.unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.reply, "ok");
    }
}
