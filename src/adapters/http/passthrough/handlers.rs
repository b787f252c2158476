//! Generic handler for the stateless pass-through routes.

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde_json::Value;

use super::super::dto::{ErrorResponse, PassthroughResponse};
use super::super::GatewayState;
use super::table::{Extract, Params, StatelessRoute, STATELESS_ROUTES};

type PassthroughReply =
    Result<(StatusCode, Json<PassthroughResponse>), (StatusCode, Json<ErrorResponse>)>;

/// Registers every table entry under its path, GET and POST.
pub fn routes() -> Router<GatewayState> {
    let mut router = Router::new();
    for route in STATELESS_ROUTES.iter() {
        let via_query = move |State(state): State<GatewayState>, Query(params): Query<Params>| {
            passthrough(route, state, params)
        };
        let via_json = move |State(state): State<GatewayState>, Json(params): Json<Params>| {
            passthrough(route, state, params)
        };
        router = router.route(route.path, get(via_query).post(via_json));
    }
    router
}

/// Validate -> single upstream call -> extract -> envelope.
pub async fn passthrough(
    route: &'static StatelessRoute,
    state: GatewayState,
    params: Params,
) -> PassthroughReply {
    for name in route.required {
        match params.get(*name) {
            Some(value) if !value.trim().is_empty() => {}
            _ => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::missing_parameter(name)),
                ))
            }
        }
    }

    let upstream = (route.build)(&params);
    let mut request = state.http.request(upstream.method, &upstream.url);
    if !upstream.query.is_empty() {
        request = request.query(&upstream.query);
    }
    for (name, value) in &upstream.headers {
        request = request.header(*name, *value);
    }
    if let Some(body) = &upstream.json {
        request = request.json(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| internal_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        return Err(internal_error(format!(
            "upstream returned {}: {detail}",
            status.as_u16()
        )));
    }

    let result = match route.extract {
        Extract::Text => Value::String(
            response
                .text()
                .await
                .map_err(|e| internal_error(e.to_string()))?,
        ),
        Extract::Json(pointer) => {
            let body: Value = response
                .json()
                .await
                .map_err(|e| internal_error(e.to_string()))?;
            body.pointer(pointer).cloned().unwrap_or(Value::Null)
        }
    };

    Ok((StatusCode::OK, Json(PassthroughResponse::new(result))))
}

fn internal_error(detail: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::upstream(detail)),
    )
}
