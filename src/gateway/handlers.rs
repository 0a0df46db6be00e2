use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::str::FromStr;

use super::{AppState, ChatBody};
use crate::actions::{self, ActionCategory};
use crate::conversation::SendOutcome;

/// GET /health — liveness plus the Responding flag
pub(super) async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    let body = serde_json::json!({
        "status": "ok",
        "responding": state.controller.is_responding(),
    });
    Json(body)
}

/// Query params for GET /api/actions
#[derive(Deserialize)]
pub(super) struct ActionsQuery {
    category: Option<String>,
}

/// GET /api/actions — quick-action catalog, optionally filtered by category
pub(super) async fn handle_actions(Query(query): Query<ActionsQuery>) -> Response {
    let category = match query.category.as_deref() {
        None => None,
        Some(raw) => match ActionCategory::from_str(raw) {
            Ok(category) => Some(category),
            Err(_) => {
                let err = serde_json::json!({
                    "error": format!("unknown category: {raw}")
                });
                return (StatusCode::BAD_REQUEST, Json(err)).into_response();
            }
        },
    };
    Json(actions::by_category(category)).into_response()
}

/// GET /api/history — the conversation so far, in append order
pub(super) async fn handle_history(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.controller.history())
}

/// POST /api/chat — send a message and wait for the reply
pub(super) async fn handle_chat(
    State(state): State<AppState>,
    body: Result<Json<ChatBody>, axum::extract::rejection::JsonRejection>,
) -> Response {
    let Json(chat_body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            let err = serde_json::json!({
                "error": format!("Invalid JSON: {rejection}. Expected: {{\"message\": \"...\"}}")
            });
            return (StatusCode::BAD_REQUEST, Json(err)).into_response();
        }
    };

    respond(&state, &chat_body.message).await
}

/// POST /api/actions/{id} — select a quick action; identical to posting its
/// prompt to /api/chat
pub(super) async fn handle_select_action(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let Some(action) = actions::find(&id) else {
        let err = serde_json::json!({"error": format!("unknown action: {id}")});
        return (StatusCode::NOT_FOUND, Json(err)).into_response();
    };
    respond(&state, action.prompt).await
}

async fn respond(state: &AppState, message: &str) -> Response {
    match state.controller.send(message).await {
        SendOutcome::Replied { user, assistant } => Json(serde_json::json!({
            "user": user,
            "assistant": assistant,
        }))
        .into_response(),
        SendOutcome::Empty => {
            let err = serde_json::json!({"error": "message must not be empty"});
            (StatusCode::BAD_REQUEST, Json(err)).into_response()
        }
        SendOutcome::Busy => {
            let err = serde_json::json!({"error": "a reply is already in flight"});
            (StatusCode::CONFLICT, Json(err)).into_response()
        }
    }
}
