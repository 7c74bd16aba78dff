use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::chat::ChatMessage;
use crate::models::quote::now_ms;
use crate::services::{dispatcher, markdown};
use crate::state::AppState;

const EMPTY_QUESTION: &str = "Silakan masukkan pertanyaan terlebih dahulu";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub reply_html: String,
    pub ts_ms: i64,
}

/// Full chat assistant: dispatch, render, and append both sides to the
/// in-memory log.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    let question = req.question.trim().to_string();
    if question.is_empty() {
        return (StatusCode::BAD_REQUEST, EMPTY_QUESTION).into_response();
    }

    let reply = dispatcher::dispatch(&question);
    let reply_html = markdown::render(&reply);
    let ts = now_ms();

    state.push_chat(ChatMessage::user(question, ts)).await;
    state.push_chat(ChatMessage::assistant(reply.clone(), ts)).await;

    (
        StatusCode::OK,
        Json(ChatReply {
            reply,
            reply_html,
            ts_ms: ts,
        }),
    )
        .into_response()
}

pub async fn get_history(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.chat_history().await)
}

/// The four prompts surfaced under the chat input.
pub async fn get_suggestions() -> Json<Vec<&'static str>> {
    Json(dispatcher::suggestions().iter().copied().take(4).collect())
}

#[derive(Debug, Serialize)]
pub struct QuickReply {
    pub reply: String,
    pub note: &'static str,
}

/// Quick-question box: smaller keyword map, no chat-log side effect.
pub async fn post_quick(Json(req): Json<ChatRequest>) -> impl IntoResponse {
    let question = req.question.trim();
    if question.is_empty() {
        return (StatusCode::BAD_REQUEST, EMPTY_QUESTION).into_response();
    }

    (
        StatusCode::OK,
        Json(QuickReply {
            reply: dispatcher::quick_dispatch(question),
            note: "Untuk analisis lebih detail, silakan gunakan AI Assistant",
        }),
    )
        .into_response()
}
