use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use tokio::select;

use crate::models::quote::BoardUpdate;
use crate::state::AppState;

pub async fn ws_quotes(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    // Push the current board and summary immediately so a new client
    // renders without waiting for the next mutation pass.
    let mut initial: Vec<BoardUpdate> = state
        .quotes()
        .await
        .into_iter()
        .map(BoardUpdate::Quote)
        .collect();
    initial.push(BoardUpdate::Summary(state.summary().await));
    for update in initial {
        let Ok(txt) = serde_json::to_string(&update) else {
            continue;
        };
        if socket.send(Message::Text(txt.into())).await.is_err() {
            return;
        }
    }

    let mut rx = state.subscribe();

    loop {
        select! {
            // Board updates fan out to the socket as they land.
            msg = rx.recv() => {
                match msg {
                    Ok(update) => {
                        let Ok(txt) = serde_json::to_string(&update) else { continue };
                        if socket.send(Message::Text(txt.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => {
                        // A slow client only loses intermediate ticks.
                        continue;
                    }
                    Err(_) => break,
                }
            }
            // Nothing meaningful arrives from the browser; drain it and
            // watch for the close frame.
            incoming = socket.recv() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => continue,
                    Some(Err(_)) => break,
                }
            }
        }
    }
}
