use crate::network::NetworkBoundary;
use crate::protocol::{decode_client_message, encode_server_message, ClientMessage, ServerMessage};
use crate::runtime::{GameRuntime, RuntimeConfig, RuntimeIo};
use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;

pub async fn handle_socket(
    socket: WebSocket,
    network: Arc<dyn NetworkBoundary>,
    config: RuntimeConfig,
) {
    let (mut sender, mut receiver) = socket.split();
    let (mut runtime, io) = GameRuntime::new(network, config);
    let RuntimeIo {
        mut snapshots,
        mut game_over,
    } = io;
    let player_id = runtime.player_id().to_string();
    tracing::info!(player_id = %player_id, "session connected");

    let welcome = encode_server_message(&ServerMessage::Welcome {
        player_id: &player_id,
    });
    let send_task = tokio::spawn(async move {
        match welcome {
            Ok(payload) => {
                if sender.send(Message::Text(payload)).await.is_err() {
                    return;
                }
            }
            Err(error) => tracing::warn!(?error, "failed to encode welcome"),
        }

        loop {
            let payload = tokio::select! {
                biased;
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    let snapshot = snapshots.borrow_and_update().clone();
                    encode_server_message(&ServerMessage::Snapshot(&snapshot))
                }
                Some(over) = game_over.recv() => {
                    encode_server_message(&ServerMessage::GameOver { score: over.score })
                }
            };
            let payload = match payload {
                Ok(payload) => payload,
                Err(error) => {
                    tracing::warn!(?error, "failed to encode server message");
                    continue;
                }
            };
            if sender.send(Message::Text(payload)).await.is_err() {
                return;
            }
        }
    });

    while let Some(result) = receiver.next().await {
        let Ok(message) = result else { break };
        match message {
            Message::Text(text) => handle_text_message(&mut runtime, &text).await,
            Message::Close(_) => break,
            _ => {}
        }
    }

    let was_running = runtime.is_running();
    runtime.shutdown();
    send_task.abort();
    tracing::info!(player_id = %player_id, was_running, "session closed");
}

async fn handle_text_message(runtime: &mut GameRuntime, text: &str) {
    let Some(message) = decode_client_message(text) else {
        tracing::warn!(player_id = runtime.player_id(), "ignoring malformed client message");
        return;
    };
    match message {
        ClientMessage::Start { nickname, settings } => {
            runtime.start(nickname, settings).await;
        }
        ClientMessage::Input { pointer, boost } => {
            runtime
                .update_input(pointer, boost.unwrap_or(false))
                .await;
        }
        ClientMessage::DropPoison => {
            if !runtime.drop_poison().await {
                tracing::debug!(player_id = runtime.player_id(), "poison drop refused");
            }
        }
        ClientMessage::Reset => runtime.reset().await,
    }
}
