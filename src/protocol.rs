use crate::game::settings::GameSettings;
use crate::game::snapshot::Snapshot;
use crate::game::types::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
  #[serde(rename = "start")]
  Start {
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    settings: Option<GameSettings>,
  },
  #[serde(rename = "input")]
  Input {
    #[serde(default)]
    pointer: Option<Point>,
    #[serde(default)]
    boost: Option<bool>,
  },
  #[serde(rename = "dropPoison")]
  DropPoison,
  #[serde(rename = "reset")]
  Reset,
}

/// Anything that does not parse as a known message is `None`.
pub fn decode_client_message(text: &str) -> Option<ClientMessage> {
  serde_json::from_str(text).ok()
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ServerMessage<'a> {
  #[serde(rename = "welcome")]
  Welcome {
    #[serde(rename = "playerId")]
    player_id: &'a str,
  },
  #[serde(rename = "snapshot")]
  Snapshot(&'a Snapshot),
  #[serde(rename = "gameOver")]
  GameOver { score: u32 },
}

pub fn encode_server_message(message: &ServerMessage<'_>) -> serde_json::Result<String> {
  serde_json::to_string(message)
}
