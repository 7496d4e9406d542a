use super::minimap::Minimap;
use super::types::{Body, Food, LeaderboardEntry, Point, PoisonPellet, RemoteBody};
use super::world::World;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    NotRunning,
    Running,
    GameOver,
}

/// Completed state of one tick, handed to the render and network boundaries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub tick: u64,
    pub phase: Phase,
    pub player_id: String,
    pub player: Option<Body>,
    pub ai_bodies: Vec<Body>,
    pub remote_bodies: Vec<RemoteBody>,
    pub food: Vec<Food>,
    pub poison: Vec<PoisonPellet>,
    pub world: World,
    pub viewport_offset: Point,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub minimap: Minimap,
}

/// Terminal signal of a run. Emitted once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOver {
    pub score: u32,
}
