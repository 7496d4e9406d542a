use super::constants::{MINI_MAP_AI_DOT_SIZE, MINI_MAP_DISPLAY_RADIUS, MINI_MAP_PLAYER_DOT_SIZE};
use super::types::{BodyRef, Point};
use super::world::World;
use serde::Serialize;

/// Minimap overlay in display pixels, scaled against the world's initial radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Minimap {
    pub display_radius: f64,
    pub playable_diameter: f64,
    pub player: Option<Point>,
    pub others: Vec<Point>,
}

pub fn project_to_minimap(position: Point, world: &World, display_radius: f64, dot_size: f64) -> Point {
    let diameter = display_radius * 2.0;
    let scale = if world.total_radius > 0.0 {
        display_radius / world.total_radius
    } else {
        0.0
    };
    let half_dot = dot_size / 2.0;
    let clamp = |value: f64| value.max(half_dot).min(diameter - half_dot);
    Point {
        x: clamp(display_radius + (position.x - world.center.x) * scale),
        y: clamp(display_radius + (position.y - world.center.y) * scale),
    }
}

pub fn build_minimap(world: &World, player_head: Option<Point>, others: &[BodyRef<'_>]) -> Minimap {
    let display_radius = MINI_MAP_DISPLAY_RADIUS;
    let playable_diameter = if world.total_radius > 0.0 {
        world.radius / world.total_radius * display_radius * 2.0
    } else {
        0.0
    };
    Minimap {
        display_radius,
        playable_diameter,
        player: player_head
            .map(|head| project_to_minimap(head, world, display_radius, MINI_MAP_PLAYER_DOT_SIZE)),
        others: others
            .iter()
            .filter_map(|body| body.head())
            .map(|head| project_to_minimap(head, world, display_radius, MINI_MAP_AI_DOT_SIZE))
            .collect(),
    }
}
