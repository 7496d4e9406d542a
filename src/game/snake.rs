use super::constants::{
    AI_COLORS, AI_SPAWN_MIN_RADIUS_RATIO, BOOST_FACTOR, INITIAL_SNAKE_LENGTH,
    PLAYER_COLOR, PLAYER_SNAKE_TURN_SPEED, SEGMENT_SIZE, SNAKE_TURN_SPEED,
};
use super::math::{add, direction_from_angle, distance, scale, steer_toward, sub};
use super::settings::GameSettings;
use super::types::{Body, Point};
use super::world::World;
use crate::shared::names::random_bot_nickname;
use rand::Rng;
use std::f64::consts::TAU;

/// Speed and turn-rate tuning. The player turns faster than the bots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTuning {
    pub base_speed: f64,
    pub boost_factor: f64,
    pub player_turn_rate: f64,
    pub ai_turn_rate: f64,
}

impl MotionTuning {
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            base_speed: settings.snake_speed,
            boost_factor: BOOST_FACTOR,
            player_turn_rate: PLAYER_SNAKE_TURN_SPEED,
            ai_turn_rate: SNAKE_TURN_SPEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steering {
    /// Follow the pointer's world position.
    Pointer { target: Point, boost: bool },
    /// Follow the body's own `target_direction`.
    Autopilot,
}

pub fn create_player_body(id: String, nickname: String, center: Point) -> Body {
    let segments = (0..INITIAL_SNAKE_LENGTH)
        .map(|index| Point {
            x: center.x - index as f64 * SEGMENT_SIZE,
            y: center.y,
        })
        .collect();
    Body {
        id,
        nickname,
        segments,
        color: PLAYER_COLOR.to_string(),
        is_player: true,
        direction: Point { x: 1.0, y: 0.0 },
        target_direction: None,
        pending_growth: 0,
        score: 0,
    }
}

/// Places a bot in the outer annulus of the world, laid out radially with a heading
/// chosen independently of its placement.
pub fn create_ai_body<R: Rng>(rng: &mut R, id: String, world: &World) -> Body {
    let angle = rng.gen::<f64>() * TAU;
    let min_spawn_radius = world.radius * AI_SPAWN_MIN_RADIUS_RATIO;
    let max_spawn_radius = (world.radius - SEGMENT_SIZE * INITIAL_SNAKE_LENGTH as f64)
        .max(min_spawn_radius);
    let spawn_radius = min_spawn_radius + (max_spawn_radius - min_spawn_radius) * rng.gen::<f64>();
    let outward = direction_from_angle(angle);
    let start = add(world.center, scale(outward, spawn_radius));
    let segments = (0..INITIAL_SNAKE_LENGTH)
        .map(|index| sub(start, scale(outward, index as f64 * SEGMENT_SIZE)))
        .collect();

    let heading = direction_from_angle(rng.gen::<f64>() * TAU);
    Body {
        id,
        nickname: random_bot_nickname(rng),
        segments,
        color: AI_COLORS[rng.gen_range(0..AI_COLORS.len())].to_string(),
        is_player: false,
        direction: heading,
        target_direction: Some(heading),
        pending_growth: 0,
        score: 0,
    }
}

/// Moves a body one tick and returns the result; the input is left untouched.
pub fn advance(body: &Body, steering: Steering, tuning: &MotionTuning) -> Body {
    let mut next = body.clone();
    let Some(old_head) = body.head() else {
        return next;
    };

    let (direction, speed) = match steering {
        Steering::Pointer { target, boost } => {
            let speed = if boost {
                tuning.base_speed * tuning.boost_factor
            } else {
                tuning.base_speed
            };
            let offset = sub(target, old_head);
            let dist = distance(target, old_head);
            let direction = if dist < SEGMENT_SIZE / 2.0 {
                body.direction
            } else {
                steer_toward(
                    body.direction,
                    scale(offset, 1.0 / dist),
                    tuning.player_turn_rate,
                )
            };
            (direction, speed)
        }
        Steering::Autopilot => {
            let target = body.target_direction.unwrap_or(body.direction);
            (
                steer_toward(body.direction, target, tuning.ai_turn_rate),
                tuning.base_speed,
            )
        }
    };

    let new_head = add(old_head, scale(direction, speed));
    // Tail first so each segment reads its predecessor's previous position.
    for index in (1..next.segments.len()).rev() {
        next.segments[index] = next.segments[index - 1];
    }
    next.segments[0] = new_head;

    if next.pending_growth > 0 {
        let tail = next.tail().unwrap_or(old_head);
        let growth = next.pending_growth as usize;
        next.segments.extend(std::iter::repeat(tail).take(growth));
        next.pending_growth = 0;
    }

    next.direction = direction;
    next
}

/// Removes `cost` tail segments when the body is longer than `min_length`, returning
/// the position of the segment that marks the new drop point.
pub fn drop_tail_segments(body: &mut Body, min_length: usize, cost: usize) -> Option<Point> {
    if body.segments.len() <= min_length || cost == 0 {
        return None;
    }
    let keep = body.segments.len().saturating_sub(cost);
    let dropped = body.segments.get(keep).copied();
    body.segments.truncate(keep);
    dropped
}
