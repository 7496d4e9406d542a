use super::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use super::math::add;
use super::types::Point;

/// Latest input sampled from the player. The pointer is in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    pub pointer: Point,
    pub boost: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer: Point {
                x: VIEWPORT_WIDTH / 2.0,
                y: VIEWPORT_HEIGHT / 2.0,
            },
            boost: false,
        }
    }
}

pub fn parse_pointer(value: Point) -> Option<Point> {
    if !value.x.is_finite() || !value.y.is_finite() {
        return None;
    }
    Some(value)
}

pub fn pointer_world_position(pointer: Point, viewport_offset: Point) -> Point {
    add(pointer, viewport_offset)
}

/// Top-left corner of the viewport when it is centred on `head`.
pub fn viewport_offset_for(head: Point) -> Point {
    Point {
        x: head.x - VIEWPORT_WIDTH / 2.0,
        y: head.y - VIEWPORT_HEIGHT / 2.0,
    }
}
