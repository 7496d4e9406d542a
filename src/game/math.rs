use super::types::Point;
use std::f64::consts::{PI, TAU};

const DEGENERATE_LENGTH: f64 = 1e-9;

pub fn add(a: Point, b: Point) -> Point {
  Point {
    x: a.x + b.x,
    y: a.y + b.y,
  }
}

pub fn sub(a: Point, b: Point) -> Point {
  Point {
    x: a.x - b.x,
    y: a.y - b.y,
  }
}

pub fn scale(point: Point, factor: f64) -> Point {
  Point {
    x: point.x * factor,
    y: point.y * factor,
  }
}

pub fn length(point: Point) -> f64 {
  point.x.hypot(point.y)
}

pub fn distance(a: Point, b: Point) -> f64 {
  length(sub(a, b))
}

pub fn normalize(point: Point) -> Point {
  let len = length(point);
  if !len.is_finite() || len < DEGENERATE_LENGTH {
    return Point { x: 0.0, y: 0.0 };
  }
  Point {
    x: point.x / len,
    y: point.y / len,
  }
}

pub fn angle_of(direction: Point) -> f64 {
  direction.y.atan2(direction.x)
}

pub fn direction_from_angle(angle: f64) -> Point {
  Point {
    x: angle.cos(),
    y: angle.sin(),
  }
}

/// Signed angle that turns `from` onto `to`, wrapped to (-PI, PI].
pub fn normalize_angle_delta(from: f64, to: f64) -> f64 {
  let mut delta = (to - from) % TAU;
  if delta > PI {
    delta -= TAU;
  } else if delta <= -PI {
    delta += TAU;
  }
  delta
}

/// Turns `current` toward `target` by at most `max_turn` radians and returns a unit
/// direction. Snaps onto the target once it is within reach. A zero-length target
/// leaves the heading unchanged.
pub fn steer_toward(current: Point, target: Point, max_turn: f64) -> Point {
  if length(target) < DEGENERATE_LENGTH || !target.x.is_finite() || !target.y.is_finite() {
    return if length(current) < DEGENERATE_LENGTH {
      current
    } else {
      normalize(current)
    };
  }
  if length(current) < DEGENERATE_LENGTH {
    return normalize(target);
  }

  let current_angle = angle_of(current);
  let target_angle = angle_of(target);
  let delta = normalize_angle_delta(current_angle, target_angle);
  let max_turn = max_turn.max(0.0);
  if delta.abs() <= max_turn {
    return direction_from_angle(target_angle);
  }
  direction_from_angle(current_angle + delta.signum() * max_turn)
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  fn heading_change(before: Point, after: Point) -> f64 {
    normalize_angle_delta(angle_of(before), angle_of(after)).abs()
  }

  #[test]
  fn angle_delta_takes_the_short_way_across_pi() {
    let from = PI - 0.1;
    let to = -PI + 0.1;
    let delta = normalize_angle_delta(from, to);
    assert!((delta - 0.2).abs() < 1e-12);
    assert!((normalize_angle_delta(to, from) + 0.2).abs() < 1e-12);
  }

  #[test]
  fn angle_delta_of_exactly_pi_is_positive() {
    assert!((normalize_angle_delta(0.0, PI) - PI).abs() < 1e-12);
    assert!((normalize_angle_delta(0.0, -PI) - PI).abs() < 1e-12);
  }

  #[test]
  fn steer_snaps_when_target_within_turn_rate() {
    let current = direction_from_angle(0.0);
    let target = direction_from_angle(0.05);
    let steered = steer_toward(current, target, 0.1);
    assert!((angle_of(steered) - 0.05).abs() < 1e-12);
  }

  #[test]
  fn steer_clamps_to_turn_rate() {
    let steered = steer_toward(Point::new(1.0, 0.0), Point::new(0.0, 1.0), 0.15);
    assert!((angle_of(steered) - 0.15).abs() < 1e-12);
    assert!((length(steered) - 1.0).abs() < 1e-12);
  }

  #[test]
  fn steer_holds_heading_for_zero_target() {
    let steered = steer_toward(Point::new(0.0, -1.0), Point::new(0.0, 0.0), 0.15);
    assert_eq!(steered, Point::new(0.0, -1.0));
  }

  #[test]
  fn steer_crosses_wraparound_in_the_short_direction() {
    let current = direction_from_angle(PI - 0.05);
    let target = direction_from_angle(-PI + 0.5);
    let steered = steer_toward(current, target, 0.1);
    let expected = normalize_angle_delta(0.0, PI + 0.05);
    assert!(normalize_angle_delta(angle_of(steered), expected).abs() < 1e-9);
  }

  #[test]
  fn normalize_of_zero_is_zero() {
    assert_eq!(normalize(Point::new(0.0, 0.0)), Point::new(0.0, 0.0));
  }

  proptest! {
    #[test]
    fn steer_never_exceeds_max_turn(
      current in -10.0f64..10.0,
      target in -10.0f64..10.0,
      max_turn in 0.0f64..1.0,
    ) {
      let before = direction_from_angle(current);
      let after = steer_toward(before, direction_from_angle(target), max_turn);
      prop_assert!(heading_change(before, after) <= max_turn + 1e-9);
      prop_assert!((length(after) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn angle_delta_is_wrapped(from in -100.0f64..100.0, to in -100.0f64..100.0) {
      let delta = normalize_angle_delta(from, to);
      prop_assert!(delta > -PI - 1e-12 && delta <= PI + 1e-12);
    }
  }
}
