use super::constants::{MIN_WORLD_RADIUS, SHRINK_DURATION_SECS, WORLD_BORDER_THICKNESS};
use super::math::distance;
use super::settings::GameSettings;
use super::types::Point;
use serde::Serialize;

/// The circular arena. The world is inscribed in the square `[0, 2R]²` of its
/// initial radius, so the centre sits at `(R, R)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct World {
    pub center: Point,
    pub radius: f64,
    pub total_radius: f64,
    pub border_thickness: f64,
    pub shrink_rate_per_second: f64,
}

impl World {
    pub fn new(settings: &GameSettings) -> Self {
        let radius = settings.world_radius;
        // Derived once so a pause never stretches the remaining shrink.
        let shrink_rate_per_second = if settings.shrinking_world_enabled {
            ((radius - MIN_WORLD_RADIUS) / SHRINK_DURATION_SECS).max(0.0)
        } else {
            0.0
        };
        Self {
            center: Point {
                x: radius,
                y: radius,
            },
            radius,
            total_radius: radius,
            border_thickness: WORLD_BORDER_THICKNESS,
            shrink_rate_per_second,
        }
    }

    pub fn shrink(&mut self, elapsed_ms: f64) {
        if self.shrink_rate_per_second <= 0.0 || self.radius <= MIN_WORLD_RADIUS {
            return;
        }
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return;
        }
        let amount = self.shrink_rate_per_second * (elapsed_ms / 1000.0);
        self.radius = (self.radius - amount).max(MIN_WORLD_RADIUS);
    }

    /// Radius inside the border, where bodies and pickups may live.
    pub fn playable_radius(&self) -> f64 {
        self.radius - self.border_thickness
    }

    pub fn distance_from_center(&self, point: Point) -> f64 {
        distance(point, self.center)
    }

    /// Whether a disc of `radius` at `point` lies strictly inside the playable area.
    pub fn contains_disc(&self, point: Point, radius: f64) -> bool {
        self.distance_from_center(point) + radius < self.playable_radius()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shrinking(radius: f64) -> World {
        World::new(&GameSettings {
            world_radius: radius,
            shrinking_world_enabled: true,
            ..GameSettings::default()
        })
    }

    #[test]
    fn shrink_rate_spans_twenty_seconds() {
        let world = shrinking(800.0);
        assert!((world.shrink_rate_per_second - 32.5).abs() < 1e-12);
        assert_eq!(world.center, Point::new(800.0, 800.0));
    }

    #[test]
    fn one_second_of_ticks_removes_one_rate() {
        let mut world = shrinking(800.0);
        for _ in 0..50 {
            world.shrink(20.0);
        }
        assert!((world.radius - 767.5).abs() < 1e-9);
        assert_eq!(world.total_radius, 800.0);
    }

    #[test]
    fn shrink_clamps_at_minimum() {
        let mut world = shrinking(800.0);
        world.shrink(60_000.0);
        assert_eq!(world.radius, MIN_WORLD_RADIUS);
        world.shrink(1_000.0);
        assert_eq!(world.radius, MIN_WORLD_RADIUS);
    }

    #[test]
    fn disabled_shrink_keeps_radius() {
        let mut world = World::new(&GameSettings::default());
        world.shrink(5_000.0);
        assert_eq!(world.radius, 800.0);
        assert_eq!(world.shrink_rate_per_second, 0.0);
    }
}
