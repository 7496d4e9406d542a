use super::constants::{
    FOOD_COLORS, FOOD_RADIUS, FOOD_SPAWN_MARGIN, LARGE_FOOD_COLOR, LARGE_FOOD_PROBABILITY,
    LARGE_FOOD_RADIUS_MULTIPLIER, LARGE_FOOD_VALUE, NORMAL_FOOD_VALUE, POISON_PELLET_COLOR,
    POISON_PELLET_RADIUS, POISON_PELLET_RING_COLOR, WORLD_BORDER_THICKNESS,
};
use super::types::{Food, PoisonPellet, Point};
use rand::Rng;
use std::f64::consts::TAU;

/// Keeps the largest pellet clear of the border.
pub fn spawn_padding() -> f64 {
    FOOD_RADIUS * LARGE_FOOD_RADIUS_MULTIPLIER + WORLD_BORDER_THICKNESS + FOOD_SPAWN_MARGIN
}

/// Every other segment of a dead body, starting with the head.
pub fn corpse_points(segments: &[Point]) -> Vec<Point> {
    segments.iter().step_by(2).copied().collect()
}

#[derive(Debug, Default)]
pub struct Spawner {
    next_food_id: u64,
    next_poison_id: u64,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// With `explicit_points`, one normal-tier item per point. Otherwise `count` items
    /// scattered uniformly by area over the disc of `radius - padding`.
    pub fn spawn_food<R: Rng>(
        &mut self,
        rng: &mut R,
        count: usize,
        explicit_points: Option<&[Point]>,
        radius: f64,
        center: Point,
    ) -> Vec<Food> {
        if let Some(points) = explicit_points {
            return points
                .iter()
                .map(|point| self.make_food(rng, *point, false))
                .collect();
        }

        let max_radius = radius - spawn_padding();
        (0..count)
            .map(|_| {
                let angle = rng.gen::<f64>() * TAU;
                let distance = if max_radius > 0.0 {
                    max_radius * rng.gen::<f64>().sqrt()
                } else {
                    0.0
                };
                let position = Point {
                    x: center.x + distance * angle.cos(),
                    y: center.y + distance * angle.sin(),
                };
                let large = rng.gen_bool(LARGE_FOOD_PROBABILITY);
                self.make_food(rng, position, large)
            })
            .collect()
    }

    pub fn spawn_poison(&mut self, position: Point) -> PoisonPellet {
        let id = self.next_poison_id;
        self.next_poison_id += 1;
        PoisonPellet {
            id: format!("poison-{id}"),
            position,
            radius: POISON_PELLET_RADIUS,
            color: POISON_PELLET_COLOR.to_string(),
            ring_color: POISON_PELLET_RING_COLOR.to_string(),
        }
    }

    fn make_food<R: Rng>(&mut self, rng: &mut R, position: Point, large: bool) -> Food {
        let id = self.next_food_id;
        self.next_food_id += 1;
        let (color, value) = if large {
            (LARGE_FOOD_COLOR, LARGE_FOOD_VALUE)
        } else {
            (FOOD_COLORS[rng.gen_range(0..FOOD_COLORS.len())], NORMAL_FOOD_VALUE)
        };
        Food {
            id: format!("food-{id}"),
            position,
            color: color.to_string(),
            value,
        }
    }
}
