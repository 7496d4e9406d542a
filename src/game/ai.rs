//! Bot targeting policy.
//!
//! Bots think slowly and react fast: a retarget only rewrites `target_direction`
//! every couple of seconds, and the per-tick steering integrates toward it.

use super::constants::{
    AI_INTERVAL_JITTER, AI_LEAD_TICKS, AI_RETREAT_RADIUS_RATIO, AI_TARGET_UPDATE_INTERVAL_MS,
};
use super::math::{add, distance, scale, sub};
use super::types::{Body, Point};
use super::world::World;
use rand::Rng;
use std::time::Duration;

/// New target direction for a bot whose head is at `ai_head`.
///
/// Near the border the bot heads back to the centre. Otherwise it aims at the
/// player's head led along the player's heading, bounded by `snake_speed * 40`.
pub fn retarget(ai_head: Point, player: &Body, world: &World, snake_speed: f64) -> Option<Point> {
    if world.distance_from_center(ai_head) > world.radius * AI_RETREAT_RADIUS_RATIO {
        return Some(sub(world.center, ai_head));
    }
    let player_head = player.head()?;
    let lead = distance(ai_head, player_head).min(snake_speed * AI_LEAD_TICKS);
    let aim = add(player_head, scale(player.direction, lead));
    Some(sub(aim, ai_head))
}

/// Delay before a bot's first retarget, spread over one interval.
pub fn initial_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_secs_f64(rng.gen::<f64>() * AI_TARGET_UPDATE_INTERVAL_MS / 1000.0)
}

/// Interval between retargets, jittered so bots drift out of sync.
pub fn jittered_interval<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    let factor = 1.0 - AI_INTERVAL_JITTER + rng.gen::<f64>() * AI_INTERVAL_JITTER * 2.0;
    Duration::from_secs_f64(AI_TARGET_UPDATE_INTERVAL_MS * factor / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::math::{angle_of, normalize};
    use crate::game::settings::GameSettings;
    use crate::game::snake::create_player_body;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn world() -> World {
        World::new(&GameSettings::default())
    }

    #[test]
    fn bot_near_edge_retreats_to_center() {
        let world = world();
        let player = create_player_body("p".into(), "P".into(), Point::new(1400.0, 800.0));
        let ai_head = Point::new(800.0 + 700.0, 800.0);
        let target = retarget(ai_head, &player, &world, 2.0).unwrap();
        let expected = normalize(sub(world.center, ai_head));
        assert!((angle_of(target) - angle_of(expected)).abs() < 1e-12);
    }

    #[test]
    fn bot_leads_player_heading() {
        let world = world();
        let player = create_player_body("p".into(), "P".into(), Point::new(800.0, 800.0));
        let ai_head = Point::new(800.0, 500.0);
        let target = retarget(ai_head, &player, &world, 2.0).unwrap();
        // Lead capped at 2 * 40 = 80 along +x.
        assert!((target.x - 80.0).abs() < 1e-9);
        assert!((target.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn lead_is_bounded_by_distance_to_player() {
        let world = world();
        let player = create_player_body("p".into(), "P".into(), Point::new(800.0, 800.0));
        let ai_head = Point::new(800.0, 790.0);
        let target = retarget(ai_head, &player, &world, 2.0).unwrap();
        assert!((target.x - 10.0).abs() < 1e-9);
        assert!((target.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn intervals_stay_within_jitter() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..1_000 {
            let interval = jittered_interval(&mut rng).as_secs_f64();
            assert!((1.5..=2.5).contains(&interval));
            let delay = initial_delay(&mut rng).as_secs_f64();
            assert!((0.0..2.0).contains(&delay));
        }
    }
}
