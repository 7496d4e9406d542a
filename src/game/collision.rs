use super::constants::SEGMENT_SIZE;
use super::math::distance;
use super::types::{Body, BodyRef, Food, PoisonPellet, Point};
use super::world::World;

const HEAD_RADIUS: f64 = SEGMENT_SIZE / 2.0;

pub fn hits_boundary(head: Point, world: &World) -> bool {
    world.distance_from_center(head) + HEAD_RADIUS > world.radius - world.border_thickness
}

/// Tests `head` against every non-head segment of every body other than `body_id`.
/// Mirrored bodies with missing segments contribute nothing.
pub fn hits_other_body(body_id: &str, head: Point, bodies: &[BodyRef<'_>]) -> bool {
    bodies
        .iter()
        .filter(|other| other.id() != body_id)
        .flat_map(|other| other.segments().iter().skip(1))
        .any(|segment| distance(head, *segment) < SEGMENT_SIZE)
}

/// Boundary and body checks for a body's head. Empty bodies never collide.
pub fn is_lethal_collision(body: &Body, bodies: &[BodyRef<'_>], world: &World) -> bool {
    let Some(head) = body.head() else {
        return false;
    };
    hits_boundary(head, world) || hits_other_body(&body.id, head, bodies)
}

pub fn poison_hit_index(head: Point, pellets: &[PoisonPellet]) -> Option<usize> {
    pellets
        .iter()
        .position(|pellet| distance(head, pellet.position) < HEAD_RADIUS + pellet.radius)
}

pub fn touches_food(head: Point, food: &Food) -> bool {
    distance(head, food.position) < HEAD_RADIUS + food.radius()
}
