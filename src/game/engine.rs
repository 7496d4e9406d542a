use super::ai::retarget;
use super::collision::{is_lethal_collision, poison_hit_index, touches_food};
use super::constants::{
    MAX_FOOD_ITEMS, MIN_SNAKE_LENGTH_TO_DROP_POISON, POISON_PELLET_RADIUS,
    POISON_PELLET_SEGMENT_COST,
};
use super::input::{parse_pointer, pointer_world_position, viewport_offset_for, InputState};
use super::leaderboard::compute_leaderboard;
use super::minimap::build_minimap;
use super::settings::GameSettings;
use super::snake::{
    advance, create_ai_body, create_player_body, drop_tail_segments, MotionTuning, Steering,
};
use super::snapshot::{GameOver, Phase, Snapshot};
use super::spawner::{corpse_points, Spawner};
use super::types::{Body, BodyRef, Food, LeaderboardEntry, Point, PoisonPellet, RemoteBody};
use super::world::World;
use rand::rngs::StdRng;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Advanced,
    GameOver(GameOver),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetargetOutcome {
    Retargeted,
    /// The run this retarget was scheduled for has ended.
    Stale,
    BodyGone,
}

/// Authoritative state of one client's simulation.
#[derive(Debug)]
pub struct Engine {
    player_id: String,
    phase: Phase,
    generation: u64,
    settings: GameSettings,
    tuning: MotionTuning,
    world: World,
    player: Option<Body>,
    ai_bodies: Vec<Body>,
    remote_bodies: Vec<RemoteBody>,
    food: Vec<Food>,
    poison: Vec<PoisonPellet>,
    input: InputState,
    viewport_offset: Point,
    leaderboard: Vec<LeaderboardEntry>,
    tick_count: u64,
    spawner: Spawner,
    rng: StdRng,
}

impl Engine {
    pub fn new(player_id: String, rng: StdRng) -> Self {
        let settings = GameSettings::default();
        Self {
            player_id,
            phase: Phase::NotRunning,
            generation: 0,
            settings,
            tuning: MotionTuning::from_settings(&settings),
            world: World::new(&settings),
            player: None,
            ai_bodies: Vec::new(),
            remote_bodies: Vec::new(),
            food: Vec::new(),
            poison: Vec::new(),
            input: InputState::default(),
            viewport_offset: Point::default(),
            leaderboard: Vec::new(),
            tick_count: 0,
            spawner: Spawner::new(),
            rng,
        }
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn player(&self) -> Option<&Body> {
        self.player.as_ref()
    }

    pub fn ai_body_ids(&self) -> Vec<String> {
        self.ai_bodies.iter().map(|body| body.id.clone()).collect()
    }

    /// Builds a fresh run from `settings` and returns its generation. Anything
    /// scheduled for an earlier generation becomes stale.
    pub fn start(&mut self, nickname: String, settings: GameSettings) -> u64 {
        let settings = settings.sanitized();
        self.generation += 1;
        self.settings = settings;
        self.tuning = MotionTuning::from_settings(&settings);
        self.world = World::new(&settings);

        let player = create_player_body(self.player_id.clone(), nickname, self.world.center);
        self.viewport_offset = player
            .head()
            .map(viewport_offset_for)
            .unwrap_or_default();
        self.player = Some(player);

        self.ai_bodies.clear();
        for index in 0..settings.ai_snake_count {
            let id = format!("ai-{}-{}", self.generation, index);
            let body = create_ai_body(&mut self.rng, id, &self.world);
            self.ai_bodies.push(body);
        }

        self.food = self.spawner.spawn_food(
            &mut self.rng,
            MAX_FOOD_ITEMS,
            None,
            self.world.radius,
            self.world.center,
        );
        self.poison.clear();
        self.input = InputState::default();
        self.tick_count = 0;
        self.leaderboard = compute_leaderboard(&self.merged_bodies());
        self.phase = Phase::Running;

        tracing::info!(
            generation = self.generation,
            world_radius = self.world.radius,
            ai_count = self.ai_bodies.len(),
            shrinking = settings.shrinking_world_enabled,
            "run started"
        );
        self.generation
    }

    /// Back to `NotRunning`, dropping the run's state.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::NotRunning;
        self.player = None;
        self.ai_bodies.clear();
        self.remote_bodies.clear();
        self.food.clear();
        self.poison.clear();
        self.leaderboard.clear();
        self.input = InputState::default();
        self.tick_count = 0;
    }

    pub fn set_input(&mut self, pointer: Option<Point>, boost: bool) {
        if let Some(pointer) = pointer.and_then(parse_pointer) {
            self.input.pointer = pointer;
        }
        self.input.boost = boost;
    }

    /// Replaces the mirrored bodies. Our own entry is never mirrored back.
    pub fn set_remote_bodies(&mut self, remote_bodies: Vec<RemoteBody>) {
        let own_id = self.player_id.as_str();
        self.remote_bodies = remote_bodies
            .into_iter()
            .filter(|body| body.id != own_id)
            .collect();
    }

    /// Spends a tail segment to leave a poison pellet behind. The pellet is only
    /// placed when it fits inside the playable area; the segment is spent either way.
    pub fn drop_poison(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        let Some(dropped) = drop_tail_segments(
            player,
            MIN_SNAKE_LENGTH_TO_DROP_POISON,
            POISON_PELLET_SEGMENT_COST,
        ) else {
            return false;
        };
        if self.world.contains_disc(dropped, POISON_PELLET_RADIUS) {
            let pellet = self.spawner.spawn_poison(dropped);
            tracing::debug!(pellet_id = %pellet.id, "poison dropped");
            self.poison.push(pellet);
        }
        true
    }

    /// Rewrites one bot's `target_direction`. Called from that bot's own timer.
    pub fn apply_retarget(&mut self, body_id: &str, generation: u64) -> RetargetOutcome {
        if generation != self.generation || self.phase != Phase::Running {
            return RetargetOutcome::Stale;
        }
        let Some(player) = self.player.as_ref() else {
            return RetargetOutcome::Stale;
        };
        let Some(body) = self.ai_bodies.iter_mut().find(|body| body.id == body_id) else {
            return RetargetOutcome::BodyGone;
        };
        let Some(head) = body.head() else {
            return RetargetOutcome::BodyGone;
        };
        if let Some(target) = retarget(head, player, &self.world, self.settings.snake_speed) {
            body.target_direction = Some(target);
        }
        RetargetOutcome::Retargeted
    }

    pub fn tick(&mut self, elapsed_ms: f64) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }
        let Some(player) = self.player.as_ref() else {
            return TickOutcome::Idle;
        };

        self.world.shrink(elapsed_ms);

        let target = pointer_world_position(self.input.pointer, self.viewport_offset);
        let mut player = advance(
            player,
            Steering::Pointer {
                target,
                boost: self.input.boost,
            },
            &self.tuning,
        );
        if let Some(head) = player.head() {
            self.viewport_offset = viewport_offset_for(head);
            self.food.retain(|food| {
                if touches_food(head, food) {
                    player.eat(food);
                    false
                } else {
                    true
                }
            });
        }
        self.player = Some(player);

        self.advance_ai_bodies();

        if self.food.len() < MAX_FOOD_ITEMS {
            let fresh = self.spawner.spawn_food(
                &mut self.rng,
                1,
                None,
                self.world.radius,
                self.world.center,
            );
            self.food.extend(fresh);
        }

        // Every check below reads the same merged state, before any removal.
        let (player_dead, ai_dead) = {
            let bodies = self.merged_bodies();
            let player_dead = self
                .player
                .as_ref()
                .is_some_and(|player| is_lethal_collision(player, &bodies, &self.world));
            let ai_dead: Vec<bool> = self
                .ai_bodies
                .iter()
                .map(|body| is_lethal_collision(body, &bodies, &self.world))
                .collect();
            (player_dead, ai_dead)
        };

        if player_dead {
            return self.finish_run();
        }

        self.resolve_ai_deaths(ai_dead);
        self.leaderboard = compute_leaderboard(&self.merged_bodies());
        self.tick_count += 1;
        TickOutcome::Advanced
    }

    pub fn snapshot(&self) -> Snapshot {
        let others: Vec<BodyRef<'_>> = self
            .ai_bodies
            .iter()
            .map(BodyRef::Local)
            .chain(self.remote_bodies.iter().map(BodyRef::Remote))
            .collect();
        Snapshot {
            tick: self.tick_count,
            phase: self.phase,
            player_id: self.player_id.clone(),
            player: self.player.clone(),
            ai_bodies: self.ai_bodies.clone(),
            remote_bodies: self.remote_bodies.clone(),
            food: self.food.clone(),
            poison: self.poison.clone(),
            world: self.world,
            viewport_offset: self.viewport_offset,
            leaderboard: self.leaderboard.clone(),
            minimap: build_minimap(
                &self.world,
                self.player.as_ref().and_then(Body::head),
                &others,
            ),
        }
    }

    fn merged_bodies(&self) -> Vec<BodyRef<'_>> {
        self.player
            .iter()
            .chain(self.ai_bodies.iter())
            .map(BodyRef::Local)
            .chain(self.remote_bodies.iter().map(BodyRef::Remote))
            .collect()
    }

    /// Moves every bot and lets it eat. A pellet goes to the first bot that reaches it.
    fn advance_ai_bodies(&mut self) {
        let mut consumed: HashSet<String> = HashSet::new();
        let mut moved_bodies = Vec::with_capacity(self.ai_bodies.len());
        for body in &self.ai_bodies {
            let mut moved = advance(body, Steering::Autopilot, &self.tuning);
            if let Some(head) = moved.head() {
                for food in &self.food {
                    if consumed.contains(&food.id) || !touches_food(head, food) {
                        continue;
                    }
                    moved.eat(food);
                    consumed.insert(food.id.clone());
                }
            }
            moved_bodies.push(moved);
        }
        self.ai_bodies = moved_bodies;
        if !consumed.is_empty() {
            self.food.retain(|food| !consumed.contains(&food.id));
        }
    }

    fn resolve_ai_deaths(&mut self, ai_dead: Vec<bool>) {
        let bodies = std::mem::take(&mut self.ai_bodies);
        let mut survivors = Vec::with_capacity(bodies.len());
        for (body, collided) in bodies.into_iter().zip(ai_dead) {
            let Some(head) = body.head() else {
                continue;
            };
            let mut dead = collided;
            if !dead {
                if let Some(index) = poison_hit_index(head, &self.poison) {
                    self.poison.remove(index);
                    dead = true;
                }
            }
            if dead {
                tracing::debug!(body_id = %body.id, score = body.score, "bot died");
                self.spawn_corpse(&body);
            } else {
                survivors.push(body);
            }
        }
        self.ai_bodies = survivors;
    }

    fn finish_run(&mut self) -> TickOutcome {
        let Some(player) = self.player.clone() else {
            return TickOutcome::Idle;
        };
        self.spawn_corpse(&player);
        self.phase = Phase::GameOver;
        tracing::info!(score = player.score, generation = self.generation, "game over");
        TickOutcome::GameOver(GameOver {
            score: player.score,
        })
    }

    fn spawn_corpse(&mut self, body: &Body) {
        let points = corpse_points(&body.segments);
        let food = self.spawner.spawn_food(
            &mut self.rng,
            0,
            Some(&points),
            self.world.radius,
            self.world.center,
        );
        self.food.extend(food);
    }
}
