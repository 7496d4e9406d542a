//! Drives one engine in real time.
//!
//! A frame loop runs at display cadence and feeds elapsed time into a
//! [`FixedStep`] clock, so the simulation advances in whole 20 ms ticks no
//! matter how often frames arrive. Bots retarget on their own timers through
//! the [`AiDirector`]. Stopping a run aborts the frame loop, which drops the
//! director and with it every pending timer.

mod director;

pub use director::AiDirector;

use crate::game::clock::FixedStep;
use crate::game::constants::{DEFAULT_FRAME_MS, GAME_TICK_MS, MAX_TICKS_PER_FRAME};
use crate::game::engine::{Engine, TickOutcome};
use crate::game::settings::GameSettings;
use crate::game::snapshot::{GameOver, Snapshot};
use crate::game::types::Point;
use crate::network::NetworkBoundary;
use crate::shared::names::{sanitize_player_name, DEFAULT_PLAYER_NAME};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub frame_interval: Duration,
    pub tick_interval: Duration,
    pub max_ticks_per_frame: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MS),
            tick_interval: Duration::from_millis(GAME_TICK_MS),
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,
        }
    }
}

impl RuntimeConfig {
    pub fn with_frame_interval(frame_interval: Duration) -> Self {
        Self {
            frame_interval: frame_interval.max(Duration::from_millis(1)),
            ..Self::default()
        }
    }
}

/// Receiving ends handed to whoever renders the run.
pub struct RuntimeIo {
    pub snapshots: watch::Receiver<Snapshot>,
    pub game_over: mpsc::UnboundedReceiver<GameOver>,
}

pub struct GameRuntime {
    player_id: String,
    engine: Arc<Mutex<Engine>>,
    network: Arc<dyn NetworkBoundary>,
    snapshots: Arc<watch::Sender<Snapshot>>,
    game_over: mpsc::UnboundedSender<GameOver>,
    config: RuntimeConfig,
    frame_task: Option<JoinHandle<()>>,
    rng: StdRng,
}

impl GameRuntime {
    pub fn new(network: Arc<dyn NetworkBoundary>, config: RuntimeConfig) -> (Self, RuntimeIo) {
        let player_id = format!("player-{}", Uuid::new_v4().simple());
        Self::with_rng(player_id, network, config, StdRng::from_entropy())
    }

    pub fn with_rng(
        player_id: String,
        network: Arc<dyn NetworkBoundary>,
        config: RuntimeConfig,
        mut rng: StdRng,
    ) -> (Self, RuntimeIo) {
        let engine = Engine::new(player_id.clone(), StdRng::seed_from_u64(rng.gen()));
        let (snapshot_tx, snapshot_rx) = watch::channel(engine.snapshot());
        let (game_over_tx, game_over_rx) = mpsc::unbounded_channel();
        let runtime = Self {
            player_id,
            engine: Arc::new(Mutex::new(engine)),
            network,
            snapshots: Arc::new(snapshot_tx),
            game_over: game_over_tx,
            config,
            frame_task: None,
            rng,
        };
        let io = RuntimeIo {
            snapshots: snapshot_rx,
            game_over: game_over_rx,
        };
        (runtime, io)
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn is_running(&self) -> bool {
        self.frame_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Starts a new run, tearing down whatever was running before.
    pub async fn start(&mut self, nickname: Option<String>, settings: Option<GameSettings>) -> u64 {
        self.stop_tasks();
        let nickname = sanitize_player_name(
            nickname.as_deref().unwrap_or_default(),
            DEFAULT_PLAYER_NAME,
        );
        let (generation, body_ids, snapshot) = {
            let mut engine = self.engine.lock().await;
            let generation = engine.start(nickname, settings.unwrap_or_default());
            (generation, engine.ai_body_ids(), engine.snapshot())
        };
        self.snapshots.send_replace(snapshot);

        let mut director = AiDirector::new();
        director.launch(&self.engine, generation, body_ids, &mut self.rng);
        let bots = director.bot_count();
        let frames = FrameLoop {
            engine: Arc::clone(&self.engine),
            network: Arc::clone(&self.network),
            snapshots: Arc::clone(&self.snapshots),
            game_over: self.game_over.clone(),
            config: self.config,
            _director: director,
        };
        self.frame_task = Some(tokio::spawn(frames.run()));
        tracing::info!(player_id = %self.player_id, generation, bots, "session run started");
        generation
    }

    pub async fn update_input(&self, pointer: Option<Point>, boost: bool) {
        self.engine.lock().await.set_input(pointer, boost);
    }

    pub async fn drop_poison(&self) -> bool {
        self.engine.lock().await.drop_poison()
    }

    /// Back to the pre-game state. Publishes one idle snapshot.
    pub async fn reset(&mut self) {
        self.stop_tasks();
        self.network.remove(&self.player_id);
        let snapshot = {
            let mut engine = self.engine.lock().await;
            engine.reset();
            engine.snapshot()
        };
        self.snapshots.send_replace(snapshot);
        tracing::info!(player_id = %self.player_id, "session reset");
    }

    pub fn shutdown(&mut self) {
        self.stop_tasks();
        self.network.remove(&self.player_id);
    }

    fn stop_tasks(&mut self) {
        if let Some(task) = self.frame_task.take() {
            task.abort();
        }
    }
}

impl Drop for GameRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}

struct FrameLoop {
    engine: Arc<Mutex<Engine>>,
    network: Arc<dyn NetworkBoundary>,
    snapshots: Arc<watch::Sender<Snapshot>>,
    game_over: mpsc::UnboundedSender<GameOver>,
    config: RuntimeConfig,
    // Bot timers live exactly as long as this loop.
    _director: AiDirector,
}

impl FrameLoop {
    async fn run(self) {
        let mut clock = FixedStep::new(self.config.tick_interval, self.config.max_ticks_per_frame);
        let tick_ms = clock.step().as_secs_f64() * 1000.0;
        let mut interval = tokio::time::interval(self.config.frame_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_frame = Instant::now();

        loop {
            interval.tick().await;
            let now = Instant::now();
            let due = clock.advance(now.duration_since(last_frame));
            last_frame = now;
            if due == 0 {
                continue;
            }

            let mut engine = self.engine.lock().await;
            let player_id = engine.player_id().to_string();
            engine.set_remote_bodies(self.network.remote_bodies(&player_id));
            for _ in 0..due {
                if let Some(player) = engine.player() {
                    self.network.publish(player);
                }
                match engine.tick(tick_ms) {
                    TickOutcome::Advanced => {}
                    TickOutcome::Idle => return,
                    TickOutcome::GameOver(game_over) => {
                        self.network.remove(&player_id);
                        self.snapshots.send_replace(engine.snapshot());
                        if self.game_over.send(game_over).is_err() {
                            tracing::warn!(player_id = %player_id, "game over dropped, no listener");
                        }
                        return;
                    }
                }
            }
            self.snapshots.send_replace(engine.snapshot());
        }
    }
}

#[cfg(test)]
mod tests;
