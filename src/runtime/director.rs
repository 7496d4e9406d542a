use crate::game::ai::{initial_delay, jittered_interval};
use crate::game::engine::{Engine, RetargetOutcome};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Owns one retarget timer per bot. Dropping the director cancels every timer.
#[derive(Debug, Default)]
pub struct AiDirector {
    tasks: Vec<JoinHandle<()>>,
}

impl AiDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a timer chain for each bot of `generation`, replacing any earlier chains.
    pub fn launch<R: Rng>(
        &mut self,
        engine: &Arc<Mutex<Engine>>,
        generation: u64,
        body_ids: Vec<String>,
        rng: &mut R,
    ) {
        self.stop();
        for body_id in body_ids {
            let first_delay = initial_delay(rng);
            let timer_rng = StdRng::seed_from_u64(rng.gen());
            let engine = Arc::downgrade(engine);
            self.tasks.push(tokio::spawn(retarget_loop(
                engine,
                generation,
                body_id,
                first_delay,
                timer_rng,
            )));
        }
    }

    pub fn bot_count(&self) -> usize {
        self.tasks.len()
    }

    /// Chains still waiting to fire.
    pub fn active(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    pub fn stop(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        tracing::debug!(active = self.active(), "stopping retarget timers");
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for AiDirector {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn retarget_loop(
    engine: Weak<Mutex<Engine>>,
    generation: u64,
    body_id: String,
    first_delay: Duration,
    mut rng: StdRng,
) {
    let mut delay = first_delay;
    loop {
        tokio::time::sleep(delay).await;
        let Some(engine) = engine.upgrade() else {
            return;
        };
        let outcome = engine.lock().await.apply_retarget(&body_id, generation);
        if outcome != RetargetOutcome::Retargeted {
            tracing::debug!(body_id = %body_id, ?outcome, "retarget chain ended");
            return;
        }
        delay = jittered_interval(&mut rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::settings::GameSettings;

    fn running_engine(ai_snake_count: usize) -> (Arc<Mutex<Engine>>, u64, Vec<String>) {
        let mut engine = Engine::new("player-1".to_string(), StdRng::seed_from_u64(11));
        let generation = engine.start(
            "Tester".to_string(),
            GameSettings {
                ai_snake_count,
                ..GameSettings::default()
            },
        );
        let ids = engine.ai_body_ids();
        (Arc::new(Mutex::new(engine)), generation, ids)
    }

    #[tokio::test(start_paused = true)]
    async fn chains_keep_firing_while_run_is_live() {
        let (engine, generation, ids) = running_engine(3);
        let mut director = AiDirector::new();
        director.launch(&engine, generation, ids, &mut StdRng::seed_from_u64(1));
        tokio::time::sleep(Duration::from_secs(7)).await;
        assert_eq!(director.active(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn chains_end_after_reset() {
        let (engine, generation, ids) = running_engine(2);
        let mut director = AiDirector::new();
        director.launch(&engine, generation, ids, &mut StdRng::seed_from_u64(1));
        engine.lock().await.reset();
        // Every first fire lands within one interval.
        tokio::time::sleep(Duration::from_millis(2_100)).await;
        assert_eq!(director.active(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn chains_end_when_engine_is_dropped() {
        let (engine, generation, ids) = running_engine(2);
        let mut director = AiDirector::new();
        director.launch(&engine, generation, ids, &mut StdRng::seed_from_u64(1));
        drop(engine);
        tokio::time::sleep(Duration::from_millis(2_100)).await;
        assert_eq!(director.active(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn relaunch_replaces_previous_chains() {
        let (engine, generation, ids) = running_engine(4);
        let mut director = AiDirector::new();
        let mut rng = StdRng::seed_from_u64(1);
        director.launch(&engine, generation, ids.clone(), &mut rng);
        director.launch(&engine, generation, ids, &mut rng);
        assert_eq!(director.bot_count(), 4);
        director.stop();
        assert_eq!(director.bot_count(), 0);
    }
}
