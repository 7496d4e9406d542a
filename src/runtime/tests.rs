use super::*;
use crate::game::snapshot::Phase;
use crate::network::SharedRoster;

fn make_runtime(
    player_id: &str,
    roster: &Arc<SharedRoster>,
    seed: u64,
) -> (GameRuntime, RuntimeIo) {
    let network: Arc<dyn NetworkBoundary> = roster.clone();
    GameRuntime::with_rng(
        player_id.to_string(),
        network,
        RuntimeConfig::default(),
        StdRng::seed_from_u64(seed),
    )
}

fn quiet_settings(world_radius: f64) -> GameSettings {
    GameSettings {
        snake_speed: 2.0,
        world_radius,
        ai_snake_count: 0,
        shrinking_world_enabled: false,
    }
}

#[tokio::test(start_paused = true)]
async fn idle_runtime_publishes_nothing() {
    let roster = Arc::new(SharedRoster::new());
    let (runtime, io) = make_runtime("player-a", &roster, 1);
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(!runtime.is_running());
    assert_eq!(io.snapshots.borrow().phase, Phase::NotRunning);
    assert!(roster.is_empty());
}

#[tokio::test(start_paused = true)]
async fn frames_advance_in_fixed_ticks() {
    let roster = Arc::new(SharedRoster::new());
    let (mut runtime, io) = make_runtime("player-a", &roster, 1);
    runtime.start(Some("  Ada ".to_string()), Some(quiet_settings(800.0))).await;
    assert!(runtime.is_running());

    tokio::time::sleep(Duration::from_millis(1_000)).await;
    let snapshot = io.snapshots.borrow().clone();
    assert_eq!(snapshot.phase, Phase::Running);
    // 50 ticks are due after one second; allow for the frame in flight.
    assert!((45..=50).contains(&snapshot.tick), "tick {}", snapshot.tick);
    let player = snapshot.player.unwrap();
    assert_eq!(player.nickname, "Ada");
    assert!(player.segments[0].x > 880.0);
    assert!(roster.contains("player-a"));
}

#[tokio::test(start_paused = true)]
async fn boundary_death_reports_once_and_leaves_roster() {
    let roster = Arc::new(SharedRoster::new());
    let (mut runtime, mut io) = make_runtime("player-a", &roster, 2);
    runtime.start(None, Some(quiet_settings(300.0))).await;
    runtime.update_input(None, true).await;

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(io.game_over.try_recv().is_ok());
    assert!(io.game_over.try_recv().is_err());
    assert_eq!(io.snapshots.borrow().phase, Phase::GameOver);
    assert!(!runtime.is_running());
    assert!(!roster.contains("player-a"));
}

#[tokio::test(start_paused = true)]
async fn reset_stops_the_run() {
    let roster = Arc::new(SharedRoster::new());
    let (mut runtime, io) = make_runtime("player-a", &roster, 3);
    runtime.start(None, Some(quiet_settings(800.0))).await;
    tokio::time::sleep(Duration::from_millis(200)).await;
    runtime.reset().await;

    tokio::time::sleep(Duration::from_millis(200)).await;
    let snapshot = io.snapshots.borrow().clone();
    assert_eq!(snapshot.phase, Phase::NotRunning);
    assert_eq!(snapshot.tick, 0);
    assert!(snapshot.player.is_none());
    assert!(!roster.contains("player-a"));
    assert!(!runtime.drop_poison().await);
}

#[tokio::test(start_paused = true)]
async fn restart_begins_a_new_generation() {
    let roster = Arc::new(SharedRoster::new());
    let (mut runtime, io) = make_runtime("player-a", &roster, 4);
    let first = runtime.start(None, Some(quiet_settings(800.0))).await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    let second = runtime.start(None, Some(quiet_settings(800.0))).await;
    assert!(second > first);
    assert_eq!(io.snapshots.borrow().tick, 0);
}

#[tokio::test(start_paused = true)]
async fn sessions_see_each_other_through_the_roster() {
    let roster = Arc::new(SharedRoster::new());
    let (mut first, first_io) = make_runtime("player-a", &roster, 5);
    let (mut second, _second_io) = make_runtime("player-b", &roster, 6);
    first.start(None, Some(quiet_settings(800.0))).await;
    second.start(None, Some(quiet_settings(1_200.0))).await;

    tokio::time::sleep(Duration::from_millis(300)).await;
    let snapshot = first_io.snapshots.borrow().clone();
    let remote_ids: Vec<&str> = snapshot.remote_bodies.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(remote_ids, vec!["player-b"]);
    assert!(snapshot.leaderboard.iter().any(|entry| entry.id == "player-b"));

    drop(second);
    assert!(!roster.contains("player-b"));
    first.shutdown();
    assert!(roster.is_empty());
}

#[tokio::test(start_paused = true)]
async fn poison_drop_goes_through_the_runtime() {
    let roster = Arc::new(SharedRoster::new());
    let (mut runtime, io) = make_runtime("player-a", &roster, 7);
    runtime.start(None, Some(quiet_settings(800.0))).await;
    assert!(runtime.drop_poison().await);
    tokio::time::sleep(Duration::from_millis(100)).await;
    let snapshot = io.snapshots.borrow().clone();
    assert_eq!(snapshot.poison.len(), 1);
    assert_eq!(snapshot.poison[0].position, Point::new(752.0, 800.0));
}
