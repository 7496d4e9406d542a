pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;

pub const DEFAULT_WORLD_RADIUS: f64 = 800.0;
pub const DEFAULT_SNAKE_SPEED: f64 = 2.0;
pub const DEFAULT_AI_SNAKE_COUNT: usize = 10;
pub const DEFAULT_SHRINKING_WORLD_ENABLED: bool = false;

pub const MIN_SNAKE_SPEED: f64 = 1.0;
pub const MAX_SNAKE_SPEED: f64 = 5.0;
pub const MIN_SETTINGS_WORLD_RADIUS: f64 = 300.0;
pub const MAX_SETTINGS_WORLD_RADIUS: f64 = 3000.0;
pub const MAX_AI_SNAKE_COUNT: usize = 50;

pub const MIN_WORLD_RADIUS: f64 = 150.0;
pub const SHRINK_DURATION_SECS: f64 = 20.0;
pub const WORLD_BORDER_THICKNESS: f64 = 10.0;

pub const SEGMENT_SIZE: f64 = 12.0;
pub const BOOST_FACTOR: f64 = 10.0;
pub const INITIAL_SNAKE_LENGTH: usize = 5;

pub const FOOD_RADIUS: f64 = 5.0;
pub const MAX_FOOD_ITEMS: usize = 50;
pub const FOOD_SPAWN_MARGIN: f64 = 5.0;
pub const NORMAL_FOOD_VALUE: u32 = 1;
pub const LARGE_FOOD_VALUE: u32 = 5;
pub const LARGE_FOOD_RADIUS_MULTIPLIER: f64 = 1.8;
pub const LARGE_FOOD_PROBABILITY: f64 = 0.3;
pub const SCORE_PER_FOOD_VALUE: u32 = 10;

pub const POISON_PELLET_RADIUS: f64 = 6.0;
pub const POISON_PELLET_SEGMENT_COST: usize = 1;
pub const MIN_SNAKE_LENGTH_TO_DROP_POISON: usize = 4;

pub const GAME_TICK_MS: u64 = 20;
pub const MAX_TICKS_PER_FRAME: u32 = 25;
pub const DEFAULT_FRAME_MS: u64 = 16;

pub const AI_TARGET_UPDATE_INTERVAL_MS: f64 = 2000.0;
pub const AI_INTERVAL_JITTER: f64 = 0.25;
pub const AI_RETREAT_RADIUS_RATIO: f64 = 0.85;
pub const AI_LEAD_TICKS: f64 = 40.0;
pub const AI_SPAWN_MIN_RADIUS_RATIO: f64 = 0.5;
pub const SNAKE_TURN_SPEED: f64 = 0.1;
pub const PLAYER_SNAKE_TURN_SPEED: f64 = 0.15;

pub const LEADERBOARD_SIZE: usize = 10;

pub const MINI_MAP_DISPLAY_RADIUS: f64 = 50.0;
pub const MINI_MAP_PLAYER_DOT_SIZE: f64 = 6.0;
pub const MINI_MAP_AI_DOT_SIZE: f64 = 4.0;

pub const PLAYER_COLOR: &str = "#22c55e";
pub const LARGE_FOOD_COLOR: &str = "#fb923c";
pub const POISON_PELLET_COLOR: &str = "#b91c1c";
pub const POISON_PELLET_RING_COLOR: &str = "#7f1d1d";

pub const AI_COLORS: [&str; 6] = [
  "#ef4444",
  "#3b82f6",
  "#eab308",
  "#a855f7",
  "#ec4899",
  "#6366f1",
];

pub const FOOD_COLORS: [&str; 4] = ["#fca5a5", "#fde047", "#f9a8d4", "#67e8f9"];

pub const BOT_NICKNAMES: [&str; 9] = [
  "Viper", "Serpent", "Fury", "Slither", "Wraith", "Ghost", "Shadow", "Cobra", "Python",
];
