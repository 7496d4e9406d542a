pub mod ai;
pub mod clock;
pub mod collision;
pub mod constants;
pub mod engine;
pub mod input;
pub mod leaderboard;
pub mod math;
pub mod minimap;
pub mod settings;
pub mod snake;
pub mod snapshot;
pub mod spawner;
pub mod types;
pub mod world;
