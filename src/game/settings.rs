use super::constants::{
    DEFAULT_AI_SNAKE_COUNT, DEFAULT_SHRINKING_WORLD_ENABLED, DEFAULT_SNAKE_SPEED,
    DEFAULT_WORLD_RADIUS, MAX_AI_SNAKE_COUNT, MAX_SETTINGS_WORLD_RADIUS, MAX_SNAKE_SPEED,
    MIN_SETTINGS_WORLD_RADIUS, MIN_SNAKE_SPEED,
};
use serde::{Deserialize, Serialize};

/// Options chosen before a run. Applied only when a run (re)starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSettings {
    pub snake_speed: f64,
    pub world_radius: f64,
    pub ai_snake_count: usize,
    pub shrinking_world_enabled: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            snake_speed: DEFAULT_SNAKE_SPEED,
            world_radius: DEFAULT_WORLD_RADIUS,
            ai_snake_count: DEFAULT_AI_SNAKE_COUNT,
            shrinking_world_enabled: DEFAULT_SHRINKING_WORLD_ENABLED,
        }
    }
}

impl GameSettings {
    /// Clamps every option into the range the settings screen allows. Non-finite
    /// numbers fall back to their defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let snake_speed = if self.snake_speed.is_finite() {
            self.snake_speed.clamp(MIN_SNAKE_SPEED, MAX_SNAKE_SPEED)
        } else {
            defaults.snake_speed
        };
        let world_radius = if self.world_radius.is_finite() {
            self.world_radius
                .clamp(MIN_SETTINGS_WORLD_RADIUS, MAX_SETTINGS_WORLD_RADIUS)
        } else {
            defaults.world_radius
        };
        Self {
            snake_speed,
            world_radius,
            ai_snake_count: self.ai_snake_count.min(MAX_AI_SNAKE_COUNT),
            shrinking_world_enabled: self.shrinking_world_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings: GameSettings = serde_json::from_str(r#"{"aiSnakeCount": 3}"#).unwrap();
        assert_eq!(settings.ai_snake_count, 3);
        assert_eq!(settings.world_radius, DEFAULT_WORLD_RADIUS);
        assert_eq!(settings.snake_speed, DEFAULT_SNAKE_SPEED);
        assert!(!settings.shrinking_world_enabled);
    }

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let settings = GameSettings {
            snake_speed: -4.0,
            world_radius: f64::NAN,
            ai_snake_count: 10_000,
            shrinking_world_enabled: true,
        }
        .sanitized();
        assert_eq!(settings.snake_speed, MIN_SNAKE_SPEED);
        assert_eq!(settings.world_radius, DEFAULT_WORLD_RADIUS);
        assert_eq!(settings.ai_snake_count, MAX_AI_SNAKE_COUNT);
        assert!(settings.shrinking_world_enabled);
    }

    #[test]
    fn zero_ai_count_is_kept() {
        let settings = GameSettings {
            ai_snake_count: 0,
            ..GameSettings::default()
        }
        .sanitized();
        assert_eq!(settings.ai_snake_count, 0);
    }
}
