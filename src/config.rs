//! Game tuning configuration
//!
//! Every field has a default matching the stock balance, so a JSON file only
//! needs the values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Arena;

/// Player sprite tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Fixed horizontal position
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical units per tick
    pub speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            x: PLAYER_X,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
        }
    }
}

/// Projectile tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    pub width: f32,
    pub height: f32,
    /// Rightward units per tick
    pub speed: f32,
    /// Fire rate limit while the fire intent is held
    pub shots_per_second: f64,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            width: PROJECTILE_SIZE,
            height: PROJECTILE_SIZE,
            speed: PROJECTILE_SPEED,
            shots_per_second: SHOTS_PER_SECOND,
        }
    }
}

impl ProjectileTuning {
    /// Minimum milliseconds between two shots
    pub fn min_shot_interval_ms(&self) -> f64 {
        1000.0 / self.shots_per_second
    }
}

/// Enemy tuning, including the speed ratchet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub width: f32,
    pub height: f32,
    /// Gap between a fresh enemy and the right arena edge
    pub spawn_inset: f32,
    /// Enemies with x below this are culled
    pub cull_x: f32,
    pub min_speed: f32,
    pub max_speed_start: f32,
    pub max_speed_cap: f32,
    /// Max speed increase per spawn
    pub max_speed_step: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            width: ENEMY_SIZE,
            height: ENEMY_SIZE,
            spawn_inset: ENEMY_SPAWN_INSET,
            cull_x: ENEMY_CULL_X,
            min_speed: ENEMY_MIN_SPEED,
            max_speed_start: ENEMY_MAX_SPEED_START,
            max_speed_cap: ENEMY_MAX_SPEED_CAP,
            max_speed_step: ENEMY_MAX_SPEED_STEP,
        }
    }
}

/// Spawn interval ratchet (milliseconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub interval_start_ms: f64,
    pub interval_floor_ms: f64,
    /// Interval decrease per spawn
    pub interval_step_ms: f64,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            interval_start_ms: SPAWN_INTERVAL_START_MS,
            interval_floor_ms: SPAWN_INTERVAL_FLOOR_MS,
            interval_step_ms: SPAWN_INTERVAL_STEP_MS,
        }
    }
}

/// Hitbox scale factors, each in (0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitboxTuning {
    /// Enemy box scale when tested against projectiles
    pub projectile_vs_enemy: f32,
    /// Player box scale when tested against enemies
    pub player: f32,
    /// Enemy box scale when tested against the player
    pub enemy_vs_player: f32,
}

impl Default for HitboxTuning {
    fn default() -> Self {
        Self {
            projectile_vs_enemy: HITBOX_PROJECTILE_VS_ENEMY,
            player: HITBOX_PLAYER,
            enemy_vs_player: HITBOX_ENEMY_VS_PLAYER,
        }
    }
}

/// Complete game tuning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerTuning,
    pub projectile: ProjectileTuning,
    pub enemy: EnemyTuning,
    pub spawn: SpawnTuning,
    pub hitbox: HitboxTuning,
    /// Fixed RNG seed for replayable sessions (None = entropy)
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the tuning is usable in the given arena
    pub fn validate(&self, arena: &Arena) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
            }
        }
        fn factor(name: &str, value: f32) -> Result<(), ConfigError> {
            if value > 0.0 && value <= 1.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be in (0, 1], got {value}")))
            }
        }

        positive("arena.width", arena.width as f64)?;
        positive("arena.height", arena.height as f64)?;
        positive("player.width", self.player.width as f64)?;
        positive("player.height", self.player.height as f64)?;
        positive("player.speed", self.player.speed as f64)?;
        positive("projectile.width", self.projectile.width as f64)?;
        positive("projectile.height", self.projectile.height as f64)?;
        positive("projectile.speed", self.projectile.speed as f64)?;
        positive("projectile.shots_per_second", self.projectile.shots_per_second)?;
        positive("enemy.width", self.enemy.width as f64)?;
        positive("enemy.height", self.enemy.height as f64)?;
        positive("enemy.min_speed", self.enemy.min_speed as f64)?;
        positive("spawn.interval_floor_ms", self.spawn.interval_floor_ms)?;

        if self.enemy.min_speed > self.enemy.max_speed_start {
            return Err(ConfigError::Invalid(
                "enemy.min_speed exceeds enemy.max_speed_start".into(),
            ));
        }
        if self.enemy.max_speed_start > self.enemy.max_speed_cap {
            return Err(ConfigError::Invalid(
                "enemy.max_speed_start exceeds enemy.max_speed_cap".into(),
            ));
        }
        if self.enemy.max_speed_step < 0.0 || self.spawn.interval_step_ms < 0.0 {
            return Err(ConfigError::Invalid("ratchet steps must not be negative".into()));
        }
        if self.spawn.interval_floor_ms > self.spawn.interval_start_ms {
            return Err(ConfigError::Invalid(
                "spawn.interval_floor_ms exceeds spawn.interval_start_ms".into(),
            ));
        }

        factor("hitbox.projectile_vs_enemy", self.hitbox.projectile_vs_enemy)?;
        factor("hitbox.player", self.hitbox.player)?;
        factor("hitbox.enemy_vs_player", self.hitbox.enemy_vs_player)?;

        if arena.height < self.player.height {
            return Err(ConfigError::Invalid(format!(
                "arena height {} cannot hold the player ({})",
                arena.height, self.player.height
            )));
        }
        if arena.height <= self.enemy.height {
            return Err(ConfigError::Invalid(format!(
                "arena height {} cannot hold an enemy ({})",
                arena.height, self.enemy.height
            )));
        }
        if arena.width <= self.enemy.width + self.enemy.spawn_inset {
            return Err(ConfigError::Invalid(format!(
                "arena width {} cannot hold an enemy spawn",
                arena.width
            )));
        }

        Ok(())
    }
}
