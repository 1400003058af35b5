//! Lane Blaster - side-on arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Simulation (motion, spawning, collisions, game state)
//! - `driver`: Frame-driven loop with cancellable scheduling
//! - `config`: Data-driven tuning loaded from JSON
//!
//! Rendering, asset loading and input-device binding live outside this
//! crate. A presentation layer feeds intents into [`sim::GameState`] and
//! renders [`sim::Snapshot`]s.

pub mod config;
pub mod driver;
pub mod error;
pub mod sim;

pub use config::GameConfig;
pub use driver::{Clock, FrameDriver, FrameToken, SystemClock};
pub use error::ConfigError;

/// Default tuning constants
pub mod consts {
    /// Default arena (viewport) size
    pub const DEFAULT_ARENA_WIDTH: f32 = 960.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 540.0;

    /// Player sprite - pinned to the left edge, moves vertically
    pub const PLAYER_X: f32 = 20.0;
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Units per tick
    pub const PLAYER_SPEED: f32 = 4.0;

    /// Projectiles
    pub const PROJECTILE_SIZE: f32 = 24.0;
    /// Units per tick, rightward
    pub const PROJECTILE_SPEED: f32 = 8.0;
    pub const SHOTS_PER_SECOND: f64 = 2.0;

    /// Enemies
    pub const ENEMY_SIZE: f32 = 100.0;
    /// Gap between a fresh enemy's right edge and the arena's right edge
    pub const ENEMY_SPAWN_INSET: f32 = 4.0;
    /// Enemies past this x are culled as missed
    pub const ENEMY_CULL_X: f32 = -30.0;
    pub const ENEMY_MIN_SPEED: f32 = 4.5;
    pub const ENEMY_MAX_SPEED_START: f32 = 8.0;
    pub const ENEMY_MAX_SPEED_CAP: f32 = 11.0;
    pub const ENEMY_MAX_SPEED_STEP: f32 = 0.06;

    /// Spawn interval ratchet (milliseconds)
    pub const SPAWN_INTERVAL_START_MS: f64 = 1100.0;
    pub const SPAWN_INTERVAL_FLOOR_MS: f64 = 600.0;
    pub const SPAWN_INTERVAL_STEP_MS: f64 = 25.0;

    /// Hitbox scale factors (sprites have transparent padding)
    pub const HITBOX_PROJECTILE_VS_ENEMY: f32 = 0.6;
    pub const HITBOX_PLAYER: f32 = 0.8;
    pub const HITBOX_ENEMY_VS_PLAYER: f32 = 0.65;
}
