//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed per-tick motion increments
//! - Wall-clock rate limits for firing and spawning
//! - Insertion-ordered entity stores
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{enemy_player_pass, projectile_enemy_pass};
pub use geometry::{Rect, intersects};
pub use movement::{advance_enemies, advance_projectiles, maybe_fire, move_player};
pub use snapshot::Snapshot;
pub use spawner::{Difficulty, maybe_spawn_enemy, roll_enemy, should_spawn};
pub use state::{
    Arena, Enemy, EnemySpawn, Entities, EntityId, GamePhase, GameState, Intents, Player,
    Projectile,
};
pub use tick::tick;
