//! Read-only view of a session for presentation layers

use glam::Vec2;
use serde::Serialize;

use super::state::{Arena, GamePhase, GameState};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub arena: Arena,
    /// Player top-left corner
    pub player: Vec2,
    /// Projectile top-left corners, in spawn order
    pub projectiles: Vec<Vec2>,
    /// Enemy top-left corners, in spawn order
    pub enemies: Vec<Vec2>,
    /// Set when the asset loader reported a failure
    pub failed_asset: Option<String>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            arena: self.arena,
            player: self.player.pos,
            projectiles: self.entities.projectiles().iter().map(|p| p.pos).collect(),
            enemies: self.entities.enemies().iter().map(|e| e.pos).collect(),
            failed_asset: self.failed_asset.clone(),
        }
    }
}
