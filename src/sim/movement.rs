//! Per-tick motion: player steering, firing, projectile and enemy drift
//!
//! Speeds are fixed increments per tick, so game speed follows the frame
//! rate. Rate limits (firing, spawning) use wall-clock timestamps instead.

use glam::Vec2;

use super::state::{EntityId, GameState};

/// Apply move intents and clamp the player into the arena.
///
/// Up and down are applied independently; holding both cancels out.
pub fn move_player(state: &mut GameState) {
    let player = &mut state.player;
    if state.intents.move_up {
        player.pos.y -= player.speed;
    }
    if state.intents.move_down {
        player.pos.y += player.speed;
    }
    player.clamp_to(&state.arena);
}

/// Fire a projectile if the fire intent is held and the rate limit allows
pub fn maybe_fire(state: &mut GameState, now_ms: f64) -> Option<EntityId> {
    if !state.intents.firing {
        return None;
    }
    let min_interval = state.config.projectile.min_shot_interval_ms();
    if let Some(last_shot) = state.last_shot_ms {
        if now_ms - last_shot <= min_interval {
            return None;
        }
    }

    let tuning = &state.config.projectile;
    let size = Vec2::new(tuning.width, tuning.height);
    let origin = state.player.muzzle(size);
    let id = state.entities.add_projectile(origin, size, tuning.speed);
    state.last_shot_ms = Some(now_ms);
    Some(id)
}

/// Move projectiles rightward and drop those past the right edge
pub fn advance_projectiles(state: &mut GameState) {
    for projectile in state.entities.projectiles_mut() {
        projectile.pos.x += projectile.speed;
    }
    let right = state.arena.width;
    state.entities.retain_projectiles(|p| p.pos.x <= right);
}

/// Move enemies leftward and drop those past the cull line
pub fn advance_enemies(state: &mut GameState) {
    for enemy in state.entities.enemies_mut() {
        enemy.pos.x -= enemy.speed;
    }
    let cull_x = state.config.enemy.cull_x;
    state.entities.retain_enemies(|e| e.pos.x >= cull_x);
}
