//! Collision passes
//!
//! Hitboxes are shrunk around each sprite's center because the sprites have
//! transparent padding. Hits are collected first and compacted in one pass,
//! so no entity is skipped or visited twice.

use super::state::GameState;

/// Projectiles vs enemies.
///
/// Each projectile destroys at most one enemy per tick: the first live enemy
/// in store order whose shrunk box it overlaps. Returns the number of kills.
pub fn projectile_enemy_pass(state: &mut GameState) -> u32 {
    let factor = state.config.hitbox.projectile_vs_enemy;
    let enemies = state.entities.enemies();
    let projectiles = state.entities.projectiles();

    let enemy_boxes: Vec<_> = enemies.iter().map(|e| e.rect().shrunk(factor)).collect();
    let mut enemy_alive = vec![true; enemies.len()];
    let mut projectile_alive = vec![true; projectiles.len()];
    let mut kills = 0;

    for (pi, projectile) in projectiles.iter().enumerate() {
        let bullet = projectile.rect();
        let hit = enemy_boxes
            .iter()
            .enumerate()
            .find(|(ei, hitbox)| enemy_alive[*ei] && bullet.intersects(hitbox))
            .map(|(ei, _)| ei);

        if let Some(ei) = hit {
            enemy_alive[ei] = false;
            projectile_alive[pi] = false;
            kills += 1;
        }
    }

    if kills > 0 {
        let mut alive = projectile_alive.into_iter();
        state
            .entities
            .retain_projectiles(|_| alive.next().unwrap_or(true));
        let mut alive = enemy_alive.into_iter();
        state.entities.retain_enemies(|_| alive.next().unwrap_or(true));
        state.score += kills;
    }
    kills
}

/// Enemies vs player. The first overlap ends the game.
///
/// Returns true if the player was hit.
pub fn enemy_player_pass(state: &mut GameState) -> bool {
    let hitbox = &state.config.hitbox;
    let player_box = state.player.rect().shrunk(hitbox.player);
    let hit = state
        .entities
        .enemies()
        .iter()
        .any(|e| e.rect().shrunk(hitbox.enemy_vs_player).intersects(&player_box));

    if hit {
        state.game_over();
    }
    hit
}
