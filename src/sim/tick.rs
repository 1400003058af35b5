//! Simulation tick
//!
//! One call advances a running session by one frame.

use super::collision::{enemy_player_pass, projectile_enemy_pass};
use super::movement::{advance_enemies, advance_projectiles, maybe_fire, move_player};
use super::spawner::maybe_spawn_enemy;
use super::state::GameState;

/// Advance the game state by one tick at wall-clock time `now_ms`.
///
/// Does nothing outside the `Running` phase.
pub fn tick(state: &mut GameState, now_ms: f64) {
    if !state.is_running() {
        return;
    }
    state.ticks += 1;

    move_player(state);
    maybe_fire(state, now_ms);
    advance_projectiles(state);

    maybe_spawn_enemy(state, now_ms);
    advance_enemies(state);

    projectile_enemy_pass(state);
    enemy_player_pass(state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::{Arena, EnemySpawn, GamePhase};
    use glam::Vec2;

    fn running_state() -> GameState {
        let mut state = GameState::new(Arena::new(960.0, 540.0), GameConfig::default());
        state.assets_ready();
        state
    }

    fn parked_enemy(pos: Vec2) -> EnemySpawn {
        EnemySpawn {
            pos,
            size: Vec2::splat(100.0),
            speed: 0.0,
        }
    }

    #[test]
    fn test_no_tick_while_loading() {
        let mut state = GameState::new(Arena::default(), GameConfig::default());
        state.intents.move_up = true;
        let y = state.player.pos.y;
        tick(&mut state, 0.0);
        assert_eq!(state.player.pos.y, y);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.last_spawn_ms, None);
    }

    #[test]
    fn test_no_tick_after_failure() {
        let mut state = GameState::new(Arena::default(), GameConfig::default());
        state.assets_failed("assets/pepe.png");
        for t in 0..10 {
            tick(&mut state, t as f64 * 1000.0);
        }
        assert_eq!(state.phase, GamePhase::Failed);
        assert_eq!(state.ticks, 0);
        assert!(state.entities.is_empty());
    }

    #[test]
    fn test_intents_set_while_loading_apply_on_first_tick() {
        let mut state = GameState::new(Arena::new(960.0, 540.0), GameConfig::default());
        state.set_move_down(true);
        state.set_firing(true);
        let y = state.player.pos.y;

        state.assets_ready();
        tick(&mut state, 0.0);

        assert_eq!(state.player.pos.y, y + 4.0);
        assert_eq!(state.entities.projectiles().len(), 1);
    }

    #[test]
    fn test_first_tick_never_spawns() {
        let mut state = running_state();
        tick(&mut state, 50_000.0);
        assert!(state.entities.enemies().is_empty());
        assert_eq!(state.last_spawn_ms, Some(50_000.0));
    }

    #[test]
    fn test_projectile_moves_in_fire_tick() {
        let mut state = running_state();
        state.set_firing(true);
        tick(&mut state, 0.0);

        let muzzle = state.player.muzzle(Vec2::splat(24.0));
        let projectile = &state.entities.projectiles()[0];
        assert_eq!(projectile.pos.x, muzzle.x + 8.0);
        assert_eq!(projectile.pos.y, muzzle.y);
    }

    #[test]
    fn test_enemy_spawns_after_interval() {
        let mut state = running_state();
        tick(&mut state, 0.0);
        tick(&mut state, 1100.0);
        assert_eq!(state.entities.enemies().len(), 1);
        assert_eq!(state.difficulty.spawns, 1);

        let enemy = &state.entities.enemies()[0];
        // Spawned at W - 104, then moved once
        assert!(enemy.pos.x < 856.0 && enemy.pos.x >= 856.0 - 8.0);
    }

    #[test]
    fn test_tick_scores_hit() {
        let mut state = running_state();
        state.entities.add_enemy(parked_enemy(Vec2::new(500.0, 200.0)));
        state
            .entities
            .add_projectile(Vec2::new(522.0, 238.0), Vec2::splat(24.0), 8.0);

        tick(&mut state, 0.0);

        assert_eq!(state.score, 1);
        assert!(state.entities.is_empty());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_tick_game_over_freezes_state() {
        let mut state = running_state();
        let pos = state.player.pos;
        state.entities.add_enemy(parked_enemy(pos));

        tick(&mut state, 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        let y = state.player.pos.y;
        let ticks = state.ticks;
        state.set_move_up(true);
        state.set_firing(true);
        tick(&mut state, 1000.0);
        tick(&mut state, 2000.0);

        assert_eq!(state.player.pos.y, y);
        assert_eq!(state.ticks, ticks);
        assert!(state.entities.projectiles().is_empty());
        assert_eq!(state.entities.enemies().len(), 1);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = running_state();
        state.set_move_down(true);
        for t in 0..200 {
            tick(&mut state, t as f64 * 100.0);
            if !state.is_running() {
                break;
            }
        }
        // Force a game over regardless of how the run went
        if state.is_running() {
            let pos = state.player.pos;
            state.entities.add_enemy(parked_enemy(pos));
            tick(&mut state, 30_000.0);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        state.score = 12;

        state.request_restart();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.entities.is_empty());
        assert_eq!(state.player.pos.y, 540.0 / 2.0 - state.player.size.y / 2.0);
        assert_eq!(state.difficulty, crate::sim::Difficulty::initial(state.config()));
        assert_eq!(state.last_spawn_ms, None);
        assert_eq!(state.last_shot_ms, None);
    }

    #[test]
    fn test_restart_twice_is_same_as_once() {
        let mut state = running_state();
        state.entities.add_enemy(parked_enemy(state.player.pos));
        tick(&mut state, 0.0);
        state.request_restart();
        let score = state.score;
        let y = state.player.pos.y;
        state.request_restart();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, score);
        assert_eq!(state.player.pos.y, y);
    }
}
