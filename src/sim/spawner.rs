//! Enemy spawning and the difficulty ratchet

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Arena, EnemySpawn, EntityId, GameState};
use crate::config::{EnemyTuning, GameConfig};

/// Spawn pacing and enemy speed range.
///
/// Both values only move one way: the interval shrinks toward its floor and
/// the max speed grows toward its cap, one step per spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub spawn_interval_ms: f64,
    pub enemy_min_speed: f32,
    pub enemy_max_speed: f32,
    /// Enemies spawned since the last reset
    pub spawns: u32,
}

impl Difficulty {
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            spawn_interval_ms: config.spawn.interval_start_ms,
            enemy_min_speed: config.enemy.min_speed,
            enemy_max_speed: config.enemy.max_speed_start,
            spawns: 0,
        }
    }

    /// Advance one step after a spawn
    pub fn ratchet(&mut self, config: &GameConfig) {
        self.spawn_interval_ms = (self.spawn_interval_ms - config.spawn.interval_step_ms)
            .max(config.spawn.interval_floor_ms);
        self.enemy_max_speed =
            (self.enemy_max_speed + config.enemy.max_speed_step).min(config.enemy.max_speed_cap);
        self.spawns += 1;
    }
}

/// True once at least `interval_ms` has elapsed since the last spawn
#[inline]
pub fn should_spawn(now_ms: f64, last_spawn_ms: f64, interval_ms: f64) -> bool {
    now_ms - last_spawn_ms >= interval_ms
}

/// Roll a new enemy at the right edge of the arena
pub fn roll_enemy(
    rng: &mut impl Rng,
    arena: &Arena,
    tuning: &EnemyTuning,
    difficulty: &Difficulty,
) -> EnemySpawn {
    let y_span = arena.height - tuning.height;
    let y = if y_span > 0.0 && y_span.is_finite() {
        rng.random_range(0.0..y_span).floor()
    } else {
        0.0
    };

    let (min, max) = (difficulty.enemy_min_speed, difficulty.enemy_max_speed);
    let speed = if max > min && min.is_finite() && max.is_finite() {
        rng.random_range(min..=max)
    } else if min.is_finite() {
        min
    } else {
        0.0
    };

    EnemySpawn {
        pos: Vec2::new(arena.width - (tuning.width + tuning.spawn_inset), y),
        size: Vec2::new(tuning.width, tuning.height),
        speed,
    }
}

/// Spawn one enemy if the interval has elapsed, then ratchet difficulty.
///
/// The first call of a run only starts the spawn clock.
pub fn maybe_spawn_enemy(state: &mut GameState, now_ms: f64) -> Option<EntityId> {
    let Some(last_spawn) = state.last_spawn_ms else {
        state.last_spawn_ms = Some(now_ms);
        return None;
    };
    if !should_spawn(now_ms, last_spawn, state.difficulty.spawn_interval_ms) {
        return None;
    }

    let spawn = roll_enemy(
        &mut state.rng,
        &state.arena,
        &state.config.enemy,
        &state.difficulty,
    );
    let id = state.entities.add_enemy(spawn);
    state.difficulty.ratchet(&state.config);
    state.last_spawn_ms = Some(now_ms);

    log::debug!(
        "Spawned enemy {:?} at y={} speed={:.2}; interval={}ms max_speed={:.2}",
        id,
        spawn.pos.y,
        spawn.speed,
        state.difficulty.spawn_interval_ms,
        state.difficulty.enemy_max_speed
    );
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn running_state() -> GameState {
        let mut state = GameState::new(Arena::default(), GameConfig::default());
        state.assets_ready();
        state
    }

    #[test]
    fn test_should_spawn_boundary() {
        assert!(!should_spawn(1099.0, 0.0, 1100.0));
        assert!(should_spawn(1100.0, 0.0, 1100.0));
        assert!(should_spawn(5000.0, 0.0, 1100.0));
    }

    #[test]
    fn test_ratchet_formula() {
        let config = GameConfig::default();
        let mut difficulty = Difficulty::initial(&config);
        for n in 1..=60u32 {
            difficulty.ratchet(&config);
            let expected_interval = (1100.0 - 25.0 * n as f64).max(600.0);
            let expected_speed = (8.0 + 0.06 * n as f32).min(11.0);
            assert_eq!(difficulty.spawn_interval_ms, expected_interval);
            assert!((difficulty.enemy_max_speed - expected_speed).abs() < 1e-3);
            assert_eq!(difficulty.spawns, n);
        }
        assert_eq!(difficulty.spawn_interval_ms, 600.0);
        assert_eq!(difficulty.enemy_min_speed, 4.5);
    }

    #[test]
    fn test_ratchet_stays_bounded() {
        let config = GameConfig::default();
        let mut difficulty = Difficulty::initial(&config);
        for _ in 0..1000 {
            difficulty.ratchet(&config);
        }
        assert_eq!(difficulty.spawn_interval_ms, 600.0);
        assert_eq!(difficulty.enemy_max_speed, 11.0);
    }

    #[test]
    fn test_rolled_enemy_within_ranges() {
        let config = GameConfig::default();
        let arena = Arena::new(960.0, 540.0);
        let difficulty = Difficulty::initial(&config);
        let mut rng = Pcg32::from_rng(&mut rand::rng());

        for _ in 0..500 {
            let spawn = roll_enemy(&mut rng, &arena, &config.enemy, &difficulty);
            assert_eq!(spawn.pos.x, 960.0 - 104.0);
            assert!(spawn.pos.y >= 0.0 && spawn.pos.y < 440.0);
            assert_eq!(spawn.pos.y, spawn.pos.y.floor());
            assert!(spawn.speed >= 4.5 && spawn.speed <= 8.0);
            assert_eq!(spawn.size, Vec2::splat(100.0));
        }
    }

    #[test]
    fn test_non_finite_speed_range_falls_back_to_min() {
        let config = GameConfig::default();
        let arena = Arena::default();
        let mut difficulty = Difficulty::initial(&config);
        difficulty.enemy_max_speed = f32::INFINITY;
        let mut rng = Pcg32::seed_from_u64(7);

        let spawn = roll_enemy(&mut rng, &arena, &config.enemy, &difficulty);
        assert_eq!(spawn.speed, 4.5);

        difficulty.enemy_min_speed = f32::NAN;
        let spawn = roll_enemy(&mut rng, &arena, &config.enemy, &difficulty);
        assert_eq!(spawn.speed, 0.0);
    }

    #[test]
    fn test_non_finite_tuning_spawns_without_panic() {
        let mut config = GameConfig::default();
        config.enemy.max_speed_start = f32::INFINITY;
        config.enemy.max_speed_cap = f32::INFINITY;
        let mut state = GameState::new(Arena::default(), config);
        state.assets_ready();
        maybe_spawn_enemy(&mut state, 0.0);
        assert!(maybe_spawn_enemy(&mut state, 1100.0).is_some());
        assert_eq!(state.entities.enemies()[0].speed, 4.5);
    }

    #[test]
    fn test_first_call_starts_clock() {
        let mut state = running_state();
        assert!(maybe_spawn_enemy(&mut state, 10_000.0).is_none());
        assert_eq!(state.last_spawn_ms, Some(10_000.0));
        assert!(state.entities.enemies().is_empty());
    }

    #[test]
    fn test_spawn_after_interval_ratchets() {
        let mut state = running_state();
        maybe_spawn_enemy(&mut state, 0.0);

        assert!(maybe_spawn_enemy(&mut state, 1099.0).is_none());
        let id = maybe_spawn_enemy(&mut state, 1100.0).expect("spawned");

        assert_eq!(state.entities.enemies().len(), 1);
        assert_eq!(state.entities.enemies()[0].id, id);
        assert_eq!(state.last_spawn_ms, Some(1100.0));
        assert_eq!(state.difficulty.spawn_interval_ms, 1075.0);
        assert!((state.difficulty.enemy_max_speed - 8.06).abs() < 1e-5);

        // Next spawn uses the shortened interval
        assert!(maybe_spawn_enemy(&mut state, 2174.0).is_none());
        assert!(maybe_spawn_enemy(&mut state, 2175.0).is_some());
    }

    #[test]
    fn test_seeded_sessions_roll_identically() {
        let config = GameConfig {
            seed: Some(1234),
            ..Default::default()
        };
        let mut a = GameState::new(Arena::default(), config.clone());
        let mut b = GameState::new(Arena::default(), config);
        for state in [&mut a, &mut b] {
            state.assets_ready();
            maybe_spawn_enemy(state, 0.0);
            maybe_spawn_enemy(state, 2000.0);
        }
        let ea = &a.entities.enemies()[0];
        let eb = &b.entities.enemies()[0];
        assert_eq!(ea.pos, eb.pos);
        assert_eq!(ea.speed, eb.speed);
    }
}
