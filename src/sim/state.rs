//! Game state and core simulation types
//!
//! The session exclusively owns every entity. Presentation code reads
//! [`super::Snapshot`]s and talks back only through intents.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::spawner::Difficulty;
use crate::config::{GameConfig, PlayerTuning};
use crate::consts::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the asset loader's readiness signal
    Loading,
    /// Active gameplay
    Running,
    /// Player was hit; only restart is accepted
    GameOver,
    /// Asset loading failed (terminal)
    Failed,
}

/// Fixed-size play field, set once per session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT)
    }
}

/// The player sprite. Only `pos.y` changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical units per tick
    pub speed: f32,
}

impl Player {
    /// Create a player vertically centered in the arena
    pub fn new(arena: &Arena, tuning: &PlayerTuning) -> Self {
        let mut player = Self {
            pos: Vec2::new(tuning.x, 0.0),
            size: Vec2::new(tuning.width, tuning.height),
            speed: tuning.speed,
        };
        player.recenter(arena);
        player
    }

    pub fn recenter(&mut self, arena: &Arena) {
        self.pos.y = arena.height / 2.0 - self.size.y / 2.0;
    }

    /// Largest legal y
    #[inline]
    pub fn max_y(&self, arena: &Arena) -> f32 {
        (arena.height - self.size.y).max(0.0)
    }

    pub fn clamp_to(&mut self, arena: &Arena) {
        self.pos.y = self.pos.y.clamp(0.0, self.max_y(arena));
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Where a projectile of the given size emerges: leading edge, centered
    pub fn muzzle(&self, projectile_size: Vec2) -> Vec2 {
        Vec2::new(
            self.pos.x + self.size.x,
            self.pos.y + self.size.y / 2.0 - projectile_size.y / 2.0,
        )
    }
}

/// Unique entity handle within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// A projectile flying rightward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    pub pos: Vec2,
    pub size: Vec2,
    /// Rightward units per tick
    pub speed: f32,
}

impl Projectile {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// An enemy drifting leftward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward units per tick, drawn once at spawn
    pub speed: f32,
}

impl Enemy {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Parameters for a new enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

/// Live projectiles and enemies, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Entities {
    projectiles: Vec<Projectile>,
    enemies: Vec<Enemy>,
    next_id: u64,
}

impl Entities {
    fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add_projectile(&mut self, origin: Vec2, size: Vec2, speed: f32) -> EntityId {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile {
            id,
            pos: origin,
            size,
            speed,
        });
        id
    }

    pub fn add_enemy(&mut self, spawn: EnemySpawn) -> EntityId {
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            pos: spawn.pos,
            size: spawn.size,
            speed: spawn.speed,
        });
        id
    }

    pub fn remove_projectile(&mut self, id: EntityId) -> Option<Projectile> {
        let index = self.projectiles.iter().position(|p| p.id == id)?;
        Some(self.projectiles.remove(index))
    }

    pub fn remove_enemy(&mut self, id: EntityId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(index))
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles_mut(&mut self) -> &mut [Projectile] {
        &mut self.projectiles
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    /// Keep only projectiles matching the predicate (single compaction pass)
    pub fn retain_projectiles(&mut self, keep: impl FnMut(&Projectile) -> bool) {
        self.projectiles.retain(keep);
    }

    /// Keep only enemies matching the predicate (single compaction pass)
    pub fn retain_enemies(&mut self, keep: impl FnMut(&Enemy) -> bool) {
        self.enemies.retain(keep);
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
        self.enemies.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty() && self.enemies.is_empty()
    }
}

/// Externally supplied input intents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    pub move_up: bool,
    pub move_down: bool,
    pub firing: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) arena: Arena,
    pub(crate) config: GameConfig,
    /// Current phase
    pub phase: GamePhase,
    /// Enemies destroyed this run
    pub score: u32,
    pub player: Player,
    pub entities: Entities,
    pub difficulty: Difficulty,
    pub intents: Intents,
    /// Timestamp (ms) of the last spawn; None until the first running tick
    pub last_spawn_ms: Option<f64>,
    /// Timestamp (ms) of the last shot; None fires immediately
    pub last_shot_ms: Option<f64>,
    /// Running ticks processed this run
    pub ticks: u64,
    /// Identifier reported by the asset loader on failure
    pub failed_asset: Option<String>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a session in the `Loading` phase
    pub fn new(arena: Arena, config: GameConfig) -> Self {
        Self {
            player: Player::new(&arena, &config.player),
            difficulty: Difficulty::initial(&config),
            rng: make_rng(config.seed),
            arena,
            config,
            phase: GamePhase::Loading,
            score: 0,
            entities: Entities::default(),
            intents: Intents::default(),
            last_spawn_ms: None,
            last_shot_ms: None,
            ticks: 0,
            failed_asset: None,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Asset loader reported success. Only valid while loading.
    pub fn assets_ready(&mut self) {
        if self.phase != GamePhase::Loading {
            return;
        }
        self.phase = GamePhase::Running;
        log::info!("Assets ready, session running");
    }

    /// Asset loader reported a missing asset. Only valid while loading.
    pub fn assets_failed(&mut self, identifier: impl Into<String>) {
        if self.phase != GamePhase::Loading {
            return;
        }
        let identifier = identifier.into();
        log::warn!("Missing asset: {identifier}, simulation halted");
        self.failed_asset = Some(identifier);
        self.phase = GamePhase::Failed;
    }

    /// Presses are dropped once a run has ended or loading failed.
    /// Releases are always accepted.
    fn accepts_presses(&self) -> bool {
        !matches!(self.phase, GamePhase::GameOver | GamePhase::Failed)
    }

    pub fn set_move_up(&mut self, active: bool) {
        if active && !self.accepts_presses() {
            return;
        }
        self.intents.move_up = active;
    }

    pub fn set_move_down(&mut self, active: bool) {
        if active && !self.accepts_presses() {
            return;
        }
        self.intents.move_down = active;
    }

    pub fn set_firing(&mut self, active: bool) {
        if active && !self.accepts_presses() {
            return;
        }
        self.intents.firing = active;
    }

    /// Restart after game over. No-op in any other phase.
    pub fn request_restart(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        self.entities.clear();
        self.score = 0;
        self.player.recenter(&self.arena);
        self.difficulty = Difficulty::initial(&self.config);
        self.last_spawn_ms = None;
        self.last_shot_ms = None;
        self.ticks = 0;
        self.rng = make_rng(self.config.seed);
        self.phase = GamePhase::Running;
        log::info!("Session restarted");
    }

    pub(crate) fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        log::info!("Game over, score {} after {} ticks", self.score, self.ticks);
    }
}

fn make_rng(seed: Option<u64>) -> Pcg32 {
    match seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    }
}
