//! Game state and core simulation types
//!
//! The whole session lives in one [`GameState`]: entity collections, score,
//! camera, RNG, and tuning. Everything serializes, and all iteration happens
//! in spawn order, so a session is reproducible from a seed and an input
//! trace.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawn::Spawners;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Frozen by the pause toggle; nothing advances, including spawners
    Paused,
    /// Player health reached zero; terminal until an explicit reset
    GameOver,
}

/// Player animation tag.
///
/// Logic-visible only; `Shoot` is a transient overlay that reverts on a tick
/// countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerAnim {
    #[default]
    Idle,
    Run,
    Jetpack,
    Shoot,
}

/// The player-controlled survivor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Health in [0, max]; zero is terminal
    pub health: u32,
    /// Jetpack fuel in [0.0, max]
    pub fuel: f32,
    pub grounded: bool,
    pub anim: PlayerAnim,
    /// Ticks remaining on the transient shoot animation
    pub shoot_ticks: u32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::ZERO,
            size: Vec2::new(tuning.player.width, tuning.player.height),
            health: tuning.player.max_health,
            fuel: tuning.player.max_fuel,
            grounded: false,
            anim: PlayerAnim::Idle,
            shoot_ticks: 0,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Contact radius for enemy encounters
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.x / 2.0
    }

    /// Reduce health, saturating at zero.
    ///
    /// Invulnerability is session state; callers gate on it.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

/// A static platform segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub body: Aabb,
}

/// Enemy variant tag.
///
/// One update rule serves all three; variants differ only by these
/// multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Walker,
    Runner,
    Brute,
}

impl EnemyKind {
    /// Walk speed multiplier applied at spawn
    pub fn speed_multiplier(self) -> f32 {
        match self {
            EnemyKind::Runner => 1.8,
            EnemyKind::Walker | EnemyKind::Brute => 1.0,
        }
    }

    /// Contact damage multiplier
    pub fn damage_multiplier(self) -> u32 {
        match self {
            EnemyKind::Brute => 3,
            EnemyKind::Walker | EnemyKind::Runner => 1,
        }
    }

    /// Contact score multiplier
    pub fn score_multiplier(self) -> u64 {
        match self {
            EnemyKind::Brute => 2,
            EnemyKind::Walker | EnemyKind::Runner => 1,
        }
    }
}

/// A hostile walker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Effective walk speed (base sample times kind multiplier)
    pub speed: f32,
    /// Heading, fixed at spawn: -1.0 walks toward the player
    pub direction: f32,
    pub grounded: bool,
    /// Set while jumping over a platform (step-up)
    pub airborne: bool,
}

impl Enemy {
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2, base_speed: f32, tuning: &Tuning) -> Self {
        let speed = base_speed * kind.speed_multiplier();
        let direction = -1.0;
        Self {
            id,
            kind,
            pos,
            vel: Vec2::new(speed * direction, 0.0),
            size: Vec2::new(tuning.enemy.width, tuning.enemy.height),
            speed,
            direction,
            grounded: false,
            airborne: false,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Contact radius for player encounters and projectile hits
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.x / 2.0
    }
}

/// Display color tag carried by projectiles. Not logic-relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Yellow,
    Orange,
    Red,
    Blue,
}

/// An immutable weapon descriptor
#[derive(Debug, Clone, Copy)]
pub struct Weapon {
    pub name: &'static str,
    /// Projectile speed along the firing angle (px per tick)
    pub projectile_speed: f32,
    /// Per-tick gravity accumulated by the projectile
    pub projectile_gravity: f32,
    pub tint: Tint,
}

/// The selectable arsenal, cycled by input
pub static WEAPONS: [Weapon; 3] = [
    Weapon {
        name: "Pistol",
        projectile_speed: 15.0,
        projectile_gravity: 0.1,
        tint: Tint::Yellow,
    },
    Weapon {
        name: "Shotgun",
        projectile_speed: 10.0,
        projectile_gravity: 0.05,
        tint: Tint::Orange,
    },
    Weapon {
        name: "Rifle",
        projectile_speed: 20.0,
        projectile_gravity: 0.2,
        tint: Tint::Red,
    },
];

/// A ballistic projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Per-tick downward acceleration; zero for turret shots
    pub gravity: f32,
    pub tint: Tint,
}

impl Projectile {
    /// Build a projectile from a firing angle and scalar speed
    pub fn fired(id: u32, origin: Vec2, angle: f32, speed: f32, gravity: f32, tint: Tint) -> Self {
        Self {
            id,
            pos: origin,
            vel: Vec2::new(speed * angle.cos(), speed * angle.sin()),
            gravity,
            tint,
        }
    }
}

/// A stationary automatic defense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turret {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Ticks until the next shot window. Zero on spawn, so a fresh turret
    /// fires on its first update.
    pub cooldown_ticks: u32,
}

impl Turret {
    pub fn new(id: u32, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            size: Vec2::splat(tuning.turret.size),
            cooldown_ticks: 0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// An invulnerability pickup.
///
/// Never heals; it arms a timed invulnerability window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Pickup {
    pub fn new(id: u32, pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            size: Vec2::splat(tuning.pickup.size),
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Spawn RNG; every random draw in the sim goes through this
    pub rng: Pcg32,
    /// Balance values the session was built from
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Monotonic within a session
    pub score: u64,
    /// Horizontal world-to-viewport translation, recomputed each tick from
    /// the pre-update player position
    pub camera_x: f32,
    /// Invulnerability window; damage is suppressed while nonzero
    pub invuln_ticks: u32,
    /// Index into [`WEAPONS`]
    pub weapon_index: usize,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub turrets: Vec<Turret>,
    pub pickups: Vec<Pickup>,
    pub spawners: Spawners,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a fresh session with the given balance
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Running,
            time_ticks: 0,
            score: 0,
            camera_x: 0.0,
            invuln_ticks: 0,
            weapon_index: 0,
            player: Player::new(&tuning),
            platforms: Vec::new(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            turrets: Vec::new(),
            pickups: Vec::new(),
            spawners: Spawners::default(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Whether player damage is currently suppressed
    #[inline]
    pub fn invulnerable(&self) -> bool {
        self.invuln_ticks > 0
    }

    /// Select the next weapon, wrapping around the arsenal
    pub fn cycle_weapon(&mut self) {
        self.weapon_index = (self.weapon_index + 1) % WEAPONS.len();
    }

    /// The currently selected weapon descriptor
    #[inline]
    pub fn active_weapon(&self) -> &'static Weapon {
        &WEAPONS[self.weapon_index]
    }

    /// Return to Running with a freshly initialized world.
    ///
    /// The active weapon selection survives the reset.
    pub fn reset(&mut self, seed: u64) {
        let weapon_index = self.weapon_index;
        let tuning = self.tuning;
        *self = Self::with_tuning(seed, tuning);
        self.weapon_index = weapon_index;
    }
}
