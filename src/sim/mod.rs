//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-driven only; every former wall-clock timer is a tick countdown
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Contact, SideSnap, radial_contact, resolve_floor, resolve_platform};
pub use spawn::Spawners;
pub use state::{
    Enemy, EnemyKind, GamePhase, GameState, Pickup, Platform, Player, PlayerAnim, Projectile,
    Tint, Turret, WEAPONS, Weapon,
};
pub use tick::{TickInput, tick};
