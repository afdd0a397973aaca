//! Countdown-driven entity spawners
//!
//! Every spawner is a tick countdown stored in the session, decremented once
//! per tick and rescheduled from the tuned delay window when it fires.
//! Countdowns start at zero, so a fresh session spawns one of each kind on
//! its first tick.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind, GameState, Pickup, Platform, Turret};
use crate::consts::*;
use crate::ms_to_ticks;
use crate::sim::collision::Aabb;
use serde::{Deserialize, Serialize};

/// Ground line shared by enemy and platform spawns
const SPAWN_BASE_Y: f32 = VIEW_HEIGHT - 60.0;
/// Maximum height a platform spawns above the ground line
const PLATFORM_RISE: f32 = 200.0;

/// Per-kind spawn countdowns, in ticks
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spawners {
    pub enemy_ticks: u32,
    pub platform_ticks: u32,
    pub turret_ticks: u32,
    pub pickup_ticks: u32,
}

impl Spawners {
    /// All countdowns pushed out far enough that nothing spawns.
    ///
    /// Used by tests that need a quiet world.
    pub fn idle() -> Self {
        Self {
            enemy_ticks: u32::MAX,
            platform_ticks: u32::MAX,
            turret_ticks: u32::MAX,
            pickup_ticks: u32::MAX,
        }
    }
}

/// Advance all spawn countdowns, spawning and rescheduling any that expire.
///
/// Runs at the top of every tick, in a fixed order so RNG draws are
/// deterministic.
pub fn run_spawners(state: &mut GameState) {
    if state.spawners.enemy_ticks == 0 {
        spawn_enemy(state);
        let [min, max] = state.tuning.spawn.enemy_delay_ms;
        state.spawners.enemy_ticks = ms_to_ticks(state.rng.random_range(min..max));
    } else {
        state.spawners.enemy_ticks -= 1;
    }

    if state.spawners.platform_ticks == 0 {
        spawn_platform(state);
        let [min, max] = state.tuning.spawn.platform_delay_ms;
        state.spawners.platform_ticks = ms_to_ticks(state.rng.random_range(min..max));
    } else {
        state.spawners.platform_ticks -= 1;
    }

    if state.spawners.turret_ticks == 0 {
        spawn_turret(state);
        let [min, max] = state.tuning.spawn.turret_delay_ms;
        state.spawners.turret_ticks = ms_to_ticks(state.rng.random_range(min..max));
    } else {
        state.spawners.turret_ticks -= 1;
    }

    if state.spawners.pickup_ticks == 0 {
        spawn_pickup(state);
        let [min, max] = state.tuning.spawn.pickup_delay_ms;
        state.spawners.pickup_ticks = ms_to_ticks(state.rng.random_range(min..max));
    } else {
        state.spawners.pickup_ticks -= 1;
    }
}

/// Horizontal spawn position: one viewport ahead of the player plus jitter
fn lead_x(state: &mut GameState) -> f32 {
    let jitter = state.rng.random_range(0.0..state.tuning.spawn.lead_jitter);
    state.player.pos.x + VIEW_WIDTH + jitter
}

fn spawn_enemy(state: &mut GameState) {
    let x = lead_x(state);
    let base_speed = state
        .rng
        .random_range(state.tuning.enemy.min_speed..state.tuning.enemy.max_speed);

    let roll: f32 = state.rng.random_range(0.0..1.0);
    let kind = if roll < 0.5 {
        EnemyKind::Walker
    } else if roll < 0.75 {
        EnemyKind::Runner
    } else {
        EnemyKind::Brute
    };

    let id = state.next_entity_id();
    let enemy = Enemy::new(id, kind, Vec2::new(x, SPAWN_BASE_Y), base_speed, &state.tuning);
    log::debug!("spawn enemy #{id} {kind:?} at x={x:.0} speed={:.2}", enemy.speed);
    state.enemies.push(enemy);
}

fn spawn_platform(state: &mut GameState) {
    let x = lead_x(state);
    let y = SPAWN_BASE_Y - state.rng.random_range(0.0..PLATFORM_RISE);
    let size = state.tuning.spawn.platform_size;

    let id = state.next_entity_id();
    log::debug!("spawn platform #{id} at ({x:.0}, {y:.0})");
    state.platforms.push(Platform {
        id,
        body: Aabb::new(Vec2::new(x, y), Vec2::splat(size)),
    });
}

fn spawn_turret(state: &mut GameState) {
    let x = lead_x(state);
    let y = VIEW_HEIGHT - 100.0;

    let id = state.next_entity_id();
    log::debug!("spawn turret #{id} at x={x:.0}");
    let turret = Turret::new(id, Vec2::new(x, y), &state.tuning);
    state.turrets.push(turret);
}

fn spawn_pickup(state: &mut GameState) {
    let x = lead_x(state);
    let y = state.rng.random_range(0.0..VIEW_HEIGHT - 200.0) + 60.0;

    let id = state.next_entity_id();
    log::debug!("spawn pickup #{id} at ({x:.0}, {y:.0})");
    let pickup = Pickup::new(id, Vec2::new(x, y), &state.tuning);
    state.pickups.push(pickup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_spawns_one_of_each() {
        let mut state = GameState::new(42);
        run_spawners(&mut state);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.platforms.len(), 1);
        assert_eq!(state.turrets.len(), 1);
        assert_eq!(state.pickups.len(), 1);

        // All countdowns rescheduled into their tuned windows
        assert!((120..300).contains(&state.spawners.enemy_ticks));
        assert!((180..360).contains(&state.spawners.platform_ticks));
        assert!((600..1200).contains(&state.spawners.turret_ticks));
        assert!((900..1800).contains(&state.spawners.pickup_ticks));
    }

    #[test]
    fn test_spawns_land_ahead_of_player() {
        let mut state = GameState::new(7);
        run_spawners(&mut state);

        let min_x = state.player.pos.x + VIEW_WIDTH;
        let max_x = min_x + state.tuning.spawn.lead_jitter;
        for enemy in &state.enemies {
            assert!(enemy.pos.x >= min_x && enemy.pos.x < max_x);
        }
        for platform in &state.platforms {
            assert!(platform.body.pos.x >= min_x && platform.body.pos.x < max_x);
        }
        for turret in &state.turrets {
            assert!(turret.pos.x >= min_x && turret.pos.x < max_x);
        }
        for pickup in &state.pickups {
            assert!(pickup.pos.x >= min_x && pickup.pos.x < max_x);
        }
    }

    #[test]
    fn test_pending_countdowns_decrement_without_spawning() {
        let mut state = GameState::new(3);
        state.spawners = Spawners {
            enemy_ticks: 5,
            platform_ticks: 6,
            turret_ticks: 7,
            pickup_ticks: 8,
        };

        run_spawners(&mut state);

        assert!(state.enemies.is_empty());
        assert!(state.platforms.is_empty());
        assert!(state.turrets.is_empty());
        assert!(state.pickups.is_empty());
        assert_eq!(state.spawners.enemy_ticks, 4);
        assert_eq!(state.spawners.platform_ticks, 5);
        assert_eq!(state.spawners.turret_ticks, 6);
        assert_eq!(state.spawners.pickup_ticks, 7);
    }

    #[test]
    fn test_enemy_speed_within_tuned_range() {
        let mut state = GameState::new(99);
        for _ in 0..20 {
            state.spawners.enemy_ticks = 0;
            run_spawners(&mut state);
        }
        for enemy in &state.enemies {
            let base = enemy.speed / enemy.kind.speed_multiplier();
            assert!((0.79..1.81).contains(&base), "base speed {base} out of range");
        }
    }
}
