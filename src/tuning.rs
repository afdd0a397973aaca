//! Data-driven game balance
//!
//! Every gameplay rate and threshold lives here so a session can be built
//! from modified balance without touching sim code. Persisted separately
//! from high scores in LocalStorage.

use serde::{Deserialize, Serialize};

/// Player movement, fuel, and health balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerTuning {
    /// Bounding box size
    pub width: f32,
    pub height: f32,
    /// Horizontal run speed (px per tick, fully input-driven)
    pub move_speed: f32,
    /// Upward jetpack velocity while thrusting (px per tick)
    pub thrust_power: f32,
    /// Fuel drained per tick of thrust
    pub fuel_drain: f32,
    /// Fuel regenerated per tick when not thrusting
    pub fuel_regen: f32,
    /// Fuel capacity
    pub max_fuel: f32,
    /// Starting and maximum health
    pub max_health: u32,
    /// Duration of the transient shoot animation tag (ms)
    pub shoot_anim_ms: u32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            move_speed: 5.0,
            thrust_power: 2.0,
            fuel_drain: 0.5,
            fuel_regen: 0.1,
            max_fuel: 100.0,
            max_health: 100,
            shoot_anim_ms: 300,
        }
    }
}

/// Enemy movement and scoring balance
///
/// Per-variant multipliers (Runner speed, Brute damage/score) are fixed on
/// [`crate::sim::EnemyKind`]; these are the shared base values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyTuning {
    /// Bounding box size
    pub width: f32,
    pub height: f32,
    /// Walk speed is sampled uniformly from [min_speed, max_speed) at spawn
    pub min_speed: f32,
    pub max_speed: f32,
    /// Upward impulse applied on a side collision with a platform
    pub jump_power: f32,
    /// Health removed from the player on contact (base variant)
    pub contact_damage: u32,
    /// Score awarded for surviving a contact (base variant)
    pub contact_score: u64,
    /// Score awarded for a projectile kill (all variants)
    pub kill_score: u64,
    /// Horizontal velocity multiple applied to teleport a contacting enemy
    /// past the player
    pub pass_through_factor: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            width: 43.0,
            height: 82.0,
            min_speed: 0.8,
            max_speed: 1.8,
            jump_power: 10.0,
            contact_damage: 10,
            contact_score: 10,
            kill_score: 50,
            pass_through_factor: 30.0,
        }
    }
}

/// Turret (defense) balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurretTuning {
    /// Bounding box size (square)
    pub size: f32,
    /// Minimum interval between shots (ms)
    pub fire_interval_ms: u32,
    /// Shot speed (px per tick, zero gravity)
    pub shot_speed: f32,
}

impl Default for TurretTuning {
    fn default() -> Self {
        Self {
            size: 30.0,
            fire_interval_ms: 4000,
            shot_speed: 10.0,
        }
    }
}

/// Pickup balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupTuning {
    /// Bounding box size (square)
    pub size: f32,
    /// Invulnerability window granted on grab (ms)
    pub invuln_ms: u32,
}

impl Default for PickupTuning {
    fn default() -> Self {
        Self {
            size: 20.0,
            invuln_ms: 10_000,
        }
    }
}

/// Spawner schedule windows, in milliseconds of simulated time.
///
/// Each spawner samples its next delay uniformly from [min, max). All
/// spawners place entities one viewport ahead of the player plus a jitter
/// of up to `lead_jitter` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTuning {
    pub enemy_delay_ms: [u32; 2],
    pub platform_delay_ms: [u32; 2],
    pub turret_delay_ms: [u32; 2],
    pub pickup_delay_ms: [u32; 2],
    /// Random extra horizontal lead past the viewport edge
    pub lead_jitter: f32,
    /// Platform size (square)
    pub platform_size: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            enemy_delay_ms: [2000, 5000],
            platform_delay_ms: [3000, 6000],
            turret_delay_ms: [10_000, 20_000],
            pickup_delay_ms: [15_000, 30_000],
            lead_jitter: 200.0,
            platform_size: 50.0,
        }
    }
}

/// Complete balance set for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration per tick for everything not thrusting
    pub gravity: f32,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub turret: TurretTuning,
    pub pickup: PickupTuning,
    pub spawn: SpawnTuning,
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "jetpack_horde_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            turret: TurretTuning::default(),
            pickup: PickupTuning::default(),
            spawn: SpawnTuning::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_balance_values() {
        let t = Tuning::default();
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.player.move_speed, 5.0);
        assert_eq!(t.player.thrust_power, 2.0);
        assert_eq!(t.player.fuel_drain, 0.5);
        assert_eq!(t.player.fuel_regen, 0.1);
        assert_eq!(t.enemy.contact_damage, 10);
        assert_eq!(t.enemy.kill_score, 50);
        assert_eq!(t.turret.fire_interval_ms, 4000);
        assert_eq!(t.pickup.invuln_ms, 10_000);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuning);
    }
}
