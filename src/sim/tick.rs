//! Per-frame simulation tick
//!
//! Core loop that advances one session deterministically. The update order
//! is load-bearing for scoring parity and must not be rearranged:
//! spawners, input, player, turrets, enemies, projectile hits, removal,
//! projectile motion, pickups, terminal check.

use glam::Vec2;

use super::collision::{self, Contact, SideSnap};
use super::spawn;
use super::state::{GamePhase, GameState, PlayerAnim, Projectile, Tint};
use crate::consts::*;
use crate::ms_to_ticks;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move left (held)
    pub left: bool,
    /// Move right (held)
    pub right: bool,
    /// Jetpack ascend (held)
    pub thrust: bool,
    /// Fire the active weapon (one-shot)
    pub fire: bool,
    /// Pointer aim target in world coordinates
    pub aim: Vec2,
    /// Cycle to the next weapon (one-shot)
    pub cycle_weapon: bool,
    /// Toggle pause (one-shot)
    pub pause: bool,
}

/// Advance the session by one tick.
///
/// While Paused or GameOver nothing advances: no spawns, no countdowns, no
/// physics. Pause is a full-world freeze.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Running,
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;
    // Camera tracks the player position from before this tick's movement
    state.camera_x = state.player.pos.x - VIEW_WIDTH / 2.0;

    spawn::run_spawners(state);

    if input.cycle_weapon {
        state.cycle_weapon();
        log::debug!("weapon selected: {}", state.active_weapon().name);
    }
    if input.fire {
        fire_weapon(state, input.aim);
    }

    update_player(state, input);
    update_turrets(state);
    update_enemies(state);

    let (dead_enemies, used_projectiles) = resolve_projectile_hits(state);

    // Deferred removal: lists are only compacted after the pairwise pass
    let camera_x = state.camera_x;
    state
        .enemies
        .retain(|e| !dead_enemies.contains(&e.id) && e.pos.x >= camera_x);

    update_projectiles(state, &used_projectiles);
    update_pickups(state);
    prune_behind_camera(state);

    if state.invuln_ticks > 0 {
        state.invuln_ticks -= 1;
    }
    if state.player.shoot_ticks > 0 {
        state.player.shoot_ticks -= 1;
    }

    if state.player.health == 0 {
        log::info!(
            "game over at tick {} with score {}",
            state.time_ticks,
            state.score
        );
        state.phase = GamePhase::GameOver;
    }
}

/// Spawn a projectile of the active weapon from the player's center, aimed
/// at the pointer's world position, and arm the transient shoot animation.
fn fire_weapon(state: &mut GameState, aim: Vec2) {
    let weapon = state.active_weapon();
    let origin = state.player.center();
    let to_target = aim - origin;
    let angle = to_target.y.atan2(to_target.x);

    let id = state.next_entity_id();
    state.projectiles.push(Projectile::fired(
        id,
        origin,
        angle,
        weapon.projectile_speed,
        weapon.projectile_gravity,
        weapon.tint,
    ));

    state.player.shoot_ticks = ms_to_ticks(state.tuning.player.shoot_anim_ms);
    state.player.anim = PlayerAnim::Shoot;
}

fn update_player(state: &mut GameState, input: &TickInput) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    // Horizontal velocity is fully input-driven
    player.vel.x = if input.left {
        -tuning.player.move_speed
    } else if input.right {
        tuning.player.move_speed
    } else {
        0.0
    };

    // Thrust and gravity are mutually exclusive within a tick
    let thrusting = input.thrust && player.fuel > 0.0;
    if thrusting {
        player.vel.y = -tuning.player.thrust_power;
        player.fuel = (player.fuel - tuning.player.fuel_drain).max(0.0);
    } else {
        player.vel.y += tuning.gravity;
        player.fuel = (player.fuel + tuning.player.fuel_regen).min(tuning.player.max_fuel);
    }

    player.pos += player.vel;

    player.grounded =
        collision::resolve_floor(&mut player.pos, &mut player.vel, player.size, VIEW_HEIGHT);
    for platform in &state.platforms {
        let contact = collision::resolve_platform(
            &mut player.pos,
            &mut player.vel,
            player.size,
            &platform.body,
            SideSnap::ObstacleWidth,
        );
        if contact == Some(Contact::Top) {
            player.grounded = true;
        }
    }

    // Animation tag: Shoot overlays everything, Jetpack sticks until grounded
    if player.shoot_ticks > 0 {
        player.anim = PlayerAnim::Shoot;
    } else if thrusting {
        player.anim = PlayerAnim::Jetpack;
    } else if player.anim == PlayerAnim::Jetpack && !player.grounded {
        // Coasting after thrust keeps the jetpack tag
    } else if player.vel.x != 0.0 {
        player.anim = PlayerAnim::Run;
    } else {
        player.anim = PlayerAnim::Idle;
    }
}

/// Tick turret cooldowns; an expired cooldown fires at the first live enemy.
///
/// Target selection is deliberately "front of the list", not nearest. The
/// cooldown resets whether or not a shot was possible.
fn update_turrets(state: &mut GameState) {
    let interval = ms_to_ticks(state.tuning.turret.fire_interval_ms);
    let shot_speed = state.tuning.turret.shot_speed;
    let target = state.enemies.first().map(|e| e.pos);

    let mut firing: Vec<Vec2> = Vec::new();
    for turret in &mut state.turrets {
        if turret.cooldown_ticks > 0 {
            turret.cooldown_ticks -= 1;
        }
        if turret.cooldown_ticks == 0 {
            if target.is_some() {
                firing.push(turret.center());
            }
            turret.cooldown_ticks = interval;
        }
    }

    if let Some(target) = target {
        for origin in firing {
            let to_target = target - origin;
            let angle = to_target.y.atan2(to_target.x);
            let id = state.next_entity_id();
            log::debug!("turret shot #{id}");
            state
                .projectiles
                .push(Projectile::fired(id, origin, angle, shot_speed, 0.0, Tint::Blue));
        }
    }
}

fn update_enemies(state: &mut GameState) {
    let GameState {
        enemies,
        platforms,
        player,
        tuning,
        score,
        invuln_ticks,
        ..
    } = state;

    for enemy in enemies.iter_mut() {
        // Gravity always applies to enemies
        enemy.vel.y += tuning.gravity;
        enemy.pos += enemy.vel;

        if collision::resolve_floor(&mut enemy.pos, &mut enemy.vel, enemy.size, VIEW_HEIGHT) {
            enemy.grounded = true;
            enemy.airborne = false;
        }

        for platform in platforms.iter() {
            match collision::resolve_platform(
                &mut enemy.pos,
                &mut enemy.vel,
                enemy.size,
                &platform.body,
                SideSnap::MoverWidth,
            ) {
                Some(Contact::Top) => {
                    enemy.grounded = true;
                    enemy.airborne = false;
                }
                Some(Contact::Left) | Some(Contact::Right) => {
                    // Step-up: jump over the obstacle instead of stopping
                    enemy.vel.y = -tuning.enemy.jump_power;
                    enemy.airborne = true;
                }
                _ => {}
            }
        }

        // Player contact, re-checked every tick the overlap holds. Damage is
        // gated by invulnerability; the pass-through teleport and the
        // encounter score are not.
        if collision::radial_contact(
            player.center(),
            player.radius(),
            enemy.center(),
            enemy.radius(),
        ) {
            if *invuln_ticks == 0 {
                player.take_damage(tuning.enemy.contact_damage * enemy.kind.damage_multiplier());
            }
            enemy.pos.x += enemy.vel.x * tuning.enemy.pass_through_factor;
            *score += tuning.enemy.contact_score * enemy.kind.score_multiplier();
            log::debug!(
                "enemy #{} contact, health {} score {}",
                enemy.id,
                player.health,
                score
            );
        }
    }
}

/// Pairwise projectile/enemy pass over the live lists.
///
/// The first projectile in list order to reach an enemy claims it; a
/// claiming projectile is consumed and checks no further enemies. Returns
/// the claimed enemy ids and consumed projectile ids; removal is deferred
/// to the compaction passes so each pair is evaluated exactly once.
fn resolve_projectile_hits(state: &mut GameState) -> (Vec<u32>, Vec<u32>) {
    let GameState {
        enemies,
        projectiles,
        score,
        tuning,
        ..
    } = state;

    let mut dead_enemies: Vec<u32> = Vec::new();
    let mut used_projectiles: Vec<u32> = Vec::new();

    for enemy in enemies.iter() {
        for projectile in projectiles.iter() {
            if used_projectiles.contains(&projectile.id) {
                continue;
            }
            if collision::radial_contact(
                enemy.center(),
                enemy.radius(),
                projectile.pos,
                PROJECTILE_RADIUS,
            ) {
                dead_enemies.push(enemy.id);
                used_projectiles.push(projectile.id);
                *score += tuning.enemy.kill_score;
                log::debug!("enemy #{} killed by projectile #{}", enemy.id, projectile.id);
                break;
            }
        }
    }

    (dead_enemies, used_projectiles)
}

fn update_projectiles(state: &mut GameState, used: &[u32]) {
    state.projectiles.retain(|p| !used.contains(&p.id));

    for projectile in &mut state.projectiles {
        projectile.vel.y += projectile.gravity;
        projectile.pos += projectile.vel;
    }

    let camera_x = state.camera_x;
    state.projectiles.retain(|p| {
        p.pos.x >= camera_x && p.pos.x <= camera_x + VIEW_WIDTH && p.pos.y <= VIEW_HEIGHT
    });
}

fn update_pickups(state: &mut GameState) {
    let player_box = state.player.aabb();
    let mut grabbed = false;

    state.pickups.retain(|pickup| {
        if pickup.aabb().overlaps(&player_box) {
            log::debug!("pickup #{} grabbed", pickup.id);
            grabbed = true;
            false
        } else {
            true
        }
    });

    if grabbed {
        state.invuln_ticks = ms_to_ticks(state.tuning.pickup.invuln_ms);
    }
}

/// Remove static entities once they are fully behind the camera
fn prune_behind_camera(state: &mut GameState) {
    let camera_x = state.camera_x;
    state.platforms.retain(|p| p.body.right() >= camera_x);
    state.turrets.retain(|t| t.pos.x + t.size.x >= camera_x);
    state.pickups.retain(|p| p.pos.x + p.size.x >= camera_x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::Spawners;
    use crate::sim::state::{Enemy, EnemyKind, Pickup, Platform, Turret};
    use crate::sim::collision::Aabb;

    /// A session with spawners pushed out so the world stays empty
    fn quiet_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.spawners = Spawners::idle();
        state
    }

    fn push_enemy(state: &mut GameState, kind: EnemyKind, pos: Vec2, base_speed: f32) -> u32 {
        let tuning = state.tuning;
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(id, kind, pos, base_speed, &tuning));
        id
    }

    #[test]
    fn test_thrust_lifts_and_drains_fuel() {
        let mut state = quiet_state(1);
        let input = TickInput {
            thrust: true,
            ..Default::default()
        };

        tick(&mut state, &input);

        assert_eq!(state.player.vel.y, -2.0);
        assert_eq!(state.player.fuel, 99.5);
        assert_eq!(state.player.pos.y, 538.0);
        assert_eq!(state.player.anim, PlayerAnim::Jetpack);
    }

    #[test]
    fn test_thrust_without_fuel_is_inert() {
        let mut state = quiet_state(1);
        state.player.fuel = 0.0;
        let input = TickInput {
            thrust: true,
            ..Default::default()
        };

        tick(&mut state, &input);

        // Gravity applied, fuel regenerating
        assert_eq!(state.player.vel.y, 0.5);
        assert_eq!(state.player.pos.y, 540.5);
        assert!((state.player.fuel - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_camera_follows_player() {
        let mut state = quiet_state(1);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.camera_x, PLAYER_SPAWN_X - VIEW_WIDTH / 2.0);
    }

    #[test]
    fn test_walker_closes_at_walk_speed() {
        let mut state = quiet_state(1);
        // Walker resting on the floor, center 200px right of the player's
        // settled center (125, 575). Contact radius sum is 46.5 plus one
        // pixel of slack; with a 16px vertical center offset the horizontal
        // gap must close below ~44.72px, which takes exactly 156 ticks at
        // speed 1.
        push_enemy(&mut state, EnemyKind::Walker, Vec2::new(303.5, 518.0), 1.0);

        let input = TickInput::default();
        for _ in 0..155 {
            tick(&mut state, &input);
        }
        assert_eq!(state.score, 0);
        assert_eq!(state.player.health, 100);

        tick(&mut state, &input);
        assert_eq!(state.score, 10);
        assert_eq!(state.player.health, 90);
        // Teleported past the player's center
        assert!(state.enemies[0].center().x < state.player.center().x);
    }

    #[test]
    fn test_brute_contact_damage_and_score() {
        let mut state = quiet_state(1);
        push_enemy(&mut state, EnemyKind::Brute, Vec2::new(120.0, 518.0), 1.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.health, 70);
        assert_eq!(state.score, 20);
    }

    #[test]
    fn test_invulnerable_contact_scores_and_teleports() {
        let mut state = quiet_state(1);
        state.invuln_ticks = 600;
        push_enemy(&mut state, EnemyKind::Walker, Vec2::new(120.0, 518.0), 1.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.health, 100);
        assert_eq!(state.score, 10);
        // Moved past: one tick of walking plus the 30x pass-through
        assert_eq!(state.enemies[0].pos.x, 89.0);
    }

    #[test]
    fn test_turret_holds_fire_without_enemies() {
        let mut state = quiet_state(1);
        let tuning = state.tuning;
        let id = state.next_entity_id();
        state.turrets.push(Turret::new(id, Vec2::new(300.0, 500.0), &tuning));

        for _ in 0..600 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_turret_fires_at_first_enemy() {
        let mut state = quiet_state(1);
        let tuning = state.tuning;
        let first = push_enemy(&mut state, EnemyKind::Walker, Vec2::new(600.0, 518.0), 1.0);
        push_enemy(&mut state, EnemyKind::Walker, Vec2::new(700.0, 518.0), 1.0);
        let id = state.next_entity_id();
        state.turrets.push(Turret::new(id, Vec2::new(300.0, 460.0), &tuning));
        assert!(first < id);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.projectiles.len(), 1);
        let shot = &state.projectiles[0];
        assert_eq!(shot.gravity, 0.0);
        assert_eq!(shot.tint, Tint::Blue);

        // Aimed from the turret center at the first enemy's pre-move corner
        let origin = Vec2::new(315.0, 475.0);
        let to_target = Vec2::new(600.0, 518.0) - origin;
        let expected = to_target.normalize() * state.tuning.turret.shot_speed;
        assert!((shot.vel - expected).length() < 1e-3);
    }

    #[test]
    fn test_turret_cooldown_interval() {
        let mut state = quiet_state(1);
        let tuning = state.tuning;
        let id = state.next_entity_id();
        state.turrets.push(Turret::new(id, Vec2::new(300.0, 460.0), &tuning));
        // Enemy far away and slow so it stays alive and out of reach
        push_enemy(&mut state, EnemyKind::Walker, Vec2::new(5000.0, 518.0), 0.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.projectiles.len(), 1);
        state.projectiles.clear();

        // No second shot until the 240-tick interval elapses
        for _ in 0..239 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.projectiles.is_empty());
        tick(&mut state, &TickInput::default());
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_projectile_kill_awards_once() {
        let mut state = quiet_state(1);
        push_enemy(&mut state, EnemyKind::Walker, Vec2::new(400.0, 518.0), 1.0);
        // Enemy center after its one tick of movement
        let contact_point = Vec2::new(399.0 + 21.5, 559.0);

        for _ in 0..2 {
            let id = state.next_entity_id();
            state.projectiles.push(Projectile {
                id,
                pos: contact_point,
                vel: Vec2::ZERO,
                gravity: 0.0,
                tint: Tint::Yellow,
            });
        }
        let second_id = state.projectiles[1].id;

        tick(&mut state, &TickInput::default());

        // One kill, one award, first projectile consumed
        assert_eq!(state.score, 50);
        assert!(state.enemies.is_empty());
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].id, second_id);
    }

    #[test]
    fn test_projectile_motion_and_bounds() {
        let mut state = quiet_state(1);

        // Arcs under its own gravity scalar
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos: Vec2::new(0.0, 100.0),
            vel: Vec2::new(5.0, 0.0),
            gravity: 0.1,
            tint: Tint::Red,
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.projectiles.len(), 1);
        assert!((state.projectiles[0].vel.y - 0.1).abs() < 1e-6);
        assert!((state.projectiles[0].pos.x - 5.0).abs() < 1e-6);

        // Crossing the right viewport edge removes it
        state.projectiles[0].pos = Vec2::new(495.0, 100.0);
        state.projectiles[0].vel = Vec2::new(50.0, 0.0);
        state.projectiles[0].gravity = 0.0;
        tick(&mut state, &TickInput::default());
        assert!(state.projectiles.is_empty());

        // Falling below the floor removes it
        let id = state.next_entity_id();
        state.projectiles.push(Projectile {
            id,
            pos: Vec2::new(0.0, 590.0),
            vel: Vec2::new(0.0, 20.0),
            gravity: 0.0,
            tint: Tint::Blue,
        });
        tick(&mut state, &TickInput::default());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_fire_weapon_spawns_aimed_projectile() {
        let mut state = quiet_state(1);
        let origin = state.player.center();
        let input = TickInput {
            fire: true,
            aim: origin + Vec2::new(10.0, -10.0),
            ..Default::default()
        };

        tick(&mut state, &input);

        assert_eq!(state.projectiles.len(), 1);
        let shot = &state.projectiles[0];
        assert_eq!(shot.tint, Tint::Yellow);
        assert!(shot.vel.x > 0.0);
        assert!(shot.vel.y < 0.0);
        // One tick of motion from the player's center
        let fired_vel = Vec2::new(10.0, -10.0).normalize() * 15.0;
        let expected_pos = origin + fired_vel + Vec2::new(0.0, 0.1);
        assert!((shot.pos - expected_pos).length() < 1e-3);

        // Transient shoot tag armed and counting down
        assert_eq!(state.player.anim, PlayerAnim::Shoot);
        assert_eq!(state.player.shoot_ticks, 17);

        for _ in 0..18 {
            tick(&mut state, &TickInput::default());
        }
        assert_ne!(state.player.anim, PlayerAnim::Shoot);
    }

    #[test]
    fn test_pickup_grants_invulnerability_and_is_removed() {
        let mut state = quiet_state(1);
        let tuning = state.tuning;
        let id = state.next_entity_id();
        state
            .pickups
            .push(Pickup::new(id, Vec2::new(110.0, 550.0), &tuning));

        tick(&mut state, &TickInput::default());

        assert!(state.pickups.is_empty());
        assert!(state.invulnerable());
        // Set to the full window, then one end-of-tick decrement
        assert_eq!(state.invuln_ticks, 599);
    }

    #[test]
    fn test_invulnerability_expires() {
        let mut state = quiet_state(1);
        state.invuln_ticks = 3;
        for _ in 0..3 {
            tick(&mut state, &TickInput::default());
        }
        assert!(!state.invulnerable());
    }

    #[test]
    fn test_enemy_steps_up_platform_side() {
        let mut state = quiet_state(1);
        state.platforms.push(Platform {
            id: 999,
            body: Aabb::new(Vec2::new(200.0, 550.0), Vec2::new(50.0, 50.0)),
        });
        push_enemy(&mut state, EnemyKind::Walker, Vec2::new(260.0, 518.0), 1.0);

        // Walks left one pixel per tick; first overlap at x = 249
        for _ in 0..11 {
            tick(&mut state, &TickInput::default());
        }

        let enemy = &state.enemies[0];
        assert_eq!(enemy.vel.y, -10.0);
        assert!(enemy.airborne);
        // Snapped by its own width, not the platform's
        assert_eq!(enemy.pos.x, 243.0);
    }

    #[test]
    fn test_resting_on_platform_is_stable() {
        let mut state = quiet_state(1);
        state.platforms.push(Platform {
            id: 999,
            body: Aabb::new(Vec2::new(100.0, 400.0), Vec2::new(50.0, 50.0)),
        });
        state.player.pos = Vec2::new(110.0, 350.0);
        state.player.vel = Vec2::ZERO;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.pos, Vec2::new(110.0, 350.0));
        assert_eq!(state.player.vel.y, 0.0);
        assert!(state.player.grounded);
    }

    #[test]
    fn test_entities_pruned_behind_camera() {
        let mut state = quiet_state(1);
        // Camera sits at -300 with the player at spawn
        push_enemy(&mut state, EnemyKind::Walker, Vec2::new(-350.0, 518.0), 1.0);
        state.platforms.push(Platform {
            id: 900,
            body: Aabb::new(Vec2::new(-400.0, 500.0), Vec2::new(50.0, 50.0)),
        });
        let tuning = state.tuning;
        let id = state.next_entity_id();
        state.turrets.push(Turret::new(id, Vec2::new(-400.0, 500.0), &tuning));
        let id = state.next_entity_id();
        state.pickups.push(Pickup::new(id, Vec2::new(-400.0, 300.0), &tuning));

        tick(&mut state, &TickInput::default());

        assert!(state.enemies.is_empty());
        assert!(state.platforms.is_empty());
        assert!(state.turrets.is_empty());
        assert!(state.pickups.is_empty());
    }

    #[test]
    fn test_pause_freezes_the_world() {
        let mut state = GameState::new(5);
        state.invuln_ticks = 50;

        tick(&mut state, &TickInput { pause: true, ..Default::default() });
        assert_eq!(state.phase, GamePhase::Paused);

        let frozen = serde_json::to_string(&state).unwrap();
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(serde_json::to_string(&state).unwrap(), frozen);

        tick(&mut state, &TickInput { pause: true, ..Default::default() });
        assert_eq!(state.phase, GamePhase::Running);
        let ticks_before = state.time_ticks;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, ticks_before + 1);
    }

    #[test]
    fn test_game_over_is_terminal_until_reset() {
        let mut state = quiet_state(1);
        state.player.health = 10;
        push_enemy(&mut state, EnemyKind::Walker, Vec2::new(120.0, 518.0), 1.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);

        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, ticks);

        state.reset(2);
        assert_eq!(state.phase, GamePhase::Running);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_same_seed_same_inputs_is_deterministic() {
        let mut a = GameState::new(99_999);
        let mut b = GameState::new(99_999);

        for i in 0..300u32 {
            let input = TickInput {
                right: i % 3 != 0,
                thrust: i % 5 == 0,
                fire: i % 60 == 0,
                aim: Vec2::new(600.0 + i as f32, 300.0),
                cycle_weapon: i % 120 == 0,
                ..Default::default()
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            /// Fuel stays in [0, 100] and health never increases, whatever
            /// the input trace does.
            #[test]
            fn fuel_and_health_stay_bounded(
                seed in 0u64..1000,
                trace in prop::collection::vec(any::<(bool, bool, bool, bool)>(), 200),
            ) {
                let mut state = GameState::new(seed);
                let mut last_health = state.player.health;

                for (left, right, thrust, fire) in trace {
                    let input = TickInput {
                        left,
                        right,
                        thrust,
                        fire,
                        aim: Vec2::new(500.0, 300.0),
                        ..Default::default()
                    };
                    tick(&mut state, &input);

                    prop_assert!(state.player.fuel >= 0.0);
                    prop_assert!(state.player.fuel <= state.tuning.player.max_fuel);
                    prop_assert!(state.player.health <= last_health);
                    last_health = state.player.health;
                }
            }

            /// Score is monotonically non-decreasing within a session.
            #[test]
            fn score_is_monotonic(seed in 0u64..1000, ticks in 1usize..400) {
                let mut state = GameState::new(seed);
                let mut last_score = 0;
                let input = TickInput {
                    right: true,
                    ..Default::default()
                };
                for _ in 0..ticks {
                    tick(&mut state, &input);
                    prop_assert!(state.score >= last_score);
                    last_score = state.score;
                }
            }
        }
    }
}
