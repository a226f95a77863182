//! Combat and mining resolution
//!
//! The three player-triggered actions: melee swing around the player,
//! pointer attack on creatures, and pointer-driven tile excavation.

use glam::Vec2;

use crate::audio::SoundCue;
use crate::game::particles::{spawn_burst, Particle};
use crate::game::session::{Session, Status, SHARD_GOAL};
use crate::world::Resource;

/// Melee swing reach around the player, in pixels (1.5 tiles)
pub const MELEE_RADIUS: f32 = 24.0;
pub const MELEE_DAMAGE: i32 = 25;
/// Pointer attack reach around the click point
pub const POINTER_RADIUS: f32 = 16.0;
pub const POINTER_DAMAGE: i32 = 15;
/// Health restored per hostile killed by pointer attack
pub const KILL_HEAL: i32 = 5;
/// Maximum distance from player to a mineable tile's center (3.5 tiles)
pub const MINE_REACH: f32 = 56.0;
/// Durability removed per mining press
pub const MINE_POWER: i32 = 8;

/// Screen shake on a breaking tile
const BREAK_SHAKE: f32 = 4.0;
/// Debris color for struck creatures
const HIT_COLOR: (u8, u8, u8) = (220, 70, 70);
const HIT_PARTICLES: usize = 6;
const MINE_PARTICLES: usize = 5;

/// Melee attack: hit every hostile within reach of the player. A no-op
/// while the attack cooldown runs.
pub fn melee_attack(session: &mut Session) {
    if session.status != Status::Playing {
        return;
    }
    if !session.player.begin_attack() {
        return;
    }
    let origin = session.player.position;
    strike_hostiles(session, origin, MELEE_RADIUS, MELEE_DAMAGE, false);
}

/// Pointer press: attack hostiles around the click point; if none were hit,
/// mine the tile under it. A hit always takes priority over mining.
pub fn pointer_action(session: &mut Session, world: Vec2) {
    if session.status != Status::Playing {
        return;
    }
    let hit = strike_hostiles(session, world, POINTER_RADIUS, POINTER_DAMAGE, true);
    if hit == 0 {
        mine_tile(session, world);
    }
}

/// Damage every hostile within `radius` of `origin`. Dead hostiles are
/// removed before returning; pointer kills heal the player. Returns the
/// number of hostiles struck.
fn strike_hostiles(
    session: &mut Session,
    origin: Vec2,
    radius: f32,
    damage: i32,
    heal_on_kill: bool,
) -> usize {
    let mut struck = 0;
    for hostile in session.hostiles.iter_mut() {
        if hostile.position.distance(origin) <= radius {
            hostile.take_damage(damage);
            struck += 1;
            spawn_burst(
                &mut session.particles,
                hostile.position,
                HIT_COLOR,
                HIT_PARTICLES,
                &mut session.rng,
            );
        }
    }

    let before = session.hostiles.len();
    session.hostiles.retain(|h| !h.is_dead());
    let killed = (before - session.hostiles.len()) as i32;

    if heal_on_kill && killed > 0 {
        session.player.heal(KILL_HEAL * killed);
    }
    if struck > 0 {
        session.cues.push(SoundCue::EnemyHit);
    }
    struck
}

/// Chip the tile under the pointer. Air tiles and tiles out of reach are
/// left untouched.
fn mine_tile(session: &mut Session, world: Vec2) {
    let Some((tx, ty)) = session.grid.tile_at_pixel(world) else {
        return;
    };
    let center = session.grid.tile_center(tx, ty);
    if center.distance(session.player.position) > MINE_REACH {
        return;
    }

    let (kind, broken) = {
        let Some(tile) = session.grid.get_mut(tx, ty) else {
            return;
        };
        if tile.is_air() {
            return;
        }
        (tile.kind, tile.apply_damage(MINE_POWER))
    };

    spawn_burst(
        &mut session.particles,
        center,
        kind.particle_color(),
        MINE_PARTICLES,
        &mut session.rng,
    );
    session.cues.push(SoundCue::Mine);

    if broken {
        session.shake = session.shake.max(BREAK_SHAKE);
        if let Some(resource) = kind.resource() {
            award_resource(session, resource, center);
        }
        if let Some(tile) = session.grid.get_mut(tx, ty) {
            tile.clear();
        }
    }
}

/// Credit a collected resource, float its pickup label, and evaluate the
/// win condition.
fn award_resource(session: &mut Session, resource: Resource, position: Vec2) {
    match resource {
        Resource::Gold => session.gold += 1,
        Resource::Shard => session.shards += 1,
        Resource::Diamond => session.diamonds += 1,
    }
    session
        .particles
        .push(Particle::label(position, resource.label(), resource.color()));

    if resource == Resource::Shard && session.shards >= SHARD_GOAL {
        session.set_status(Status::Won);
        session.cues.push(SoundCue::StopAmbient);
        log::info!("Shard goal reached, session won");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Entity, EntityKind, ATTACK_COOLDOWN};
    use crate::world::TileKind;

    fn playing_session() -> Session {
        let mut session = Session::new(Some(42));
        session.start();
        session.cues.clear();
        session
    }

    fn place_hostile(session: &mut Session, offset: Vec2) -> u32 {
        let id = 900 + session.hostiles.len() as u32;
        let pos = session.player.position + offset;
        session
            .hostiles
            .push(Entity::hostile(id, EntityKind::Zombie, pos));
        id
    }

    #[test]
    fn test_melee_noop_while_cooldown_runs() {
        let mut session = playing_session();
        session.hostiles.clear();
        place_hostile(&mut session, Vec2::new(10.0, 0.0));

        melee_attack(&mut session);
        let health_after_first = session.hostiles[0].health;
        assert!(health_after_first < EntityKind::Zombie.max_health());

        // Second swing is swallowed by the cooldown
        melee_attack(&mut session);
        assert_eq!(session.hostiles[0].health, health_after_first);
        assert_eq!(session.player.attack_cooldown, ATTACK_COOLDOWN);
    }

    #[test]
    fn test_melee_misses_out_of_range() {
        let mut session = playing_session();
        session.hostiles.clear();
        place_hostile(&mut session, Vec2::new(MELEE_RADIUS + 5.0, 0.0));
        let particles_before = session.particles.len();

        melee_attack(&mut session);

        assert_eq!(session.hostiles[0].health, EntityKind::Zombie.max_health());
        assert_eq!(session.particles.len(), particles_before);
        // The swing itself still happened
        assert!(session.player.is_attacking);
        assert_eq!(session.player.attack_cooldown, ATTACK_COOLDOWN);
    }

    #[test]
    fn test_melee_kill_removes_hostile_without_heal() {
        let mut session = playing_session();
        session.hostiles.clear();
        place_hostile(&mut session, Vec2::new(8.0, 0.0));
        session.hostiles[0].health = 1;
        session.player.health = 50;

        melee_attack(&mut session);

        assert!(session.hostiles.is_empty());
        assert_eq!(session.player.health, 50);
    }

    #[test]
    fn test_pointer_kill_heals_player() {
        let mut session = playing_session();
        session.hostiles.clear();
        let target = session.player.position + Vec2::new(60.0, 0.0);
        place_hostile(&mut session, Vec2::new(60.0, 0.0));
        session.hostiles[0].health = 5;
        session.player.health = 50;

        pointer_action(&mut session, target);

        assert!(session.hostiles.is_empty());
        assert_eq!(session.player.health, 50 + KILL_HEAL);
    }

    #[test]
    fn test_pointer_heal_caps_at_max() {
        let mut session = playing_session();
        session.hostiles.clear();
        let target = session.player.position + Vec2::new(60.0, 0.0);
        place_hostile(&mut session, Vec2::new(60.0, 0.0));
        session.hostiles[0].health = 5;

        pointer_action(&mut session, target);
        assert_eq!(session.player.health, session.player.max_health);
    }

    #[test]
    fn test_pointer_hit_suppresses_mining() {
        let mut session = playing_session();
        session.hostiles.clear();
        // A solid tile right next to the player, with a hostile on it
        let target = session.player.position + Vec2::new(30.0, 0.0);
        let (tx, ty) = session.grid.tile_at_pixel(target).unwrap();
        session.grid.set(tx, ty, TileKind::Stone);
        place_hostile(&mut session, Vec2::new(30.0, 0.0));

        pointer_action(&mut session, target);

        let tile = session.grid.get(tx, ty).unwrap();
        assert_eq!(tile.durability, tile.max_durability, "tile must not be mined");
        assert!(session.hostiles[0].health < EntityKind::Zombie.max_health());
    }

    #[test]
    fn test_mining_air_is_noop() {
        let mut session = playing_session();
        session.hostiles.clear();
        let target = session.player.position + Vec2::new(30.0, 0.0);
        let (tx, ty) = session.grid.tile_at_pixel(target).unwrap();
        session.grid.set(tx, ty, TileKind::Air);

        let particles_before = session.particles.len();
        let shake_before = session.shake;
        let counters_before = (session.shards, session.gold, session.diamonds);

        pointer_action(&mut session, target);

        assert_eq!(session.particles.len(), particles_before);
        assert_eq!(session.shake, shake_before);
        assert_eq!(
            (session.shards, session.gold, session.diamonds),
            counters_before
        );
        assert!(session.cues.is_empty());
    }

    #[test]
    fn test_mining_out_of_reach_is_noop() {
        let mut session = playing_session();
        session.hostiles.clear();
        let target = session.player.position + Vec2::new(MINE_REACH + 40.0, 0.0);
        if let Some((tx, ty)) = session.grid.tile_at_pixel(target) {
            session.grid.set(tx, ty, TileKind::Stone);
            pointer_action(&mut session, target);
            let tile = session.grid.get(tx, ty).unwrap();
            assert_eq!(tile.durability, tile.max_durability);
        }
    }

    #[test]
    fn test_mining_depletes_and_breaks() {
        let mut session = playing_session();
        session.hostiles.clear();
        let target = session.player.position + Vec2::new(30.0, 0.0);
        let (tx, ty) = session.grid.tile_at_pixel(target).unwrap();
        session.grid.set(tx, ty, TileKind::Stone);

        // Stone takes two presses at 8 durability each
        pointer_action(&mut session, target);
        assert_eq!(
            session.grid.get(tx, ty).unwrap().durability,
            TileKind::Stone.max_durability() - MINE_POWER
        );
        assert!(session.cues.contains(&SoundCue::Mine));

        pointer_action(&mut session, target);
        assert!(session.grid.get(tx, ty).unwrap().is_air());
        assert!(session.shake > 0.0);
    }

    #[test]
    fn test_low_durability_tile_breaks_in_one_press() {
        let mut session = playing_session();
        session.hostiles.clear();
        let target = session.player.position + Vec2::new(30.0, 0.0);
        let (tx, ty) = session.grid.tile_at_pixel(target).unwrap();
        session.grid.set(tx, ty, TileKind::Shard);
        // Force a weaker tile than the mining power
        {
            let tile = session.grid.get_mut(tx, ty).unwrap();
            tile.durability = 5;
            tile.max_durability = 5;
        }

        pointer_action(&mut session, target);

        assert!(session.grid.get(tx, ty).unwrap().is_air());
        assert_eq!(session.shards, 1);
        assert!(session
            .particles
            .iter()
            .any(|p| p.label.as_deref() == Some("+1 SHARD")));
    }

    #[test]
    fn test_tenth_shard_wins_in_same_action() {
        let mut session = playing_session();
        session.hostiles.clear();
        session.shards = SHARD_GOAL - 1;
        let target = session.player.position + Vec2::new(30.0, 0.0);
        let (tx, ty) = session.grid.tile_at_pixel(target).unwrap();
        session.grid.set(tx, ty, TileKind::Shard);
        if let Some(tile) = session.grid.get_mut(tx, ty) {
            tile.durability = MINE_POWER;
        }

        pointer_action(&mut session, target);

        assert_eq!(session.shards, SHARD_GOAL);
        assert_eq!(session.status, Status::Won);
        assert!(session.cues.contains(&SoundCue::StopAmbient));
    }

    #[test]
    fn test_actions_are_inert_outside_playing() {
        let mut session = playing_session();
        session.set_status(Status::Won);
        let target = session.player.position + Vec2::new(30.0, 0.0);
        let snapshot_cooldown = session.player.attack_cooldown;

        melee_attack(&mut session);
        pointer_action(&mut session, target);

        assert_eq!(session.player.attack_cooldown, snapshot_cooldown);
        assert!(!session.player.is_attacking);
    }
}
