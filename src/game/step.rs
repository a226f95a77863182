//! Simulation step
//!
//! The fixed-step per-tick update: action resolution, axis-separated
//! movement, hostile pursuit, effects lifecycle, and terminal-condition
//! evaluation. Each call reads one snapshot and produces the next.

use glam::Vec2;

use crate::audio::SoundCue;
use crate::combat;
use crate::entities::{Entity, DAMAGE_COOLDOWN};
use crate::world::TileGrid;

use super::input::InputState;
use super::particles::spawn_burst;
use super::session::{Session, Status};

/// Player movement speed per axis, pixels per tick
pub const PLAYER_SPEED: f32 = 2.5;
/// Hostile pursuit speed per axis, pixels per tick
pub const HOSTILE_SPEED: f32 = 1.2;
/// Distance at which hostiles notice and chase the player (10 tiles)
pub const AGGRO_RANGE: f32 = 160.0;
/// Distance at which a hostile deals contact damage
pub const CONTACT_RANGE: f32 = 14.0;
pub const CONTACT_DAMAGE: i32 = 10;
/// Multiplicative screen-shake decay per tick
pub const SHAKE_DECAY: f32 = 0.85;

/// Screen shake when the player takes contact damage
const HURT_SHAKE: f32 = 6.0;
const HURT_COLOR: (u8, u8, u8) = (220, 70, 70);
const HURT_PARTICLES: usize = 6;

impl Session {
    /// Advance the simulation one tick, producing the next snapshot.
    /// Outside of Playing this returns an unchanged copy (with an empty cue
    /// queue); input is sampled exactly once at the start of the tick.
    pub fn step(&self, input: &InputState) -> Session {
        let mut next = self.clone();
        next.cues.clear();
        if next.status != Status::Playing {
            return next;
        }

        // Cooldowns decay before anything else acts this tick
        next.player.tick_cooldowns();

        // Discrete actions sampled at tick start
        if input.attack {
            combat::melee_attack(&mut next);
        }
        for press in &input.pointer_presses {
            combat::pointer_action(&mut next, *press);
        }
        next.hovered_tile = input.pointer.and_then(|p| next.grid.tile_at_pixel(p));
        if next.status != Status::Playing {
            // An action ended the session (shard goal); the world freezes
            return next;
        }

        // Player movement, one axis at a time so bodies slide along walls
        let intent = input.movement();
        next.player.face_toward(intent.x);
        move_axis(&next.grid, &mut next.player, intent.x * PLAYER_SPEED, 0.0);
        move_axis(&next.grid, &mut next.player, 0.0, intent.y * PLAYER_SPEED);

        next.center_camera();
        next.shake *= SHAKE_DECAY;

        // Effects lifecycle
        next.particles.retain_mut(|p| {
            p.advance();
            !p.is_expired()
        });

        // Hostile pursuit and contact damage
        let player_pos = next.player.position;
        for hostile in next.hostiles.iter_mut() {
            if hostile.position.distance(player_pos) <= AGGRO_RANGE {
                let delta = player_pos - hostile.position;
                hostile.face_toward(delta.x);
                let dx = delta.x.clamp(-HOSTILE_SPEED, HOSTILE_SPEED);
                let dy = delta.y.clamp(-HOSTILE_SPEED, HOSTILE_SPEED);
                move_axis(&next.grid, hostile, dx, 0.0);
                move_axis(&next.grid, hostile, 0.0, dy);
            }

            if hostile.position.distance(next.player.position) <= CONTACT_RANGE
                && next.player.can_take_contact_damage()
            {
                next.player.take_damage(CONTACT_DAMAGE);
                next.player.damage_cooldown = DAMAGE_COOLDOWN;
                next.shake = next.shake.max(HURT_SHAKE);
                next.cues.push(SoundCue::Hit);
                spawn_burst(
                    &mut next.particles,
                    next.player.position,
                    HURT_COLOR,
                    HURT_PARTICLES,
                    &mut next.rng,
                );
            }
        }

        if next.player.is_dead() {
            next.set_status(Status::Lost);
            next.cues.push(SoundCue::StopAmbient);
            log::info!("Player health depleted, session lost");
        }

        next
    }
}

/// Attempt a single-axis move, rejecting it entirely if the destination
/// collides with the grid
fn move_axis(grid: &TileGrid, entity: &mut Entity, dx: f32, dy: f32) {
    if dx == 0.0 && dy == 0.0 {
        return;
    }
    let size = entity.size();
    let origin = entity.body_origin() + Vec2::new(dx, dy);
    if !grid.is_solid_rect(origin.x, origin.y, size.x, size.y) {
        entity.position += Vec2::new(dx, dy);
    }
}
