//! Game session
//!
//! The whole-state snapshot handed between simulation and presentation each
//! tick, plus the top-level status state machine.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::audio::SoundCue;
use crate::entities::Entity;
use crate::world::generation;
use crate::world::{TileGrid, GRID_WIDTH, TILE_SIZE};

use super::particles::Particle;

/// Shards required to win a session
pub const SHARD_GOAL: u32 = 10;
/// Viewport size in pixels; the camera centers the player in it
pub const VIEW_WIDTH: f32 = 800.0;
pub const VIEW_HEIGHT: f32 = 600.0;

/// Top-level session status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Menu,
    Playing,
    Won,
    Lost,
}

/// One play-through's complete state. Replaced wholesale by every tick;
/// collaborators only ever read it.
#[derive(Debug, Clone)]
pub struct Session {
    pub status: Status,
    pub player: Entity,
    pub hostiles: Vec<Entity>,
    pub grid: TileGrid,
    pub shards: u32,
    pub gold: u32,
    pub diamonds: u32,
    /// Top-left of the viewport in world pixels
    pub camera: Vec2,
    /// Tile under the pointer, if any
    pub hovered_tile: Option<(i32, i32)>,
    pub particles: Vec<Particle>,
    /// Screen-shake magnitude, decaying exponentially
    pub shake: f32,
    /// Sound cues emitted this tick, drained by the audio collaborator
    pub cues: Vec<SoundCue>,
    pub(crate) rng: StdRng,
}

impl Session {
    /// Create a session at the menu, with a world already generated behind it
    pub fn new(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let (grid, hostiles) = generation::generate(&mut rng);
        let player = Entity::player(player_spawn());

        let mut session = Self {
            status: Status::Menu,
            player,
            hostiles,
            grid,
            shards: 0,
            gold: 0,
            diamonds: 0,
            camera: Vec2::ZERO,
            hovered_tile: None,
            particles: Vec::new(),
            shake: 0.0,
            cues: Vec::new(),
            rng,
        };
        session.center_camera();
        session
    }

    /// Start playing: regenerate the world and reset every counter
    pub fn start(&mut self) {
        let (grid, hostiles) = generation::generate(&mut self.rng);
        self.grid = grid;
        self.hostiles = hostiles;
        self.player = Entity::player(player_spawn());
        self.shards = 0;
        self.gold = 0;
        self.diamonds = 0;
        self.hovered_tile = None;
        self.particles.clear();
        self.shake = 0.0;
        self.cues.clear();
        self.center_camera();
        self.cues.push(SoundCue::StartAmbient);
        self.set_status(Status::Playing);
        log::info!("Session started");
    }

    /// Restart after a terminal state; identical to a fresh start
    pub fn restart(&mut self) {
        self.start();
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        log::debug!("Status transition: {:?} -> {:?}", self.status, status);
        self.status = status;
    }

    /// Snap the camera so the player sits in the viewport center
    pub(crate) fn center_camera(&mut self) {
        self.camera = self.player.position - Vec2::new(VIEW_WIDTH, VIEW_HEIGHT) / 2.0;
    }
}

/// Player start position: center column, in the sky just above the grass
fn player_spawn() -> Vec2 {
    Vec2::new(
        (GRID_WIDTH as f32 / 2.0 + 0.5) * TILE_SIZE,
        4.5 * TILE_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::HOSTILE_COUNT;
    use crate::world::GRID_HEIGHT;

    #[test]
    fn test_new_session_is_at_menu() {
        let session = Session::new(Some(1));
        assert_eq!(session.status, Status::Menu);
        assert_eq!(session.shards, 0);
        assert_eq!(session.hostiles.len(), HOSTILE_COUNT);
        assert_eq!(session.grid.width, GRID_WIDTH);
        assert_eq!(session.grid.height, GRID_HEIGHT);
    }

    #[test]
    fn test_start_resets_counters_and_plays() {
        let mut session = Session::new(Some(2));
        session.shards = 7;
        session.gold = 3;
        session.shake = 5.0;
        session.start();

        assert_eq!(session.status, Status::Playing);
        assert_eq!(session.shards, 0);
        assert_eq!(session.gold, 0);
        assert_eq!(session.diamonds, 0);
        assert_eq!(session.shake, 0.0);
        assert!(session.particles.is_empty());
        assert_eq!(session.player.health, session.player.max_health);
        assert!(session.cues.contains(&SoundCue::StartAmbient));
    }

    #[test]
    fn test_restart_regenerates_world() {
        let mut session = Session::new(Some(3));
        session.start();
        session.player.health = 0;
        session.hostiles.clear();
        session.set_status(Status::Lost);
        session.restart();

        assert_eq!(session.status, Status::Playing);
        assert_eq!(session.hostiles.len(), HOSTILE_COUNT);
        assert_eq!(session.player.health, session.player.max_health);
    }

    #[test]
    fn test_camera_centers_player() {
        let session = Session::new(Some(4));
        let expected = session.player.position - Vec2::new(VIEW_WIDTH, VIEW_HEIGHT) / 2.0;
        assert_eq!(session.camera, expected);
    }
}
