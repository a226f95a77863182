//! Entity model
//!
//! Shared representation for the player and hostile creatures: position,
//! health, facing, and action cooldowns.

pub mod hostiles;

use glam::Vec2;

pub use hostiles::{spawn_hostiles, HOSTILE_COUNT};

/// Ticks between melee swings
pub const ATTACK_COOLDOWN: i32 = 30;
/// The attacking flag clears once the cooldown counts below this (the tail
/// of the swing is wind-down, not an active hit)
pub const ATTACK_WINDDOWN: i32 = ATTACK_COOLDOWN * 3 / 4;
/// Grace period after taking contact damage, in ticks
pub const DAMAGE_COOLDOWN: i32 = 60;

/// Kinds of live entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Zombie,
    Creeper,
}

impl EntityKind {
    pub fn max_health(&self) -> i32 {
        match self {
            EntityKind::Player => 100,
            EntityKind::Zombie => 50,
            EntityKind::Creeper => 30,
        }
    }

    /// Body size in pixels
    pub fn size(&self) -> Vec2 {
        match self {
            EntityKind::Player => Vec2::new(12.0, 14.0),
            EntityKind::Zombie => Vec2::new(12.0, 12.0),
            EntityKind::Creeper => Vec2::new(12.0, 12.0),
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            EntityKind::Player => '@',
            EntityKind::Zombie => 'z',
            EntityKind::Creeper => 'c',
        }
    }

    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            EntityKind::Player => (255, 255, 150),
            EntityKind::Zombie => (100, 160, 80),
            EntityKind::Creeper => (70, 200, 90),
        }
    }
}

/// Horizontal facing of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// A live entity: the player or one hostile creature
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: u32,
    /// Center of the body in pixel space
    pub position: Vec2,
    /// Pathing target; the current movement code steers directly and
    /// leaves it untouched
    pub target_position: Vec2,
    pub kind: EntityKind,
    pub health: i32,
    pub max_health: i32,
    pub facing: Facing,
    pub is_attacking: bool,
    pub attack_cooldown: i32,
    pub damage_cooldown: i32,
}

impl Entity {
    fn new(id: u32, kind: EntityKind, position: Vec2) -> Self {
        Self {
            id,
            position,
            target_position: position,
            kind,
            health: kind.max_health(),
            max_health: kind.max_health(),
            facing: Facing::Right,
            is_attacking: false,
            attack_cooldown: 0,
            damage_cooldown: 0,
        }
    }

    /// The player singleton (id 0)
    pub fn player(position: Vec2) -> Self {
        Self::new(0, EntityKind::Player, position)
    }

    pub fn hostile(id: u32, kind: EntityKind, position: Vec2) -> Self {
        Self::new(id, kind, position)
    }

    pub fn size(&self) -> Vec2 {
        self.kind.size()
    }

    /// Top-left corner of the body rectangle
    pub fn body_origin(&self) -> Vec2 {
        self.position - self.size() / 2.0
    }

    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.min(self.health);
        self.health -= actual;
        actual
    }

    pub fn heal(&mut self, amount: i32) -> i32 {
        let actual = amount.min(self.max_health - self.health);
        self.health += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Per-tick cooldown decay, including the attack wind-down
    pub fn tick_cooldowns(&mut self) {
        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
        }
        if self.is_attacking && self.attack_cooldown < ATTACK_WINDDOWN {
            self.is_attacking = false;
        }
        if self.damage_cooldown > 0 {
            self.damage_cooldown -= 1;
        }
    }

    /// Start a melee swing if the cooldown allows it
    pub fn begin_attack(&mut self) -> bool {
        if self.attack_cooldown > 0 {
            return false;
        }
        self.is_attacking = true;
        self.attack_cooldown = ATTACK_COOLDOWN;
        true
    }

    pub fn can_take_contact_damage(&self) -> bool {
        self.damage_cooldown == 0
    }

    /// Update facing from a horizontal movement component; zero keeps the
    /// previous facing
    pub fn face_toward(&mut self, dx: f32) {
        if dx < 0.0 {
            self.facing = Facing::Left;
        } else if dx > 0.0 {
            self.facing = Facing::Right;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_clamps() {
        let mut e = Entity::player(Vec2::ZERO);
        e.take_damage(40);
        assert_eq!(e.health, 60);
        e.heal(1000);
        assert_eq!(e.health, e.max_health);
        e.take_damage(1000);
        assert_eq!(e.health, 0);
        assert!(e.is_dead());
    }

    #[test]
    fn test_begin_attack_gated_on_cooldown() {
        let mut e = Entity::player(Vec2::ZERO);
        assert!(e.begin_attack());
        assert_eq!(e.attack_cooldown, ATTACK_COOLDOWN);
        assert!(e.is_attacking);
        assert!(!e.begin_attack());
    }

    #[test]
    fn test_attack_flag_winds_down() {
        let mut e = Entity::player(Vec2::ZERO);
        e.begin_attack();
        let swing_ticks = ATTACK_COOLDOWN - ATTACK_WINDDOWN + 1;
        for _ in 0..swing_ticks {
            e.tick_cooldowns();
            if e.attack_cooldown >= ATTACK_WINDDOWN {
                assert!(e.is_attacking);
            }
        }
        assert!(!e.is_attacking);
        // Cooldown keeps counting after the flag clears
        assert!(e.attack_cooldown > 0);
    }

    #[test]
    fn test_damage_cooldown_decays_to_zero() {
        let mut e = Entity::player(Vec2::ZERO);
        e.damage_cooldown = DAMAGE_COOLDOWN;
        for _ in 0..DAMAGE_COOLDOWN {
            assert!(!e.can_take_contact_damage());
            e.tick_cooldowns();
        }
        assert!(e.can_take_contact_damage());
    }

    #[test]
    fn test_facing_ignores_zero_dx() {
        let mut e = Entity::player(Vec2::ZERO);
        e.face_toward(-1.0);
        assert_eq!(e.facing, Facing::Left);
        e.face_toward(0.0);
        assert_eq!(e.facing, Facing::Left);
        e.face_toward(0.5);
        assert_eq!(e.facing, Facing::Right);
    }
}
