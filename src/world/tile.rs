//! Tile definitions
//!
//! Tile kinds, durability tables, and the per-cell tile state.

/// A single cell of the destructible world grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub kind: TileKind,
    /// Remaining hit points before the tile breaks
    pub durability: i32,
    pub max_durability: i32,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        let max = kind.max_durability();
        Self {
            kind,
            durability: max,
            max_durability: max,
        }
    }

    pub fn air() -> Self {
        Self::new(TileKind::Air)
    }

    pub fn is_air(&self) -> bool {
        self.kind == TileKind::Air
    }

    pub fn is_solid(&self) -> bool {
        self.kind != TileKind::Air
    }

    /// Deplete durability, saturating at zero. Returns true once the tile
    /// has no durability left. Air tiles are untouched.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        if self.is_air() {
            return false;
        }
        self.durability = (self.durability - amount).max(0);
        self.durability == 0
    }

    /// Reset the cell to empty space
    pub fn clear(&mut self) {
        *self = Tile::air();
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::air()
    }
}

/// Types of tiles in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Air,
    Grass,
    Dirt,
    Stone,
    Gold,
    Shard,
    Diamond,
}

impl TileKind {
    /// Hit points a freshly generated tile of this kind starts with
    pub fn max_durability(&self) -> i32 {
        match self {
            TileKind::Air => 0,
            TileKind::Grass => 8,
            TileKind::Dirt => 8,
            TileKind::Stone => 16,
            TileKind::Gold => 24,
            TileKind::Shard => 24,
            TileKind::Diamond => 40,
        }
    }

    /// Resource awarded when a tile of this kind breaks
    pub fn resource(&self) -> Option<Resource> {
        match self {
            TileKind::Gold => Some(Resource::Gold),
            TileKind::Shard => Some(Resource::Shard),
            TileKind::Diamond => Some(Resource::Diamond),
            _ => None,
        }
    }

    /// Base display color (RGB)
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            TileKind::Air => (24, 28, 38),
            TileKind::Grass => (90, 160, 70),
            TileKind::Dirt => (120, 85, 60),
            TileKind::Stone => (110, 110, 115),
            TileKind::Gold => (230, 190, 70),
            TileKind::Shard => (120, 210, 220),
            TileKind::Diamond => (170, 230, 245),
        }
    }

    /// Color used for mining debris particles
    pub fn particle_color(&self) -> (u8, u8, u8) {
        match self {
            TileKind::Air => (24, 28, 38),
            TileKind::Grass => (70, 130, 55),
            TileKind::Dirt => (100, 70, 50),
            TileKind::Stone => (90, 90, 95),
            TileKind::Gold => (230, 190, 70),
            TileKind::Shard => (120, 210, 220),
            TileKind::Diamond => (170, 230, 245),
        }
    }
}

/// Collectible resources dropped by ore tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Gold,
    Shard,
    Diamond,
}

impl Resource {
    /// Floating pickup label shown when the resource is collected
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Gold => "+1 GOLD",
            Resource::Shard => "+1 SHARD",
            Resource::Diamond => "+1 DIAMOND",
        }
    }

    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Resource::Gold => (230, 190, 70),
            Resource::Shard => (120, 210, 220),
            Resource::Diamond => (170, 230, 245),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_starts_at_full_durability() {
        let tile = Tile::new(TileKind::Stone);
        assert_eq!(tile.durability, tile.max_durability);
        assert!(tile.durability > 0);
    }

    #[test]
    fn test_air_has_zero_durability() {
        let tile = Tile::air();
        assert_eq!(tile.durability, 0);
        assert_eq!(tile.max_durability, 0);
        assert!(!tile.is_solid());
    }

    #[test]
    fn test_damage_saturates_at_zero() {
        let mut tile = Tile::new(TileKind::Dirt);
        assert!(tile.apply_damage(1000));
        assert_eq!(tile.durability, 0);
    }

    #[test]
    fn test_damage_on_air_is_noop() {
        let mut tile = Tile::air();
        assert!(!tile.apply_damage(8));
        assert_eq!(tile, Tile::air());
    }

    #[test]
    fn test_only_ores_drop_resources() {
        assert_eq!(TileKind::Gold.resource(), Some(Resource::Gold));
        assert_eq!(TileKind::Shard.resource(), Some(Resource::Shard));
        assert_eq!(TileKind::Diamond.resource(), Some(Resource::Diamond));
        assert_eq!(TileKind::Dirt.resource(), None);
        assert_eq!(TileKind::Stone.resource(), None);
        assert_eq!(TileKind::Grass.resource(), None);
        assert_eq!(TileKind::Air.resource(), None);
    }
}
