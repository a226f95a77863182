//! Hostile spawning
//!
//! Populates the cave region with creatures at session start.

use rand::rngs::StdRng;
use rand::Rng;

use super::{Entity, EntityKind};
use crate::world::generation::CAVE_REGION_ROW;
use crate::world::TileGrid;

/// Creatures spawned per world
pub const HOSTILE_COUNT: usize = 8;
/// Probability a spawned creature is a zombie rather than a creeper
const ZOMBIE_CHANCE: f64 = 0.7;

/// Spawn the session's hostile set at random positions in the cave region
pub fn spawn_hostiles(grid: &TileGrid, rng: &mut StdRng) -> Vec<Entity> {
    let mut hostiles = Vec::with_capacity(HOSTILE_COUNT);
    for i in 0..HOSTILE_COUNT {
        let kind = if rng.gen_bool(ZOMBIE_CHANCE) {
            EntityKind::Zombie
        } else {
            EntityKind::Creeper
        };
        let tx = rng.gen_range(0..grid.width);
        let ty = rng.gen_range(CAVE_REGION_ROW..grid.height);
        hostiles.push(Entity::hostile(i as u32 + 1, kind, grid.tile_center(tx, ty)));
    }
    log::debug!("Spawned {} hostiles", hostiles.len());
    hostiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::grid::{GRID_HEIGHT, GRID_WIDTH, TILE_SIZE};
    use rand::SeedableRng;

    #[test]
    fn test_spawn_count_and_region() {
        let grid = TileGrid::new(GRID_WIDTH, GRID_HEIGHT);
        let mut rng = StdRng::seed_from_u64(17);
        let hostiles = spawn_hostiles(&grid, &mut rng);

        assert_eq!(hostiles.len(), HOSTILE_COUNT);
        for h in &hostiles {
            assert!(matches!(h.kind, EntityKind::Zombie | EntityKind::Creeper));
            assert_eq!(h.health, h.max_health);
            assert!(h.position.y >= CAVE_REGION_ROW as f32 * TILE_SIZE);
            assert!(h.position.x >= 0.0);
            assert!(h.position.x <= GRID_WIDTH as f32 * TILE_SIZE);
        }
    }

    #[test]
    fn test_spawn_ids_are_unique() {
        let grid = TileGrid::new(GRID_WIDTH, GRID_HEIGHT);
        let mut rng = StdRng::seed_from_u64(23);
        let hostiles = spawn_hostiles(&grid, &mut rng);
        let mut ids: Vec<u32> = hostiles.iter().map(|h| h.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), HOSTILE_COUNT);
    }
}
