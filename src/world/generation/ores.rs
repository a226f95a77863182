//! Resource vein placement
//!
//! Rejection-sampled ore placement by depth band. Attempts are bounded and
//! a deterministic scan takes over, so generation always terminates.

use rand::rngs::StdRng;
use rand::Rng;

use crate::world::grid::TileGrid;
use crate::world::tile::TileKind;

/// Sampling attempts allowed per requested vein before falling back
const ATTEMPTS_PER_VEIN: u32 = 50;

/// One ore kind's placement parameters
pub struct OreDef {
    pub kind: TileKind,
    /// Veins to place
    pub count: u32,
    /// Veins only appear at or below this row
    pub min_row: i32,
}

/// Shallow/common through deep/rare
pub const ORE_TABLE: [OreDef; 3] = [
    OreDef {
        kind: TileKind::Shard,
        count: 20,
        min_row: 12,
    },
    OreDef {
        kind: TileKind::Gold,
        count: 12,
        min_row: 25,
    },
    OreDef {
        kind: TileKind::Diamond,
        count: 6,
        min_row: 45,
    },
];

/// Place every ore kind into the grid
pub fn place_ores(grid: &mut TileGrid, rng: &mut StdRng) {
    for def in &ORE_TABLE {
        place_ore(grid, rng, def);
    }
}

fn eligible(grid: &TileGrid, x: i32, y: i32) -> bool {
    matches!(
        grid.get(x, y).map(|t| t.kind),
        Some(TileKind::Stone) | Some(TileKind::Dirt)
    )
}

fn place_ore(grid: &mut TileGrid, rng: &mut StdRng, def: &OreDef) {
    let mut placed = 0;
    let max_attempts = def.count * ATTEMPTS_PER_VEIN;

    for _ in 0..max_attempts {
        if placed >= def.count {
            break;
        }
        let x = rng.gen_range(0..grid.width);
        let y = rng.gen_range(def.min_row..grid.height);
        if eligible(grid, x, y) {
            grid.set(x, y, def.kind);
            placed += 1;
        }
    }

    // Sampling ran out of attempts (heavily carved depth band): scan for
    // the remaining cells instead of looping forever.
    if placed < def.count {
        'scan: for y in def.min_row..grid.height {
            for x in 0..grid.width {
                if placed >= def.count {
                    break 'scan;
                }
                if eligible(grid, x, y) {
                    grid.set(x, y, def.kind);
                    placed += 1;
                }
            }
        }
    }

    if placed < def.count {
        log::warn!(
            "Only placed {placed}/{} {:?} veins; not enough rock below row {}",
            def.count,
            def.kind,
            def.min_row
        );
    }
}
