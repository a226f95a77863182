//! Cave carving
//!
//! Random-walk "worms" eat discs of air out of the rock layer.

use rand::rngs::StdRng;
use rand::Rng;

use super::ROCK_ROW;
use crate::world::grid::TileGrid;
use crate::world::tile::TileKind;

/// Number of worm walks per world
const WORM_COUNT: usize = 15;
/// Walk length range in steps
const WORM_STEPS_MIN: i32 = 20;
const WORM_STEPS_MAX: i32 = 60;
/// Carve radius range in tiles
const WORM_RADIUS_MIN: i32 = 2;
const WORM_RADIUS_MAX: i32 = 3;
/// Worms start this far down or deeper
const WORM_START_ROW: i32 = super::CAVE_REGION_ROW;

/// Carve cave networks into the grid with random worm walks
pub fn carve_caves(grid: &mut TileGrid, rng: &mut StdRng) {
    for _ in 0..WORM_COUNT {
        let mut x = rng.gen_range(0..grid.width);
        let mut y = rng.gen_range(WORM_START_ROW..grid.height);
        let steps = rng.gen_range(WORM_STEPS_MIN..=WORM_STEPS_MAX);

        for _ in 0..steps {
            if !grid.in_bounds(x, y) {
                break;
            }
            let radius = rng.gen_range(WORM_RADIUS_MIN..=WORM_RADIUS_MAX);
            carve_disc(grid, x, y, radius);

            // Drift the walk center by a small random delta
            x += rng.gen_range(-1..=1);
            y += rng.gen_range(-1..=1);
        }
    }
}

/// Carve a disc of air (Euclidean distance test), clamped to bounds and to
/// the rock layer so caves never touch the overworld
fn carve_disc(grid: &mut TileGrid, cx: i32, cy: i32, radius: i32) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if y >= ROCK_ROW && grid.in_bounds(x, y) {
                grid.set(x, y, TileKind::Air);
            }
        }
    }
}
