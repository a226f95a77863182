//! World generation
//!
//! Builds the initial tile grid: layered terrain, carved cave networks,
//! and placed resource veins.

pub mod caves;
pub mod ores;

use rand::rngs::StdRng;

use super::grid::{TileGrid, GRID_HEIGHT, GRID_WIDTH};
use super::tile::TileKind;
use crate::entities::{spawn_hostiles, Entity};

/// Row holding the grass surface; everything above is sky
pub const GRASS_ROW: i32 = 5;
/// First row of stone; cave carving never reaches above this
pub const ROCK_ROW: i32 = 10;
/// Rows at or below this form the cave region (worm starts, hostile spawns)
pub const CAVE_REGION_ROW: i32 = 15;

/// Generate a fresh world grid and its initial hostile set
pub fn generate(rng: &mut StdRng) -> (TileGrid, Vec<Entity>) {
    let mut grid = TileGrid::new(GRID_WIDTH, GRID_HEIGHT);

    fill_layers(&mut grid);
    caves::carve_caves(&mut grid, rng);
    ores::place_ores(&mut grid, rng);
    let hostiles = spawn_hostiles(&grid, rng);

    log::info!(
        "Generated {}x{} world with {} hostiles",
        grid.width,
        grid.height,
        hostiles.len()
    );
    (grid, hostiles)
}

/// Layered fill: sky, one grass row, a dirt band, stone below
fn fill_layers(grid: &mut TileGrid) {
    for y in 0..grid.height {
        let kind = if y < GRASS_ROW {
            TileKind::Air
        } else if y == GRASS_ROW {
            TileKind::Grass
        } else if y < ROCK_ROW {
            TileKind::Dirt
        } else {
            TileKind::Stone
        };
        for x in 0..grid.width {
            grid.set(x, y, kind);
        }
    }
}
