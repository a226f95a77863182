//! World module
//!
//! Tile data structures, collision queries, and procedural generation.

pub mod generation;
pub mod grid;
pub mod tile;

pub use grid::{TileGrid, COLLISION_MARGIN, GRID_HEIGHT, GRID_WIDTH, TILE_SIZE};
pub use tile::{Resource, Tile, TileKind};
