//! Tile grid and collision queries
//!
//! Fixed-size tile storage plus solidity tests for rectangular bodies
//! moving through pixel space.

use glam::Vec2;

use super::tile::{Tile, TileKind};

/// World width in tiles
pub const GRID_WIDTH: i32 = 40;
/// World height in tiles
pub const GRID_HEIGHT: i32 = 60;
/// Edge length of one tile in pixels
pub const TILE_SIZE: f32 = 16.0;
/// Inward inset applied to bodies before tile-overlap tests. Lets bodies
/// occupy partial-tile overlaps without snagging on seams.
pub const COLLISION_MARGIN: f32 = 2.0;

/// The destructible world: a fixed-size 2D array of tiles
#[derive(Debug, Clone)]
pub struct TileGrid {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid filled with air
    pub fn new(width: i32, height: i32) -> Self {
        let tiles = vec![Tile::air(); (width * height) as usize];
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Get tile at position
    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.in_bounds(x, y) {
            Some(&self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Get mutable tile at position
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            Some(&mut self.tiles[idx])
        } else {
            None
        }
    }

    /// Set tile kind at position, resetting durability to the kind's maximum
    pub fn set(&mut self, x: i32, y: i32, kind: TileKind) {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            self.tiles[idx] = Tile::new(kind);
        }
    }

    /// Solidity of a single cell. Out-of-bounds cells read as solid.
    pub fn is_solid_at(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map_or(true, |t| t.is_solid())
    }

    /// Solidity test for an axis-aligned body rectangle in pixel space.
    /// `(x, y)` is the body's top-left corner. The rect is inset by
    /// [`COLLISION_MARGIN`] on every side before the covered tile range is
    /// tested; any out-of-bounds or non-air tile in the range counts as a
    /// collision.
    pub fn is_solid_rect(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        let left = x + COLLISION_MARGIN;
        let right = x + w - COLLISION_MARGIN;
        let top = y + COLLISION_MARGIN;
        let bottom = y + h - COLLISION_MARGIN;

        let tx0 = (left / TILE_SIZE).floor() as i32;
        let tx1 = (right / TILE_SIZE).floor() as i32;
        let ty0 = (top / TILE_SIZE).floor() as i32;
        let ty1 = (bottom / TILE_SIZE).floor() as i32;

        for ty in ty0..=ty1 {
            for tx in tx0..=tx1 {
                if self.is_solid_at(tx, ty) {
                    return true;
                }
            }
        }
        false
    }

    /// Tile coordinate containing a pixel-space point, if in bounds
    pub fn tile_at_pixel(&self, pos: Vec2) -> Option<(i32, i32)> {
        let tx = (pos.x / TILE_SIZE).floor() as i32;
        let ty = (pos.y / TILE_SIZE).floor() as i32;
        if self.in_bounds(tx, ty) {
            Some((tx, ty))
        } else {
            None
        }
    }

    /// Pixel-space center of a tile
    pub fn tile_center(&self, tx: i32, ty: i32) -> Vec2 {
        Vec2::new(
            tx as f32 * TILE_SIZE + TILE_SIZE / 2.0,
            ty as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_grid() -> TileGrid {
        TileGrid::new(GRID_WIDTH, GRID_HEIGHT)
    }

    #[test]
    fn test_out_of_bounds_reads_as_solid() {
        let grid = empty_grid();
        assert!(grid.is_solid_at(-1, 0));
        assert!(grid.is_solid_at(0, -1));
        assert!(grid.is_solid_at(GRID_WIDTH, 0));
        assert!(grid.is_solid_at(0, GRID_HEIGHT));
        assert!(grid.is_solid_rect(-20.0, 8.0, 12.0, 14.0));
    }

    #[test]
    fn test_air_rect_is_not_solid() {
        let grid = empty_grid();
        assert!(!grid.is_solid_rect(100.0, 100.0, 12.0, 14.0));
    }

    #[test]
    fn test_rect_over_stone_is_solid() {
        let mut grid = empty_grid();
        grid.set(10, 10, TileKind::Stone);
        // Body fully inside tile (10, 10)
        let x = 10.0 * TILE_SIZE + 2.0;
        let y = 10.0 * TILE_SIZE + 1.0;
        assert!(grid.is_solid_rect(x, y, 12.0, 14.0));
    }

    #[test]
    fn test_margin_allows_partial_overlap() {
        let mut grid = empty_grid();
        grid.set(10, 10, TileKind::Stone);
        // Body whose right edge overlaps the stone tile by less than the
        // collision margin does not collide.
        let x = 10.0 * TILE_SIZE - 12.0 + COLLISION_MARGIN - 0.5;
        let y = 10.0 * TILE_SIZE + 1.0;
        assert!(!grid.is_solid_rect(x, y, 12.0, 14.0));
        // One more pixel of overlap does.
        assert!(grid.is_solid_rect(x + 1.5, y, 12.0, 14.0));
    }

    #[test]
    fn test_tile_at_pixel() {
        let grid = empty_grid();
        assert_eq!(grid.tile_at_pixel(Vec2::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(
            grid.tile_at_pixel(Vec2::new(TILE_SIZE * 3.0 + 1.0, TILE_SIZE * 7.0 + 15.0)),
            Some((3, 7))
        );
        assert_eq!(grid.tile_at_pixel(Vec2::new(-1.0, 0.0)), None);
        assert_eq!(
            grid.tile_at_pixel(Vec2::new(GRID_WIDTH as f32 * TILE_SIZE + 1.0, 0.0)),
            None
        );
    }

    #[test]
    fn test_set_resets_durability() {
        let mut grid = empty_grid();
        grid.set(5, 5, TileKind::Gold);
        let tile = grid.get(5, 5).unwrap();
        assert_eq!(tile.durability, TileKind::Gold.max_durability());
    }
}
