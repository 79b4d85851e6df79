//! Hitbox versus tile-grid collision.
//!
//! A tile at grid coordinate `c` covers the square of side `tile_size` whose
//! top-left corner is `c * tile_size`. A candidate hitbox collides when it
//! overlaps any occupied square with a non-zero area; rectangles that only
//! share an edge do not collide.
//!
//! [`would_collide`] is linear in the number of collision tiles; large maps
//! would need a spatial hash.

use raylib::prelude::Rectangle;

use crate::resources::tilegrid::{GridCoord, TileGrid};

/// Rectangle covered by the tile at `coord`.
pub fn tile_rect(coord: GridCoord, tile_size: f32) -> Rectangle {
    Rectangle {
        x: coord.x as f32 * tile_size,
        y: coord.y as f32 * tile_size,
        width: tile_size,
        height: tile_size,
    }
}

/// Strict AABB overlap: touching edges do not count.
pub fn rects_overlap(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Whether `candidate` overlaps any occupied cell of `grid`.
pub fn would_collide(candidate: Rectangle, grid: &TileGrid, tile_size: f32) -> bool {
    grid.occupied_cells()
        .any(|(coord, _)| rects_overlap(&candidate, &tile_rect(coord, tile_size)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walls() -> TileGrid {
        // Occupied cells: (0,0), (2,0) and (1,1), each 8x8 pixels.
        TileGrid::parse("1,0,2\n0,3,0\n")
    }

    #[test]
    fn test_tile_rect_is_anchored_at_coord_times_size() {
        let rect = tile_rect(GridCoord::new(2, 3), 8.0);
        assert_eq!(rect, Rectangle::new(16.0, 24.0, 8.0, 8.0));
    }

    #[test]
    fn test_hitbox_outside_every_tile_does_not_collide() {
        let hitbox = Rectangle::new(30.0, 30.0, 16.0, 8.0);
        assert!(!would_collide(hitbox, &walls(), 8.0));
    }

    #[test]
    fn test_hitbox_overlapping_a_tile_collides() {
        let hitbox = Rectangle::new(12.0, 12.0, 4.0, 4.0);
        assert!(would_collide(hitbox, &walls(), 8.0));
    }

    #[test]
    fn test_partial_overlap_of_one_pixel_collides() {
        let hitbox = Rectangle::new(23.0, 0.0, 4.0, 4.0);
        assert!(would_collide(hitbox, &walls(), 8.0));
    }

    #[test]
    fn test_edge_touching_does_not_collide() {
        // Right edge of the hitbox touches the left edge of tile (2,0).
        let left = Rectangle::new(8.0, 0.0, 8.0, 8.0);
        assert!(!would_collide(left, &walls(), 8.0));
        // Top edge of the hitbox touches the bottom edge of tile (1,1).
        let below = Rectangle::new(8.0, 16.0, 8.0, 8.0);
        assert!(!would_collide(below, &walls(), 8.0));
    }

    #[test]
    fn test_empty_grid_never_collides() {
        let hitbox = Rectangle::new(0.0, 0.0, 1000.0, 1000.0);
        assert!(!would_collide(hitbox, &TileGrid::default(), 8.0));
    }

    #[test]
    fn test_rects_overlap_is_symmetric() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(5.0, 5.0, 10.0, 10.0);
        let c = Rectangle::new(10.0, 0.0, 5.0, 5.0);
        assert!(rects_overlap(&a, &b) && rects_overlap(&b, &a));
        assert!(!rects_overlap(&a, &c) && !rects_overlap(&c, &a));
    }
}
