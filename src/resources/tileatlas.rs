//! Tile atlas layout.
//!
//! The atlas texture is a grid of square tiles, `columns` per row. Tile index
//! `v` of the visual layer is read from column `v % columns`, row
//! `v / columns`.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;

/// Layout of the tile atlas texture.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TileAtlas {
    /// Key of the atlas in the [`TextureStore`](crate::resources::texturestore::TextureStore).
    pub tex_key: String,
    /// Tiles per atlas row.
    pub columns: u32,
    /// Side of one atlas tile in texture pixels.
    pub tile_px: f32,
}

impl TileAtlas {
    pub fn new(tex_key: impl Into<String>, columns: u32, tile_px: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            columns: columns.max(1),
            tile_px,
        }
    }

    /// Texture rectangle holding tile `value`.
    pub fn source_rect(&self, value: u32) -> Rectangle {
        let column = value % self.columns;
        let row = value / self.columns;
        Rectangle {
            x: column as f32 * self.tile_px,
            y: row as f32 * self.tile_px,
            width: self.tile_px,
            height: self.tile_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_rect_wraps_rows() {
        let atlas = TileAtlas::new("tiles", 16, 8.0);
        assert_eq!(atlas.source_rect(1), Rectangle::new(8.0, 0.0, 8.0, 8.0));
        assert_eq!(atlas.source_rect(16), Rectangle::new(0.0, 8.0, 8.0, 8.0));
        assert_eq!(atlas.source_rect(35), Rectangle::new(24.0, 16.0, 8.0, 8.0));
    }
}
