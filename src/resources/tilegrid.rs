//! Sparse tile grids loaded from CSV map files.
//!
//! A map file has one grid row per line and one comma-separated integer per
//! cell. Line `n` (0-based) is grid row `n`; field `i` is column `i`. Cells
//! holding a value greater than zero are stored; zeros and fields that do not
//! parse as integers are treated as empty and skipped without error.
//!
//! The game loads two grids sharing one coordinate space: the visual layer
//! drawn from the tile atlas and the collision layer tested against the
//! player hitbox. Both live in the [`TileLayers`] resource.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;

/// Integer cell coordinate: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Error returned when a map source cannot be read.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read map {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
        }
    }
}

/// Immutable mapping from grid coordinate to a positive tile index.
///
/// Cells are kept in the order they were loaded (row-major), so iteration
/// is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileGrid {
    cells: Vec<(GridCoord, u32)>,
    index: FxHashMap<GridCoord, usize>,
}

impl TileGrid {
    /// Load a grid from a CSV file.
    ///
    /// Fails only if the file cannot be opened or read; malformed fields
    /// become empty cells.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let io_err = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let grid = Self::from_reader(BufReader::new(file)).map_err(io_err)?;
        info!("Loaded map {} ({} tiles)", path.display(), grid.len());
        Ok(grid)
    }

    /// Parse a grid from any line-oriented reader.
    ///
    /// Lines are decoded lossily, so invalid UTF-8 only spoils the fields it
    /// sits in. Only read failures are errors.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut grid = Self::default();
        for (y, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes);
            grid.push_row(y as i32, &String::from_utf8_lossy(bytes));
        }
        Ok(grid)
    }

    /// Parse a grid from an in-memory string.
    pub fn parse(text: &str) -> Self {
        let mut grid = Self::default();
        for (y, line) in text.lines().enumerate() {
            grid.push_row(y as i32, line);
        }
        grid
    }

    fn push_row(&mut self, y: i32, line: &str) {
        for (x, field) in line.split(',').enumerate() {
            // Anything outside i32 is unparsable, hence empty.
            let Ok(value) = field.trim().parse::<i32>() else {
                continue;
            };
            if value <= 0 {
                continue;
            }
            self.insert(GridCoord::new(x as i32, y), value as u32);
        }
    }

    fn insert(&mut self, coord: GridCoord, value: u32) {
        match self.index.get(&coord) {
            Some(&slot) => self.cells[slot].1 = value,
            None => {
                self.index.insert(coord, self.cells.len());
                self.cells.push((coord, value));
            }
        }
    }

    /// Tile stored at `coord`, if any.
    pub fn tile_at(&self, coord: GridCoord) -> Option<u32> {
        self.index.get(&coord).map(|&slot| self.cells[slot].1)
    }

    /// Every occupied cell with its tile index, in load order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (GridCoord, u32)> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The visual and collision grids of the loaded map.
#[derive(Resource, Debug, Clone)]
pub struct TileLayers {
    /// Tiles drawn from the atlas.
    pub visual: TileGrid,
    /// Tiles that block the player.
    pub collision: TileGrid,
    /// Side of one map cell in virtual pixels.
    pub tile_size: f32,
}

impl TileLayers {
    pub fn new(visual: TileGrid, collision: TileGrid, tile_size: f32) -> Self {
        Self {
            visual,
            collision,
            tile_size,
        }
    }

    /// Load both layers from their CSV files.
    pub fn load(
        visual_path: impl AsRef<Path>,
        collision_path: impl AsRef<Path>,
        tile_size: f32,
    ) -> Result<Self, LoadError> {
        Ok(Self::new(
            TileGrid::load(visual_path)?,
            TileGrid::load(collision_path)?,
            tile_size,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_only_positive_cells() {
        let grid = TileGrid::parse("1,0,2\n0,3,0\n");
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.tile_at(GridCoord::new(0, 0)), Some(1));
        assert_eq!(grid.tile_at(GridCoord::new(2, 0)), Some(2));
        assert_eq!(grid.tile_at(GridCoord::new(1, 1)), Some(3));
        assert_eq!(grid.tile_at(GridCoord::new(1, 0)), None);
        assert_eq!(grid.tile_at(GridCoord::new(0, 1)), None);
    }

    #[test]
    fn test_parse_skips_malformed_and_negative_fields() {
        let grid = TileGrid::parse("x,-4,5\n,, 7 ,abc\n99999999999,1");
        let cells: Vec<_> = grid.occupied_cells().collect();
        assert_eq!(
            cells,
            vec![
                (GridCoord::new(2, 0), 5),
                (GridCoord::new(2, 1), 7),
                (GridCoord::new(1, 2), 1),
            ]
        );
    }

    #[test]
    fn test_occupied_cells_are_row_major_and_restartable() {
        let grid = TileGrid::parse("0,4,0,9\n6,0,0,0\n0,0,2,0");
        let first: Vec<_> = grid.occupied_cells().map(|(c, _)| (c.x, c.y)).collect();
        assert_eq!(first, vec![(1, 0), (3, 0), (0, 1), (2, 2)]);
        let second: Vec<_> = grid.occupied_cells().map(|(c, _)| (c.x, c.y)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_crlf_line_endings() {
        let grid = TileGrid::parse("1,2\r\n3,4\r\n");
        assert_eq!(grid.tile_at(GridCoord::new(1, 0)), Some(2));
        assert_eq!(grid.tile_at(GridCoord::new(1, 1)), Some(4));
    }

    #[test]
    fn test_from_reader_matches_parse() {
        let text = "0,1\n2,0\n";
        let from_reader = TileGrid::from_reader(text.as_bytes()).unwrap();
        assert_eq!(from_reader, TileGrid::parse(text));
    }

    #[test]
    fn test_from_reader_skips_fields_with_invalid_utf8() {
        let grid = TileGrid::from_reader(&b"1,\xff,2\n0,3,0\n"[..]).unwrap();
        let cells: Vec<_> = grid.occupied_cells().collect();
        assert_eq!(
            cells,
            vec![
                (GridCoord::new(0, 0), 1),
                (GridCoord::new(2, 0), 2),
                (GridCoord::new(1, 1), 3),
            ]
        );
    }

    #[test]
    fn test_from_reader_handles_crlf_and_missing_final_newline() {
        let grid = TileGrid::from_reader(&b"0,5\r\n6,0"[..]).unwrap();
        assert_eq!(grid.tile_at(GridCoord::new(1, 0)), Some(5));
        assert_eq!(grid.tile_at(GridCoord::new(0, 1)), Some(6));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_values_beyond_i32_are_empty() {
        let grid = TileGrid::parse("3000000000,2147483647,2147483648");
        let cells: Vec<_> = grid.occupied_cells().collect();
        assert_eq!(cells, vec![(GridCoord::new(1, 0), 2147483647)]);
    }

    #[test]
    fn test_empty_source_gives_empty_grid() {
        let grid = TileGrid::parse("");
        assert!(grid.is_empty());
        assert_eq!(grid.occupied_cells().count(), 0);
    }

    #[test]
    fn test_load_missing_file_is_load_error() {
        let err = TileGrid::load("./no/such/map.csv").unwrap_err();
        let LoadError::Io { path, source } = &err;
        assert_eq!(path, &PathBuf::from("./no/such/map.csv"));
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("no/such/map.csv"));
    }
}
