//! Sprite-sheet animation state.
//!
//! [`SpriteAnimation`] addresses one cell of a sprite sheet laid out as a
//! grid of equally sized cells. It either holds a single pinned cell
//! ([`Playback::Static`]) or loops through a run of consecutive cells
//! ([`Playback::Looping`]), stepping one frame every `interval + 1` ticks.
//!
//! A looping run may spill over the end of a sheet row: the column wraps to
//! zero and the row advances. When the run ends the playback jumps back to
//! the cell it started from.
//!
//! The animator is driven once per game tick by
//! [`crate::systems::animation::animation`].

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Ticks between frame advances when no speed has been set.
pub const DEFAULT_INTERVAL: u32 = 30;

/// Playback state of a [`SpriteAnimation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// A single pinned cell that never advances.
    Static { row: u32, column: u32 },
    /// A run of `frame_count` cells starting at `(start_row, start_column)`.
    Looping {
        frame_count: u32,
        start_row: u32,
        start_column: u32,
        frame: u32,
        row: u32,
        column: u32,
        ticks: u32,
    },
}

/// Animator addressing a cell inside a sprite sheet.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SpriteAnimation {
    columns: u32,
    cell_size: Vector2,
    interval: u32,
    playback: Playback,
}

impl SpriteAnimation {
    /// Create an animator for a sheet with `num_columns` cells per row.
    ///
    /// Playback starts looping over `num_frames` cells from the top-left
    /// cell, at the [`DEFAULT_INTERVAL`].
    ///
    /// # Panics
    ///
    /// Panics if `num_columns` is zero.
    pub fn new(num_frames: u32, num_columns: u32, cell_size: Vector2) -> Self {
        assert!(num_columns > 0, "sprite sheet needs at least one column");
        Self {
            columns: num_columns,
            cell_size,
            interval: DEFAULT_INTERVAL,
            playback: Playback::Looping {
                frame_count: num_frames,
                start_row: 0,
                start_column: 0,
                frame: 0,
                row: 0,
                column: 0,
                ticks: 0,
            },
        }
    }

    /// Play frames `start_frame..=end_frame`, starting on `start_row`.
    ///
    /// The starting column is `start_frame` modulo the sheet width; the row
    /// is taken as given and is not derived from `start_frame`. A run of a
    /// single frame becomes a static cell.
    ///
    /// # Panics
    ///
    /// Panics if `end_frame < start_frame`.
    pub fn set_animation(&mut self, start_frame: u32, end_frame: u32, start_row: u32) {
        assert!(
            end_frame >= start_frame,
            "animation ends ({end_frame}) before it starts ({start_frame})"
        );
        let start_column = start_frame % self.columns;
        self.playback = if start_frame == end_frame {
            Playback::Static {
                row: start_row,
                column: start_column,
            }
        } else {
            Playback::Looping {
                frame_count: end_frame - start_frame + 1,
                start_row,
                start_column,
                frame: 0,
                row: start_row,
                column: start_column,
                ticks: 0,
            }
        };
    }

    /// Pin the cell `(row, frame_index % columns)`.
    pub fn set_static_frame(&mut self, frame_index: u32, row: u32) {
        self.playback = Playback::Static {
            row,
            column: frame_index % self.columns,
        };
    }

    /// Set how many ticks must pass before the next frame.
    pub fn set_speed(&mut self, interval: u32) {
        self.interval = interval;
    }

    /// Count one tick, advancing a frame once the counter exceeds the interval.
    pub fn update(&mut self) {
        let interval = self.interval;
        if let Playback::Looping { ticks, .. } = &mut self.playback {
            *ticks += 1;
            if *ticks > interval {
                *ticks = 0;
                self.advance();
            }
        }
    }

    /// Step to the next frame of a looping run.
    pub fn advance(&mut self) {
        let columns = self.columns;
        if let Playback::Looping {
            frame_count,
            start_row,
            start_column,
            frame,
            row,
            column,
            ..
        } = &mut self.playback
        {
            *frame += 1;
            *column += 1;
            if *column >= columns {
                *column = 0;
                *row += 1;
            }
            if *frame >= *frame_count {
                *frame = 0;
                *row = *start_row;
                *column = *start_column;
            }
        }
    }

    /// Current `(row, column)` cell.
    pub fn cell(&self) -> (u32, u32) {
        match self.playback {
            Playback::Static { row, column } => (row, column),
            Playback::Looping { row, column, .. } => (row, column),
        }
    }

    /// Source rectangle of the current cell in sheet pixels.
    pub fn current_cell_rect(&self) -> Rectangle {
        let (row, column) = self.cell();
        Rectangle {
            x: column as f32 * self.cell_size.x,
            y: row as f32 * self.cell_size.y,
            width: self.cell_size.x,
            height: self.cell_size.y,
        }
    }

    /// Index of the current frame within the run.
    pub fn frame(&self) -> u32 {
        match self.playback {
            Playback::Static { .. } => 0,
            Playback::Looping { frame, .. } => frame,
        }
    }

    pub fn frame_count(&self) -> u32 {
        match self.playback {
            Playback::Static { .. } => 1,
            Playback::Looping { frame_count, .. } => frame_count,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self.playback, Playback::Static { .. })
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }
}
