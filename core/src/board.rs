// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board state: the piece store and its click-driven mutations.

use serde::{Deserialize, Serialize};

use crate::{BoardError, BoardGeometry, Coord, Rgb};

/// A colored circular marker occupying one cell.
///
/// The stored position is the pixel center of its cell; lookups map it back
/// through the coordinate mapper instead of storing the cell twice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub pixel_x: f32,
    pub pixel_y: f32,
    pub color: Rgb,
}

/// Owns the grid configuration, the window dimensions used for pixel
/// mapping, the piece store and the clear color. All mutation goes through
/// the methods here; the render layer watches [`Board::revision`] to know
/// when its piece buffer is stale.
#[derive(Debug, Clone)]
pub struct Board {
    geometry: BoardGeometry,
    window_width: f32,
    window_height: f32,
    pieces: Vec<Piece>,
    background: Rgb,
    revision: u64,
}

impl Board {
    /// Create an empty board for the given grid width and window size.
    pub fn new(grid_width: u8, window_width: f32, window_height: f32) -> Result<Self, BoardError> {
        let geometry = BoardGeometry::new(grid_width)?;
        if window_width <= 0.0 || window_height <= 0.0 {
            return Err(BoardError::InvalidWindowSize);
        }

        Ok(Self {
            geometry,
            window_width,
            window_height,
            pieces: Vec::new(),
            background: Rgb::new(0.0, 0.0, 0.0),
            revision: 0,
        })
    }

    /// Grid geometry this board was configured with
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Window dimensions used for pixel mapping
    pub fn window_size(&self) -> (f32, f32) {
        (self.window_width, self.window_height)
    }

    /// The placed pieces in insertion order
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Current clear color
    pub fn background_color(&self) -> Rgb {
        self.background
    }

    /// Counter bumped on every piece mutation; the render layer rebuilds its
    /// piece buffer whenever this changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Map a window pixel position to the cell underneath it.
    pub fn pixel_to_cell(&self, px: f32, py: f32) -> Option<Coord> {
        self.geometry
            .pixel_to_cell(px, py, self.window_width, self.window_height)
    }

    /// Index of the piece occupying `coord`, if any. Pieces are searched in
    /// store order by mapping their stored pixel position back to a cell.
    pub fn find_piece_at(&self, coord: Coord) -> Option<usize> {
        self.pieces
            .iter()
            .position(|p| self.pixel_to_cell(p.pixel_x, p.pixel_y) == Some(coord))
    }

    /// Place a piece centered on `coord`, replacing any piece already there
    /// so each cell holds at most one.
    pub fn set_piece(&mut self, color: Rgb, coord: Coord) {
        if !coord.is_valid(self.geometry.grid_width()) {
            tracing::warn!(
                col = coord.col,
                row = coord.row,
                "ignoring set_piece outside the grid"
            );
            return;
        }

        if let Some(idx) = self.find_piece_at(coord) {
            self.pieces.remove(idx);
        }

        let (pixel_x, pixel_y) =
            self.geometry
                .piece_pixel_center(coord, self.window_width, self.window_height);
        self.pieces.push(Piece {
            pixel_x,
            pixel_y,
            color,
        });
        self.revision += 1;
    }

    /// Remove the piece at `coord`. Returns false, with no other effect,
    /// when the cell is empty.
    pub fn remove_piece(&mut self, coord: Coord) -> bool {
        match self.find_piece_at(coord) {
            Some(idx) => {
                self.pieces.remove(idx);
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Update the clear color. Components follow the caller's 0..1
    /// convention and are not clamped here. Piece buffers are untouched, so
    /// this never bumps the revision.
    pub fn set_background_color(&mut self, color: Rgb) {
        self.background = color;
    }
}
