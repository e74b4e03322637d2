// SPDX-License-Identifier: MIT OR Apache-2.0

//! Checkerboard Core - Board Geometry and Piece Logic
//!
//! This crate provides the rendering-independent half of the checkerboard
//! demo:
//! - Grid geometry generation in normalized device coordinates
//! - Pixel <-> cell coordinate mapping
//! - The piece store mutated by board clicks

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod geometry;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest supported grid width; the board is always `grid_width x grid_width`.
pub const MAX_GRID_WIDTH: u8 = 10;

/// Fraction of the drawable area reserved for the gaps between cells.
pub const BORDER_RATIO: f32 = 0.05;

/// Number of rim segments used to approximate a circular piece.
pub const CIRCLE_PRECISION: usize = 30;

/// Board cell coordinate, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column, increasing rightward
    pub col: u8,
    /// Row, increasing downward
    pub row: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Check if the coordinate lies on a board of the given grid width
    pub fn is_valid(&self, grid_width: u8) -> bool {
        self.col < grid_width && self.row < grid_width
    }
}

/// RGB color triple. Components are `0.0..=1.0` by caller convention; the
/// store does not clamp them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Create a new color
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Mouse button reported to the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Errors that can occur while configuring a board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The grid width is zero or larger than the supported maximum
    #[error("grid width {0} is out of range (1..=10)")]
    GridWidthOutOfRange(u8),

    /// The window dimensions are zero or negative
    #[error("window dimensions must be positive")]
    InvalidWindowSize,
}

pub use board::{Board, Piece};
pub use geometry::BoardGeometry;
