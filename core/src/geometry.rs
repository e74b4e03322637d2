// SPDX-License-Identifier: MIT OR Apache-2.0

//! Grid geometry and pixel/cell coordinate mapping.
//!
//! All vertex output is in normalized device coordinates (-1..1) with y
//! increasing downward, so cell (0, 0) renders at the top-left of the window
//! and rows mean the same thing on the placement and lookup paths.

use crate::{BoardError, Coord, BORDER_RATIO, MAX_GRID_WIDTH};

/// Immutable grid configuration and the box/border measurements derived
/// from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    grid_width: u8,
}

impl BoardGeometry {
    /// Create the geometry for a `grid_width x grid_width` board.
    pub fn new(grid_width: u8) -> Result<Self, BoardError> {
        if grid_width == 0 || grid_width > MAX_GRID_WIDTH {
            return Err(BoardError::GridWidthOutOfRange(grid_width));
        }
        Ok(Self { grid_width })
    }

    /// Number of cells along each side of the board
    pub fn grid_width(&self) -> u8 {
        self.grid_width
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.grid_width as usize) * (self.grid_width as usize)
    }

    /// Width of one border gap in NDC units. There are (n + 1) row and column
    /// borders for grid size n, so the outer edge gets the same gap as the
    /// interior.
    pub fn border_width(&self) -> f32 {
        (2.0 * BORDER_RATIO) / (self.grid_width as f32 + 1.0)
    }

    /// Side length of one cell box in NDC units.
    pub fn box_width(&self) -> f32 {
        (2.0 - 2.0 * BORDER_RATIO) / self.grid_width as f32
    }

    /// Four corners of the cell box for linear cell index `i`, row-major from
    /// the top-left, each as `[x, y, z]` with z = 0. Ordered top-left,
    /// bottom-left, top-right, bottom-right so that triangles (0, 1, 2) and
    /// (1, 2, 3) tile the quad.
    pub fn cell_vertices(&self, i: usize) -> [[f32; 3]; 4] {
        let border = self.border_width();
        let boxw = self.box_width();
        let col = (i % self.grid_width as usize) as f32;
        let row = (i / self.grid_width as usize) as f32;

        let x0 = -1.0 + border + col * (boxw + border);
        let y0 = -1.0 + border + row * (boxw + border);

        [
            [x0, y0, 0.0],
            [x0, y0 + boxw, 0.0],
            [x0 + boxw, y0, 0.0],
            [x0 + boxw, y0 + boxw, 0.0],
        ]
    }

    /// Checkerboard shade for cell `i`: alternates between -0.3 (dark) and
    /// 0.7 (light) so neighbors contrast in both directions. Callers clamp to
    /// a displayable range.
    pub fn cell_shade(&self, i: usize) -> f32 {
        let gw = self.grid_width as usize;
        (((i + (i / gw) % 2) % 2) as f32) - 0.3
    }

    /// NDC center of a cell box.
    pub fn cell_center_ndc(&self, coord: Coord) -> (f32, f32) {
        let border = self.border_width();
        let boxw = self.box_width();
        let x = -1.0 + border + coord.col as f32 * (boxw + border) + boxw / 2.0;
        let y = -1.0 + border + coord.row as f32 * (boxw + border) + boxw / 2.0;
        (x, y)
    }

    /// Pixel position of the center of a cell in a `win_w x win_h` window.
    pub fn piece_pixel_center(&self, coord: Coord, win_w: f32, win_h: f32) -> (f32, f32) {
        let (x, y) = self.cell_center_ndc(coord);
        ((x + 1.0) / 2.0 * win_w, (y + 1.0) / 2.0 * win_h)
    }

    /// Map a pixel position to the cell underneath it, or `None` outside the
    /// window. Left inverse of [`Self::piece_pixel_center`] for every cell.
    pub fn pixel_to_cell(&self, px: f32, py: f32, win_w: f32, win_h: f32) -> Option<Coord> {
        if px < 0.0 || py < 0.0 || px >= win_w || py >= win_h {
            return None;
        }

        let gw = self.grid_width as f32;
        let col = (px / (win_w / gw)).floor() as u8;
        let row = (py / (win_h / gw)).floor() as u8;

        let coord = Coord::new(col, row);
        coord.is_valid(self.grid_width).then_some(coord)
    }

    /// Triangle-fan vertices for a circular piece centered at pixel
    /// (`px`, `py`): the center vertex followed by `precision + 1` rim
    /// vertices at radius `1 / grid_width`, flattened to exactly
    /// `3 * (precision + 2)` floats (x, y, z per vertex).
    pub fn circle_fan_vertices(
        &self,
        px: f32,
        py: f32,
        win_w: f32,
        win_h: f32,
        precision: usize,
    ) -> Vec<f32> {
        let cx = (px * 2.0) / win_w - 1.0;
        let cy = (py * 2.0) / win_h - 1.0;
        let radius = 1.0 / self.grid_width as f32;

        let mut vertices = Vec::with_capacity(3 * (precision + 2));
        vertices.extend_from_slice(&[cx, cy, 0.0]);

        // the last rim vertex repeats the first angle to close the fan
        for k in 1..=(precision + 1) {
            let angle = (k as f32) * std::f32::consts::TAU / precision as f32;
            vertices.push(cx + radius * angle.cos());
            vertices.push(cy + radius * angle.sin());
            vertices.push(0.0);
        }

        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_and_box_formulas() {
        let geom = BoardGeometry::new(10).unwrap();
        assert!((geom.border_width() - 0.1 / 11.0).abs() < 1e-6);
        assert!((geom.box_width() - 1.9 / 10.0).abs() < 1e-6);
    }

    #[test]
    fn grid_spans_the_full_ndc_range() {
        for gw in 1..=MAX_GRID_WIDTH {
            let geom = BoardGeometry::new(gw).unwrap();
            let last = geom.cell_vertices(geom.cell_count() - 1);
            // the far corner of the last cell plus one border lands on +1
            assert!((last[3][0] + geom.border_width() - 1.0).abs() < 1e-5);
            assert!((last[3][1] + geom.border_width() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn shade_alternates_in_both_directions() {
        let geom = BoardGeometry::new(10).unwrap();
        assert!((geom.cell_shade(0) - (-0.3)).abs() < 1e-6);
        assert!((geom.cell_shade(1) - 0.7).abs() < 1e-6);
        // first cell of the second row differs from the cell above it
        assert!((geom.cell_shade(10) - 0.7).abs() < 1e-6);
    }
}
