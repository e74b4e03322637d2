// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mesh management: the grid and piece vertex/index buffers.
//!
//! The grid mesh is built once per paint rect. The piece mesh is rebuilt in
//! full whenever the piece store changes, so its contents always reflect the
//! store exactly; there is no partial update path.

use checkerboard_core::{Board, BoardGeometry, Rgb, CIRCLE_PRECISION};
use egui::{Color32, Mesh, Pos2, Rect};

/// Map a point from the core's y-down NDC space into a paint rect.
fn ndc_to_screen(rect: Rect, x: f32, y: f32) -> Pos2 {
    Pos2::new(
        rect.left() + (x + 1.0) / 2.0 * rect.width(),
        rect.top() + (y + 1.0) / 2.0 * rect.height(),
    )
}

/// Convert a store color to a display color, clamping each component.
pub fn to_color32(color: Rgb) -> Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
    Color32::from_rgb(channel(color.r), channel(color.g), channel(color.b))
}

fn shade_color(shade: f32) -> Color32 {
    Color32::from_gray((shade.clamp(0.0, 1.0) * 255.0) as u8)
}

/// The two render buffers: a static grid mesh and a piece mesh regenerated
/// on every store mutation.
pub struct BoardMeshes {
    grid: Mesh,
    pieces: Mesh,
    built_rect: Option<Rect>,
    built_revision: Option<u64>,
}

impl BoardMeshes {
    pub fn new() -> Self {
        Self {
            grid: Mesh::default(),
            pieces: Mesh::default(),
            built_rect: None,
            built_revision: None,
        }
    }

    pub fn grid(&self) -> &Mesh {
        &self.grid
    }

    pub fn pieces(&self) -> &Mesh {
        &self.pieces
    }

    /// Bring both meshes up to date with the board: the grid when the paint
    /// rect changes, the pieces when the store revision changes.
    pub fn sync(&mut self, board: &Board, rect: Rect) {
        if self.built_rect != Some(rect) {
            self.grid = build_grid_mesh(board.geometry(), rect);
            self.built_rect = Some(rect);
            self.built_revision = None;
        }

        if self.built_revision != Some(board.revision()) {
            self.pieces = build_piece_mesh(board, rect);
            self.built_revision = Some(board.revision());
        }
    }
}

impl Default for BoardMeshes {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the checkerboard mesh: one quad (4 vertices, 6 indices) per cell,
/// every vertex carrying the cell's alternating shade.
pub fn build_grid_mesh(geometry: &BoardGeometry, rect: Rect) -> Mesh {
    let mut mesh = Mesh::default();

    for i in 0..geometry.cell_count() {
        let color = shade_color(geometry.cell_shade(i));
        let base = mesh.vertices.len() as u32;

        for v in geometry.cell_vertices(i) {
            mesh.colored_vertex(ndc_to_screen(rect, v[0], v[1]), color);
        }

        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 2, base + 3);
    }

    mesh
}

/// Rebuild the piece mesh from scratch: one triangle fan per piece, every
/// vertex of a piece sharing its flat color. An empty store yields an empty
/// mesh, which clears the pieces from the screen.
pub fn build_piece_mesh(board: &Board, rect: Rect) -> Mesh {
    let mut mesh = Mesh::default();
    let (win_w, win_h) = board.window_size();

    for (k, piece) in board.pieces().iter().enumerate() {
        let fan = board.geometry().circle_fan_vertices(
            piece.pixel_x,
            piece.pixel_y,
            win_w,
            win_h,
            CIRCLE_PRECISION,
        );
        let color = to_color32(piece.color);

        for v in fan.chunks_exact(3) {
            mesh.colored_vertex(ndc_to_screen(rect, v[0], v[1]), color);
        }

        let base = (k * (CIRCLE_PRECISION + 2)) as u32;
        for j in 0..CIRCLE_PRECISION as u32 {
            mesh.add_triangle(base, base + j + 1, base + j + 2);
        }
    }

    mesh
}
