// SPDX-License-Identifier: MIT OR Apache-2.0

//! The running board application: event dispatch and frame painting.

use checkerboard_core::{Board, MouseButton};
use eframe::egui::{self, Sense, Shape};

use crate::handler::BoardHandler;
use crate::mesh::{to_color32, BoardMeshes};

/// Owns the board state, both mesh buffers and the input handler, and
/// drives them from the eframe update loop. Everything runs on the one UI
/// thread that owns the window.
pub struct BoardApp {
    board: Board,
    meshes: BoardMeshes,
    handler: Box<dyn BoardHandler>,
}

impl BoardApp {
    pub fn new(board: Board, handler: Box<dyn BoardHandler>) -> Self {
        Self {
            board,
            meshes: BoardMeshes::new(),
            handler,
        }
    }

    /// Board state, for tests and embedding callers.
    pub fn board(&self) -> &Board {
        &self.board
    }

    fn dispatch_pointer_events(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());

        for event in events {
            if let egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } = event
            {
                let Some(button) = map_button(button) else {
                    continue;
                };
                let Some(coord) = self.board.pixel_to_cell(pos.x, pos.y) else {
                    continue;
                };

                tracing::debug!(
                    ?button,
                    pressed,
                    col = coord.col,
                    row = coord.row,
                    "board click"
                );

                if pressed {
                    self.handler.on_press(&mut self.board, coord, button);
                } else {
                    self.handler.on_release(&mut self.board, coord, button);
                }
            }
        }
    }
}

fn map_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        _ => None,
    }
}

impl eframe::App for BoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handler.on_idle(&mut self.board);
        self.dispatch_pointer_events(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), Sense::hover());
                self.meshes.sync(&self.board, rect);

                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 0.0, to_color32(self.board.background_color()));
                painter.add(Shape::mesh(self.meshes.grid().clone()));
                if !self.meshes.pieces().is_empty() {
                    painter.add(Shape::mesh(self.meshes.pieces().clone()));
                }
            });

        // the idle handler doubles as the game loop, so keep frames coming
        ctx.request_repaint();
    }
}
