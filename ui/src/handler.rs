// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input capability interface between the board window and its driver.

use checkerboard_core::{Board, Coord, MouseButton};

/// Callbacks through which the running board reports input to the driver.
///
/// The board hands itself to every callback so the driver can place and
/// remove pieces or recolor the background from inside the event loop. All
/// calls happen on the UI thread; nothing here needs locking.
pub trait BoardHandler {
    /// A mouse button was pressed over `coord`.
    fn on_press(&mut self, board: &mut Board, coord: Coord, button: MouseButton);

    /// A mouse button was released over `coord`.
    fn on_release(&mut self, _board: &mut Board, _coord: Coord, _button: MouseButton) {}

    /// Called once per frame before painting; the demo's game-loop hook.
    fn on_idle(&mut self, _board: &mut Board) {}
}
