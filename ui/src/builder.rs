// SPDX-License-Identifier: MIT OR Apache-2.0

//! The public facade: configure a window and board, then run the event loop.

use checkerboard_core::{Board, BoardError};
use thiserror::Error;

use crate::app::BoardApp;
use crate::handler::BoardHandler;

/// Errors surfaced while bringing the board window up.
#[derive(Debug, Error)]
pub enum UiError {
    /// The requested board configuration is invalid
    #[error("invalid board configuration: {0}")]
    Config(#[from] BoardError),

    /// The windowing/graphics context could not be created, or the backend's
    /// shaders failed to build; reported by eframe with no retry
    #[error("window creation failed: {0}")]
    Window(#[from] eframe::Error),
}

/// Facade that configures the window and board, then runs the blocking
/// event loop. [`BoardBuilder::run`] only returns once the window closes.
pub struct BoardBuilder {
    width: f32,
    height: f32,
    title: String,
    grid_width: u8,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            title: "Checkerboard".to_owned(),
            grid_width: 8,
        }
    }

    /// Window size in pixels and title bar text.
    pub fn window(mut self, width: f32, height: f32, title: impl Into<String>) -> Self {
        self.width = width;
        self.height = height;
        self.title = title.into();
        self
    }

    /// Number of cells along each side, at most
    /// [`checkerboard_core::MAX_GRID_WIDTH`].
    pub fn grid_width(mut self, grid_width: u8) -> Self {
        self.grid_width = grid_width;
        self
    }

    /// Validate the configuration, open the window and enter the event
    /// loop. Configuration errors are reported before any window exists.
    pub fn run(self, handler: Box<dyn BoardHandler>) -> Result<(), UiError> {
        let board = Board::new(self.grid_width, self.width, self.height)?;

        tracing::info!(
            grid_width = self.grid_width,
            width = self.width,
            height = self.height,
            title = %self.title,
            "opening board window"
        );

        let options = eframe::NativeOptions {
            initial_window_size: Some(egui::vec2(self.width, self.height)),
            resizable: false,
            centered: true,
            ..Default::default()
        };

        eframe::run_native(
            &self.title,
            options,
            Box::new(move |_cc| Box::new(BoardApp::new(board, handler))),
        )?;

        Ok(())
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
