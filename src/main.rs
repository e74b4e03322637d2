// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo driver: a clickable checkerboard.
//!
//! Left press places a colored piece on the cell under the cursor, right or
//! middle press removes it, and the background pulses green from the idle
//! hook.

use anyhow::Result;
use checkerboard_core::{Board, Coord, MouseButton, Rgb};
use checkerboard_ui::{BoardBuilder, BoardHandler};
use clap::Parser;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "checkerboard")]
#[command(about = "Interactive checkerboard demo")]
struct Args {
    /// Cells along each side of the board (1-10)
    #[arg(long, default_value = "10")]
    grid_width: u8,

    /// Window width in pixels
    #[arg(long, default_value = "800")]
    width: f32,

    /// Window height in pixels
    #[arg(long, default_value = "800")]
    height: f32,

    /// Window title
    #[arg(long, default_value = "Checker board")]
    title: String,
}

struct DemoHandler {
    start: Instant,
}

impl BoardHandler for DemoHandler {
    fn on_press(&mut self, board: &mut Board, coord: Coord, button: MouseButton) {
        match button {
            MouseButton::Left => {
                // green channel scales with the column for a little variety
                board.set_piece(Rgb::new(1.0, coord.col as f32 / 10.0, 1.0), coord);
            }
            MouseButton::Middle | MouseButton::Right => {
                let removed = board.remove_piece(coord);
                tracing::debug!(col = coord.col, row = coord.row, removed, "remove requested");
            }
        }
    }

    fn on_idle(&mut self, board: &mut Board) {
        // pulse the background between black and green; the store expects
        // components already clamped to 0..1
        let green = (self.start.elapsed().as_secs_f32() * 2.0)
            .sin()
            .clamp(0.0, 1.0);
        board.set_background_color(Rgb::new(0.0, green, 0.0));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    BoardBuilder::new()
        .window(args.width, args.height, args.title)
        .grid_width(args.grid_width)
        .run(Box::new(DemoHandler {
            start: Instant::now(),
        }))
        .map_err(|e| anyhow::anyhow!("failed to run the board window: {e}"))?;

    Ok(())
}
