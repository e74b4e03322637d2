// SPDX-License-Identifier: MIT OR Apache-2.0

//! Checkerboard UI - egui/eframe rendering for the checkerboard demo
//!
//! This crate owns the window, the two mesh buffers (grid and pieces) and
//! the translation of pointer events into cell-level input callbacks. The
//! board math itself lives in `checkerboard-core`.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod app;
pub mod builder;
pub mod handler;
pub mod mesh;

pub use app::BoardApp;
pub use builder::{BoardBuilder, UiError};
pub use handler::BoardHandler;
