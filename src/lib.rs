//! Bouncing, draggable, recolorable balls on a fixed-size canvas.
//!
//! The headless core (`state`, `physics`, `animation`, `input`) runs without a
//! window; `rendering` and `ui` draw it through ggez and ggegui.

pub mod animation;
pub mod color;
pub mod config;
pub mod input;
pub mod physics;
pub mod rendering;
pub mod state;
pub mod ui;
