//! Library exports for embedding the inkboard drawing surface.
//!
//! Exposes the [`Board`] widget alongside the configuration and drawing
//! primitives it relies on so that host event loops (Wayland overlays, GUI
//! toolkits, tests) can create boards and feed them pointer/touch events.

pub mod board;
pub mod config;
pub mod draw;
pub mod input;

pub use board::{Board, BoardError};
pub use config::Config;
