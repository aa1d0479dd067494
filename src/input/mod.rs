//! Input event types and the platform event-name binding.
//!
//! This module defines the vocabulary a host event loop uses to feed the
//! board: named start/move/end events carrying surface-local coordinates,
//! and the binding that selects touch vs mouse event names once at board
//! creation time.

pub mod binding;
pub mod events;

// Re-export commonly used types at module level
pub use binding::EventBinding;
pub use events::{TapEvent, TapPhase};
