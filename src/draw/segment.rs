//! Segment definition for captured strokes.

/// Compositing mode a segment is drawn with.
///
/// The mode is sampled from the board at the moment a segment is accepted,
/// so a single gesture may contain segments with different modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeMode {
    /// Paint over existing pixels (source-over)
    Normal,
    /// Remove existing pixels in the stroked area (destination-out)
    Eraser,
}

impl StrokeMode {
    /// Parses a mode from its configuration name ("normal" or "eraser").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "normal" => Some(StrokeMode::Normal),
            "eraser" => Some(StrokeMode::Eraser),
            _ => None,
        }
    }

    /// Returns the configuration name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            StrokeMode::Normal => "normal",
            StrokeMode::Eraser => "eraser",
        }
    }
}

/// One straight-line piece of a gesture, in surface-local pixel coordinates.
///
/// Segments are immutable once created: the endpoints and mode are fixed at
/// the moment the pointer move is accepted. Width and style are not stored
/// here - they are applied live at render time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Compositing mode sampled when the segment was accepted
    pub mode: StrokeMode,
    /// Starting X coordinate (previous committed point)
    pub start_x: f64,
    /// Starting Y coordinate (previous committed point)
    pub start_y: f64,
    /// Ending X coordinate
    pub end_x: f64,
    /// Ending Y coordinate
    pub end_y: f64,
}
