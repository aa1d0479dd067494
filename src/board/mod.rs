//! The drawing board widget: input capture, stroke log, and redraw.
//!
//! A [`Board`] binds to a Cairo image surface and turns pointer/touch
//! gestures into stroke segments rendered in real time. Strokes accumulate
//! on an off-screen buffer that is composited over an optional background
//! image, so eraser strokes punch through earlier strokes without exposing
//! anything but the background underneath.

mod background;
mod pointer;
mod render;
#[cfg(test)]
mod tests;

use cairo::{Format, ImageSurface};
use log::info;
use thiserror::Error;

use crate::config::Config;
use crate::draw::{Color, Gesture, History, StrokeMode, color};
use crate::input::{EventBinding, binding};

use background::BackgroundLoader;

/// Errors that can occur when creating a board.
///
/// Creation is the only fallible operation: every runtime operation on a
/// successfully created board is total over its state.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("target is not a drawing surface: unsupported pixel format {0:?}")]
    UnsupportedFormat(Format),

    #[error("target is not a drawing surface: {width}x{height} has no drawable area")]
    EmptySurface { width: i32, height: i32 },

    #[error("failed to allocate off-screen buffer: {0}")]
    BufferAllocation(#[from] cairo::Error),
}

/// A freehand drawing surface bound to a Cairo target.
///
/// The board owns a three-state capture machine (idle, drawing, idle), the
/// in-memory stroke log (current gesture plus full history), and the redraw
/// routine that keeps the target surface in sync. All methods run to
/// completion on the caller's thread; the only asynchronous boundary is
/// background image loading (see [`Board::set_background`]).
pub struct Board {
    /// Visible surface handed in at creation
    pub(crate) target: ImageSurface,
    /// Off-screen stroke buffer, same pixel dimensions as the target.
    /// Never cleared: pixels from completed gestures persist here.
    pub(crate) buffer: ImageSurface,
    pub(crate) width: i32,
    pub(crate) height: i32,

    /// Live stroke width, applied to every segment at render time
    pub(crate) line_width: f64,
    /// Live stroke style, applied to every segment at render time
    pub(crate) stroke_style: Color,
    /// Compositing mode stamped onto segments as they are accepted
    pub(crate) mode: StrokeMode,

    /// Current background image, replaced wholesale by completed loads
    pub(crate) background: Option<ImageSurface>,

    /// Whether a gesture is currently being captured
    pub(crate) drawing: bool,
    /// Endpoint of the most recently accepted segment, or the press point
    /// when no segment has been accepted yet
    pub(crate) last_x: f64,
    pub(crate) last_y: f64,

    /// Segments of the gesture currently being captured
    pub(crate) paths: Gesture,
    /// Append-only log of completed gestures
    pub(crate) history: History,

    /// Event-name family chosen once at creation
    pub(crate) binding: EventBinding,
    /// Minimum summed coordinate delta for a move to produce a segment
    pub(crate) jitter_threshold: f64,

    /// Number of redraws performed so far
    pub(crate) render_count: u64,

    pub(crate) loader: BackgroundLoader,
}

impl Board {
    /// Creates a board bound to the given target surface with default
    /// configuration: line width 10, yellow stroke style, normal mode, no
    /// background.
    ///
    /// # Errors
    /// Fails if the target is not a drawing-capable surface: zero-sized, or
    /// a pixel format without an alpha channel (the eraser relies on
    /// destination-out compositing). Nothing is allocated on failure.
    pub fn create(target: ImageSurface) -> Result<Self, BoardError> {
        Self::with_config(target, &Config::default())
    }

    /// Creates a board applying `[drawing]`, `[input]`, and `[background]`
    /// settings from the given configuration.
    pub fn with_config(target: ImageSurface, config: &Config) -> Result<Self, BoardError> {
        if target.format() != Format::ARgb32 {
            return Err(BoardError::UnsupportedFormat(target.format()));
        }

        let width = target.width();
        let height = target.height();
        if width <= 0 || height <= 0 {
            return Err(BoardError::EmptySurface { width, height });
        }

        // The stroke buffer must share the target's dimensions exactly so
        // the final composite is an identity blit.
        let buffer = ImageSurface::create(Format::ARgb32, width, height)?;

        let touch = config.input.touch.unwrap_or_else(binding::detect_touch);
        let event_binding = EventBinding::for_touch(touch);

        let mut board = Self {
            target,
            buffer,
            width,
            height,
            line_width: config.drawing.default_width,
            stroke_style: config.drawing.default_style.to_color(),
            mode: StrokeMode::from_name(&config.drawing.default_mode)
                .unwrap_or(StrokeMode::Normal),
            background: None,
            drawing: false,
            last_x: 0.0,
            last_y: 0.0,
            paths: Gesture::new(),
            history: History::new(),
            binding: event_binding,
            jitter_threshold: config.drawing.jitter_threshold,
            render_count: 0,
            loader: BackgroundLoader::new(),
        };

        if let Some(image) = &config.background.image {
            board.set_background(image);
        }

        info!(
            "Created {}x{} board ({} input, {} stroke, width {:.0})",
            width,
            height,
            if board.binding.is_touch() {
                "touch"
            } else {
                "mouse"
            },
            color::color_to_name(&board.stroke_style),
            board.line_width,
        );

        Ok(board)
    }

    /// Sets the compositing mode for subsequently accepted segments.
    ///
    /// Takes effect mid-gesture: segments accepted before the call keep the
    /// mode they were stamped with.
    pub fn set_mode(&mut self, mode: StrokeMode) {
        self.mode = mode;
    }

    /// Sets the line width applied at render time.
    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    /// Sets the stroke style applied at render time.
    pub fn set_stroke_style(&mut self, style: Color) {
        self.stroke_style = style;
    }

    /// Current compositing mode.
    pub fn mode(&self) -> StrokeMode {
        self.mode
    }

    /// Current line width.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Current stroke style.
    pub fn stroke_style(&self) -> Color {
        self.stroke_style
    }

    /// Board width in pixels, fixed at creation.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in pixels, fixed at creation.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether a gesture is currently being captured.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Segments of the gesture currently being captured.
    pub fn current_gesture(&self) -> &Gesture {
        &self.paths
    }

    /// The append-only log of completed gestures.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The visible surface the board renders to.
    ///
    /// Hosts present this surface (or the one they handed in at creation,
    /// which is the same underlying surface) after feeding events.
    pub fn surface(&self) -> &ImageSurface {
        &self.target
    }

    /// Whether a background image is currently set.
    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    /// Number of redraws performed since creation.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// The event-name binding chosen at creation.
    pub fn event_binding(&self) -> EventBinding {
        self.binding
    }
}
