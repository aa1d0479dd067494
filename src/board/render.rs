// Redraw pipeline: clear the visible surface, blit the background, replay
// the current gesture into the stroke buffer, composite the buffer on top.
use log::{debug, warn};

use crate::draw::render_segments;

use super::Board;

impl Board {
    /// Redraws the visible surface from scratch.
    ///
    /// Strokes are not drawn on the target directly: they accumulate on the
    /// off-screen buffer, which is composited over the background as a
    /// single blit. This keeps eraser segments (destination-out) scoped to
    /// stroke pixels - they punch through earlier strokes in the buffer,
    /// including strokes from completed gestures, while the background
    /// repainted underneath each time stays intact.
    ///
    /// The buffer is never cleared, so only the current gesture needs
    /// replaying; completed gestures already live in the buffer's pixels.
    pub(crate) fn redraw(&mut self) {
        let ctx = match cairo::Context::new(&self.target) {
            Ok(ctx) => ctx,
            Err(err) => {
                warn!("Skipping redraw, target context unavailable: {err}");
                return;
            }
        };

        // Clear the visible surface entirely
        ctx.set_operator(cairo::Operator::Clear);
        let _ = ctx.paint();
        ctx.set_operator(cairo::Operator::Over);

        self.blit_background(&ctx);
        self.replay_current_gesture();

        // Composite the stroke buffer as one identity blit
        if ctx.set_source_surface(&self.buffer, 0.0, 0.0).is_ok() {
            let _ = ctx.paint();
        }

        self.target.flush();
        self.render_count += 1;
        debug!(
            "Redraw #{} ({} segments in current gesture)",
            self.render_count,
            self.paths.len()
        );
    }

    /// Stretch-blits the background to fill the full surface.
    ///
    /// The image is scaled to the surface's width and height independently;
    /// aspect ratio is intentionally not preserved.
    fn blit_background(&self, ctx: &cairo::Context) {
        let Some(background) = &self.background else {
            return;
        };

        let (bg_width, bg_height) = (background.width(), background.height());
        if bg_width <= 0 || bg_height <= 0 {
            return;
        }

        ctx.save().ok();
        ctx.scale(
            self.width as f64 / bg_width as f64,
            self.height as f64 / bg_height as f64,
        );
        if ctx.set_source_surface(background, 0.0, 0.0).is_ok() {
            // Clamp edge sampling so scaled-up images stay solid to the border
            ctx.source().set_extend(cairo::Extend::Pad);
            let _ = ctx.paint();
        }
        ctx.restore().ok();
    }

    /// Replays the current gesture's segments into the stroke buffer with
    /// the live width and style.
    fn replay_current_gesture(&self) {
        if self.paths.is_empty() {
            return;
        }

        match cairo::Context::new(&self.buffer) {
            Ok(buffer_ctx) => {
                render_segments(
                    &buffer_ctx,
                    &self.paths.segments,
                    self.stroke_style,
                    self.line_width,
                );
            }
            Err(err) => warn!("Skipping stroke replay, buffer context unavailable: {err}"),
        }
        self.buffer.flush();
    }

    /// Clears the visible surface only.
    ///
    /// History and the stroke buffer are untouched: the next redraw brings
    /// the background and accumulated strokes back.
    pub fn clear(&mut self) {
        let ctx = match cairo::Context::new(&self.target) {
            Ok(ctx) => ctx,
            Err(err) => {
                warn!("Skipping clear, target context unavailable: {err}");
                return;
            }
        };

        ctx.set_operator(cairo::Operator::Clear);
        let _ = ctx.paint();
        self.target.flush();
    }
}
