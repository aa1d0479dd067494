//! Cairo-based rendering functions for stroke segments.

use super::color::Color;
use super::segment::{Segment, StrokeMode};

/// Renders a sequence of segments to a Cairo context.
///
/// Segments are drawn in capture order with the supplied width and style.
/// Width and style are live board state, not per-segment data: replaying a
/// gesture after a style change restyles every segment of that gesture.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `segments` - Slice of segments to render
/// * `style` - Stroke color applied to every segment
/// * `width` - Line width in pixels applied to every segment
pub fn render_segments(ctx: &cairo::Context, segments: &[Segment], style: Color, width: f64) {
    for segment in segments {
        render_segment(ctx, segment, style, width);
    }
}

/// Renders a single segment as a round-capped, round-joined line.
///
/// Eraser segments switch the compositing operator to destination-out, so
/// the stroked area removes existing pixels instead of painting over them.
/// The operator change is scoped by save/restore and does not leak into
/// subsequent segments.
pub fn render_segment(ctx: &cairo::Context, segment: &Segment, style: Color, width: f64) {
    ctx.save().ok();

    ctx.new_path();
    ctx.move_to(segment.start_x, segment.start_y);
    ctx.line_to(segment.end_x, segment.end_y);

    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    ctx.set_line_width(width);
    ctx.set_source_rgba(style.r, style.g, style.b, style.a);

    if segment.mode == StrokeMode::Eraser {
        ctx.set_operator(cairo::Operator::DestOut);
    }

    let _ = ctx.stroke();
    ctx.restore().ok();
}
